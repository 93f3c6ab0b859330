use crate::vars::parse_key_value;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Version string reported by --version
pub const VERSION: &str = concat!(
    env!("EASY_ADD_VERSION"),
    " (commit ",
    env!("EASY_ADD_COMMIT"),
    ")"
);

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Args {
    /// URL of a tar.gz or zip archive to download. May contain {{.name}} references to variables
    #[arg(long, value_name = "URL")]
    pub from: String,
    /// Path of the executable to extract within the archive. May contain {{.name}} references to variables
    #[arg(long, value_name = "PATH")]
    pub file: String,
    /// Directory where the executable will be placed
    #[arg(long, value_name = "DIR", default_value = "/usr/local/bin")]
    pub to: PathBuf,
    /// Set a variable that can be referenced in --from and --file, can be specified multiple times
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,
    /// Create the --to directory, including parents, if it does not exist
    #[arg(long)]
    pub mkdirs: bool,
    /// Give up on the download after this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Settings for one invocation, fixed once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Archive URL template
    pub from: String,
    /// In-archive entry path template
    pub file: String,
    pub to: PathBuf,
    /// User bindings, applied over the built-in variables
    pub vars: Vec<(String, String)>,
    pub mkdirs: bool,
    pub timeout: Option<Duration>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            from: args.from,
            file: args.file,
            to: args.to,
            vars: args.vars,
            mkdirs: args.mkdirs,
            timeout: args.timeout.map(Duration::from_secs),
        }
    }
}

/// Source URL and entry path after variable substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub url: String,
    pub entry_path: String,
}
