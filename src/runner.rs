use crate::archive::{self, ArchiveKind};
use crate::download::http;
use crate::error::Result;
use crate::install::executable::{ensure_destination, install_executable};
use crate::models::{Config, ResolvedTarget};
use crate::utils::get_filename_from_url;
use crate::vars::VariableSet;
use log::{debug, info};
use std::path::PathBuf;

/// Substitute variables into the source URL and entry path templates
pub fn resolve_target(config: &Config, vars: &VariableSet) -> Result<ResolvedTarget> {
    Ok(ResolvedTarget {
        url: vars.substitute(&config.from)?,
        entry_path: vars.substitute(&config.file)?,
    })
}

/// Download the archive and install the one requested entry
///
/// Returns the path of the written file.
pub fn fetch_and_install(config: &Config) -> Result<PathBuf> {
    let vars = VariableSet::new(&config.vars)?;
    let target = resolve_target(config, &vars)?;
    let kind = ArchiveKind::from_url(&target.url)?;

    ensure_destination(&config.to, config.mkdirs)?;

    info!("Retrieving {}", target.url);
    let agent = http::build_agent(config.timeout)?;
    let body = http::open_archive_stream(&agent, &target.url)?;

    debug!(
        "Looking for {} in {kind} archive {}",
        target.entry_path,
        get_filename_from_url(&target.url)
    );
    let entry = archive::extract(kind, body, &target.entry_path)?;

    let out_path = install_executable(&target.entry_path, &entry, &config.to)?;
    info!("Extracted file to {}", out_path.display());
    Ok(out_path)
}
