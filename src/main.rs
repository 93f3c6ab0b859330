use std::process::ExitCode;

fn main() -> ExitCode {
    match easy_add::cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
