//! Reports translation keys missing from each non-reference locale.

use std::path::Path;
use std::process::ExitCode;

use locale_tools::config::load_settings;
use locale_tools::diff::compare_locales;
use locale_tools::{
    LocaleError,
    logging,
};

fn run() -> Result<(), LocaleError> {
    // Relative root keeps locale paths relative to the working directory
    let root = Path::new("");
    let settings = load_settings(root)?;

    let stdout = std::io::stdout();
    compare_locales(&settings, root, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
