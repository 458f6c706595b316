//! Inserts the vocabulary module strings into every existing locale file.

use std::path::Path;
use std::process::ExitCode;

use locale_tools::config::load_settings;
use locale_tools::merge::update_locales;
use locale_tools::vocab::VOCAB_ENTRIES;
use locale_tools::{
    LocaleError,
    logging,
};

fn run() -> Result<(), LocaleError> {
    let root = Path::new("");
    let settings = load_settings(root)?;

    let stdout = std::io::stdout();
    update_locales(&settings, root, VOCAB_ENTRIES, &mut stdout.lock())?;
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
