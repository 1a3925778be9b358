//! Binary entrypoint for fontinline-cli (made by FontLab https://www.fontlab.com/)

use fontinline_cli::{ConfigError, CONFIG_ERROR_STATUS};

fn main() {
    if let Err(err) = fontinline_cli::run() {
        eprintln!("error: {err:#}");
        let status = if err.downcast_ref::<ConfigError>().is_some() {
            CONFIG_ERROR_STATUS
        } else {
            1
        };
        std::process::exit(status);
    }
}
