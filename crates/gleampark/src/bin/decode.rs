//! Decodes a playground URL given as the first argument; the snippet is
//! written to stdout.
//!
//! Usage: `gleam-play-decode https://playground.gleam.run/#...`

use std::path::Path;
use std::process::ExitCode;

use gleampark::{decode_from_playground, Settings, TerminalHost};

const SETTINGS_FILE: &str = "gleampark.toml";

fn main() -> ExitCode {
    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: gleam-play-decode <playground-url>");
        return ExitCode::FAILURE;
    };

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    let mut host = TerminalHost::with_input(url);
    match decode_from_playground(&mut host, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
