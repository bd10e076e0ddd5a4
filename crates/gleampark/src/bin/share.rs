//! Reads a snippet from stdin, prints its playground URL, and optionally
//! delivers it per a share method given on the command line.
//!
//! Usage: `gleam-play-share [clipboard|browser|both|none] < snippet.gleam`

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use gleampark::{share_to_playground, Settings, ShareMethod, TerminalHost};
use gleampark_playground::build_playground_url;

const SETTINGS_FILE: &str = "gleampark.toml";

fn main() -> ExitCode {
    let method = match std::env::args().nth(1).as_deref() {
        None | Some("none") => None,
        Some("clipboard") => Some(ShareMethod::Clipboard),
        Some("browser") => Some(ShareMethod::Browser),
        Some("both") => Some(ShareMethod::Both),
        Some(other) => {
            eprintln!("unknown share method: {other}");
            eprintln!("usage: gleam-play-share [clipboard|browser|both|none] < snippet.gleam");
            return ExitCode::FAILURE;
        }
    };

    let mut code = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut code) {
        eprintln!("error: could not read snippet from stdin: {err}");
        return ExitCode::FAILURE;
    }

    println!("{}", build_playground_url(&code));

    let Some(method) = method else {
        return ExitCode::SUCCESS;
    };
    let mut settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    settings.share_method = method;

    let mut host = TerminalHost::with_selection(code);
    match share_to_playground(&mut host, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
