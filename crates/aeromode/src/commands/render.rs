use std::io::Read;
use std::process::Command;

use aeromode_core::{config, render};

/// Renders the mode pill fragment and prints it to stdout.
///
/// The raw tracker output comes from the argument, from stdin (`-`),
/// or from running the configured tracker command once. A tracker that
/// cannot be spawned, exits non-zero, or prints nothing all collapse to
/// absent output, which renders the default `main` pill.
pub fn execute(raw: Option<&str>, json: bool) {
    let captured;
    let output = match raw {
        Some("-") => {
            captured = read_stdin();
            captured.as_deref()
        }
        Some(text) => Some(text),
        None => {
            captured = run_tracker(&config::load().command);
            captured.as_deref()
        }
    };

    let fragment = render::render(output);
    if json {
        match serde_json::to_string(&fragment) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: could not serialize fragment: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", fragment.to_html());
    }
}

fn read_stdin() -> Option<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).ok()?;
    Some(buf)
}

/// Runs the tracker command line and captures its stdout. Any failure
/// returns `None` — the widget makes no distinction between a missing
/// tracker, a failed one, and an empty mode.
fn run_tracker(command: &str) -> Option<String> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    let output = Command::new(program).args(parts).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
