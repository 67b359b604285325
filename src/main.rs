use std::env;
use std::process::ExitCode;

use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use othello_engine::board::Side;
use othello_engine::protocol;

fn main() -> ExitCode {
    // Stdout belongs to the referee, so all logging goes to stderr.
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let side = match env::args().nth(1).as_deref().map(str::parse::<Side>) {
        Some(Ok(side)) => side,
        _ => {
            eprintln!("usage: othello_engine <Black|White>");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = protocol::run_loop(side) {
        error!("referee loop ended with an I/O error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
