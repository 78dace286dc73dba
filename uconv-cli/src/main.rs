//! uconv - interactive unit converter
//!
//! Reads `<value> <unit> to <unit>` lines from stdin and prints one reply per
//! line. `exit` or EOF ends the session.
//!
//! Environment:
//! - UCONV_OUTPUT: `text` (default) or `json`
//! - UCONV_PROMPT: prompt shown before each line in text mode
//! - RUST_LOG: log filter for stderr (default `warn`)

mod config;

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use uconv::{Converter, Reply};
use uconv_units::UNITS;
use config::Config;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(units = UNITS.len(), format = ?config.format, "uconv started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&config, stdin.lock(), stdout.lock()) {
        tracing::error!(error = %e, "I/O error");
        std::process::exit(1);
    }
}

/// Prompt-read-reply loop
fn run<R: BufRead, W: Write>(config: &Config, mut input: R, mut output: W) -> io::Result<()> {
    let converter = Converter::default().with_format(config.format);

    loop {
        if config.show_prompt() {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("EOF");
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match converter.handle_line(line) {
            Reply::Exit => break,
            Reply::Text(text) => {
                writeln!(output, "{}", text)?;
                output.flush()?;
            }
        }
    }

    Ok(())
}
