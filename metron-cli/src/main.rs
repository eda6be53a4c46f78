//! Metron command interpreter
//!
//! Reads one command per line from stdin and writes one result line to
//! stdout. Logs go to stderr. Type `help` for the command list.

mod config;

use std::io::{self, BufRead, Write};
use metron::{Metron, Reply};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use config::{CliConfig, DEFAULT_LOG};

/// `filter` is already validated by `CliConfig`
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = CliConfig::from_env();
    init_logging(&config.log_filter);
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let metron = Metron::new(config.format);
    info!(format = ?metron.format(), version = env!("CARGO_PKG_VERSION"), "metron ready");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                break;
            }
            Ok(_) => {
                let (output, quit) = match metron.run_line(&line) {
                    Reply::Output(text) => (text, false),
                    Reply::Quit(text) => (text, true),
                    Reply::Empty => continue,
                };
                if let Err(e) = writeln!(out, "{}", output).and_then(|_| out.flush()) {
                    error!(error = %e, "failed to write output");
                    break;
                }
                if quit {
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }
}
