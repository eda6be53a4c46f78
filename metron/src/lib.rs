//! Metron - Measurement service layer
//!
//! Wraps `metron-units` for callers that hold possibly-missing values or
//! plain text:
//! - `service`: guarded conversion, arithmetic and equality
//! - `input`: text to finite number
//! - `command`: one-line text commands, executed per category
//! - `render`: text or JSON output

mod category;
mod error;
pub mod command;
pub mod input;
pub mod render;
pub mod service;

pub use category::{Category, CategoryTask};
pub use command::{Command, Response};
pub use error::{codes, CommandError};
pub use render::{OutputFormat, Renderer};

use tracing::debug;

/// What the caller should do after one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print this line
    Output(String),
    /// Nothing to print
    Empty,
    /// Print this line, then stop reading
    Quit(String),
}

/// Main Metron engine: parses, executes and renders command lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Metron {
    renderer: Renderer,
}

impl Metron {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            renderer: Renderer::new(format),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.renderer.format()
    }

    /// Handle one line of input
    pub fn run_line(&self, line: &str) -> Reply {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Empty,
            Err(e) => {
                debug!(line, error = %e, "command rejected");
                return Reply::Output(self.renderer.render_error(&e));
            }
        };

        let rendered = match command::execute(&command) {
            Ok(response) => self.renderer.render(&response),
            Err(e) => self.renderer.render_error(&e),
        };

        if command == Command::Quit {
            Reply::Quit(rendered)
        } else {
            Reply::Output(rendered)
        }
    }
}
