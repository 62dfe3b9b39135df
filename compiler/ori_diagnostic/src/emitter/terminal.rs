//! Terminal Emitter
//!
//! One line per diagnostic, with optional ANSI color:
//!
//! ```text
//! error[E1006]: src/main.ori:3:11 use && (e.g. a < b && b < c) (got Lt "<")
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; the other modes ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: None,
        }
    }

    /// Prefix subsequent diagnostics with `path:`.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: path:line:col message (got ...)
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = write!(self.writer, ": ");
        if let Some(path) = &self.path {
            let _ = write!(self.writer, "{path}:");
        }
        let _ = writeln!(self.writer, "{diagnostic}");

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": {error_count} syntax error{} reported",
            plural_s(error_count)
        );
    }
}
