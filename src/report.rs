//! Console output for demos. All user-facing printing goes through
//! `Reporter`, which owns the colour and verbosity decisions.

use crate::config::OutputConfig;
use colored::Colorize;
use std::fmt::Display;

#[derive(Debug)]
pub struct Reporter {
    verbose: bool,
    color: bool,
    // Captured plain-text lines instead of printing, for tests.
    captured: Option<Vec<String>>,
}

impl Reporter {
    pub fn new(output: &OutputConfig) -> Self {
        colored::control::set_override(output.color);
        Reporter {
            verbose: output.verbose,
            color: output.color,
            captured: None,
        }
    }

    /// Records plain lines in memory; nothing reaches stdout.
    pub fn capturing(verbose: bool) -> Self {
        Reporter {
            verbose,
            color: false,
            captured: Some(Vec::new()),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn captured(&self) -> &[String] {
        self.captured.as_deref().unwrap_or(&[])
    }

    fn emit(&mut self, plain: String, styled: impl Display) {
        match &mut self.captured {
            Some(lines) => lines.push(plain),
            None if self.color => println!("{styled}"),
            None => println!("{plain}"),
        }
    }

    pub fn section(&mut self, title: &str) {
        let plain = format!("=== {title} ===");
        let styled = plain.bold().cyan();
        self.emit(String::new(), "");
        self.emit(plain, styled);
    }

    pub fn line(&mut self, label: &str, value: impl Display) {
        let plain = format!("  {label}: {value}");
        let styled = format!("  {}: {value}", label.bold());
        self.emit(plain, styled);
    }

    pub fn ok(&mut self, msg: &str) {
        let plain = format!("  ok: {msg}");
        let styled = format!("  {} {msg}", "ok:".green().bold());
        self.emit(plain, styled);
    }

    pub fn warn(&mut self, msg: &str) {
        let plain = format!("  warning: {msg}");
        let styled = format!("  {} {msg}", "warning:".yellow().bold());
        self.emit(plain, styled);
    }

    /// Printed only in verbose mode.
    pub fn detail(&mut self, msg: impl Display) {
        if !self.verbose {
            return;
        }
        let plain = format!("    {msg}");
        let styled = plain.dimmed();
        self.emit(plain, styled);
    }

    /// Failures go to stderr so they survive stdout redirection.
    pub fn error(&mut self, msg: impl Display) {
        let plain = format!("error: {msg}");
        match &mut self.captured {
            Some(lines) => lines.push(plain),
            None if self.color => eprintln!("{}", plain.red().bold()),
            None => eprintln!("{plain}"),
        }
    }
}
