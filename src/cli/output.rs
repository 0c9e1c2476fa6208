//! Command output: one JSON document in robot mode, a line-based layout for
//! humans.

use console::style;
use serde::Serialize;

use crate::error::{LaunchrecError, Result};

const KEY_WIDTH: usize = 18;

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| LaunchrecError::Config(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// Accumulates human-readable output lines and renders them in one go.
#[derive(Default)]
pub struct HumanLayout {
    lines: Vec<String>,
}

impl HumanLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    /// Key-value line. Padding happens before styling so ANSI codes do not
    /// count against the column width.
    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key = style(format!("{key:KEY_WIDTH$}")).dim().to_string();
        self.lines.push(format!("{key} {value}"));
        self
    }

    /// One ranking row: position, fixed-width label column, trailing detail.
    pub fn ranked_row(&mut self, position: usize, label: &str, trailing: &str) -> &mut Self {
        self.lines.push(format!("{position:>2}. {label:<26} {trailing}"));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    /// Dim parenthetical, for empty-result placeholders.
    pub fn note(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(format!("({text})")).dim().to_string());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
