//! Human-readable audit blocks appended to a project's notes log.
//!
//! A block is a title line followed by one `Label: value` line per supplied
//! field. Blocks are separated from earlier notes by a blank line and
//! existing content is never rewritten.

use crate::dates::format_date;
use crate::types::CalendarDate;

/// Separator placed between consecutive entries in the notes log.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// One audit block under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    title: String,
    lines: Vec<(&'static str, String)>,
}

impl AuditEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn date(mut self, label: &'static str, value: CalendarDate) -> Self {
        self.lines.push((label, format_date(value)));
        self
    }

    pub fn days(mut self, label: &'static str, value: i32) -> Self {
        let unit = if value == 1 { "day" } else { "days" };
        self.lines.push((label, format!("{value} {unit}")));
        self
    }

    /// Line breaks inside `value` are folded into spaces so free text can
    /// never start a line of its own in the log.
    pub fn text(mut self, label: &'static str, value: &str) -> Self {
        let folded = value
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push((label, folded));
        self
    }

    /// Add a text line only when `value` is present and non-blank.
    pub fn optional_text(self, label: &'static str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.text(label, v),
            None => self,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}:", self.title);
        for (label, value) in &self.lines {
            out.push('\n');
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

/// Return `notes` with `entry` appended.
pub fn append_entry(notes: &str, entry: &AuditEntry) -> String {
    let block = entry.render();
    if notes.is_empty() {
        block
    } else {
        format!("{notes}{ENTRY_SEPARATOR}{block}")
    }
}

/// Count the audit blocks in a notes log whose title line is `title`.
pub fn count_entries(notes: &str, title: &str) -> usize {
    let header = format!("{title}:");
    notes.lines().filter(|line| *line == header).count()
}
