//! Card rendering for the terminal.
//!
//! All color and banner choices live in an immutable [`Theme`] constructed
//! once at startup and passed explicitly; the renderer itself keeps no state
//! and writes to any `io::Write`.

use chrono::{DateTime, Duration, Utc};
use colored::{Color, Colorize};
use gtd_core::trello::{Attachment, Card};
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct Theme {
    pub banner: String,
    pub header: Color,
    pub field: Color,
    pub on_time: Color,
    pub overdue: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            banner: format!(
                "Welcome to gtd {}, one card at a time",
                env!("CARGO_PKG_VERSION")
            ),
            header: Color::Red,
            field: Color::Blue,
            on_time: Color::Green,
            overdue: Color::Red,
        }
    }
}

impl Theme {
    /// Color for a due date given the time remaining until it: overdue once
    /// the remaining duration goes negative.
    pub fn due_color(&self, remaining: Duration) -> Color {
        if remaining < Duration::zero() {
            self.overdue
        } else {
            self.on_time
        }
    }
}

/// Render one card: id, name, creation date and age, then labels,
/// attachments, and due information when present.
pub fn print_card<W: Write>(
    out: &mut W,
    theme: &Theme,
    card: &Card,
    attachments: &[Attachment],
    now: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "{}", format!("Card {}", card.id).color(theme.header))?;
    field(out, theme, "Name:", &card.name)?;

    if let Some(created) = card.created_at() {
        field(
            out,
            theme,
            "Created on:",
            &format!("{} ({})", created, created.timestamp()),
        )?;
        field(out, theme, "Age:", &format_duration(now - created))?;
    }

    if !card.labels.is_empty() {
        let joined = card
            .labels
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        field(out, theme, "Labels:", &joined)?;
    }

    if !attachments.is_empty() {
        let joined = attachments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        field(out, theme, "Attachments:", &joined)?;
    }

    if let Some(due) = card.due {
        let remaining = due - now;
        let color = theme.due_color(remaining);
        colored_field(out, "Due:", &due.to_string(), color)?;
        colored_field(out, "Remaining:", &format_duration(remaining), color)?;
    }

    Ok(())
}

fn field<W: Write>(out: &mut W, theme: &Theme, label: &str, value: &str) -> io::Result<()> {
    colored_field(out, label, value, theme.field)
}

fn colored_field<W: Write>(out: &mut W, label: &str, value: &str, color: Color) -> io::Result<()> {
    writeln!(out, "  {} {}", label.color(color), value)
}

/// Humanize a duration as days/hours/minutes, with a leading minus for
/// negative (overdue) durations.
pub fn format_duration(duration: Duration) -> String {
    let (sign, duration) = if duration < Duration::zero() {
        ("-", -duration)
    } else {
        ("", duration)
    };
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;
    if days > 0 {
        format!("{}{}d {}h", sign, days, hours)
    } else if hours > 0 {
        format!("{}{}h {}m", sign, hours, minutes)
    } else {
        format!("{}{}m", sign, minutes)
    }
}
