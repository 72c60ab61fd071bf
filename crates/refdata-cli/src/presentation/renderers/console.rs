use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;

/// Writes a command result to stdout, either as pretty JSON or as the
/// badge, the text view and the follow-up tips.
pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    fn write_plain<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> io::Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}\n", badge.icon(), badge.label.bold())?;
        }

        write!(out, "{}", result.content)?;

        if result.suggestions.is_empty() {
            return Ok(());
        }
        writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
        for tip in &result.suggestions {
            match &tip.command {
                Some(cmd) => writeln!(out, "  • {}: {}", tip.description, cmd.cyan())?,
                None => writeln!(out, "  • {}", tip.description)?,
            }
        }
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let mut out = io::stdout().lock();
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        } else {
            self.write_plain(&mut out, &result)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge};

    struct Text(&'static str);

    impl Display for Text {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            writeln!(f, "{}", self.0)
        }
    }

    impl Serialize for Text {
        fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
            s.serialize_str(self.0)
        }
    }

    #[test]
    fn test_plain_output_lists_tips_after_content() {
        let result = CommandResultViewModel::new(Text("body"))
            .with_badge(StatusBadge::success("Done"))
            .with_suggestion(Guidance::new("Look").with_command("refdata tree"))
            .with_suggestion(Guidance::new("Just a note"));

        let mut buf = Vec::new();
        ConsoleRenderer::new(false)
            .write_plain(&mut buf, &result)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        let body = text.find("body").unwrap();
        let tips = text.find("Tips:").unwrap();
        assert!(body < tips);
        assert!(text.contains("  • Just a note\n"));
        assert!(text.contains("refdata tree"));
        assert!(text.contains("Done"));
    }
}
