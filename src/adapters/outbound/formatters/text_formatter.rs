use crate::application::dto::CompareResponse;
use crate::comparison::domain::{GroupReport, RangeChange};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

/// TextFormatter adapter for a compact terminal listing
///
/// ```text
/// production
///   + jaid-core
///   - zahl
///   ^ eslint 6.1.0 -> 6.3.0
/// ```
///
/// Colours are only emitted when the formatter is created with `colored`.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    pub fn colored(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_group(&self, output: &mut String, group: &GroupReport) {
        let changes = &group.changes;
        output.push_str(&self.paint(&group.group_id, Style::new().bold()));
        output.push('\n');

        for name in &changes.added {
            self.push_line(output, "+", Style::new().green(), name);
        }
        for name in &changes.removed {
            self.push_line(output, "-", Style::new().red(), name);
        }
        for moved in &changes.moved {
            self.push_line(
                output,
                ">",
                Style::new().cyan(),
                &format!("{} (from {})", moved.name, moved.old_groups.join(", ")),
            );
        }
        self.push_range_changes(output, "^", Style::new().green(), "", &changes.upgraded);
        self.push_range_changes(output, "v", Style::new().yellow(), "", &changes.downgraded);
        self.push_range_changes(output, "=", Style::new().blue(), " (locked)", &changes.locked);
        self.push_range_changes(
            output,
            "~",
            Style::new().magenta(),
            " (unlocked)",
            &changes.unlocked,
        );
    }

    fn push_line(&self, output: &mut String, marker: &str, style: Style, text: &str) {
        output.push_str(&format!("  {} {}\n", self.paint(marker, style), text));
    }

    fn push_range_changes(
        &self,
        output: &mut String,
        marker: &str,
        style: Style,
        suffix: &str,
        changes: &[RangeChange],
    ) {
        for change in changes {
            self.push_line(
                output,
                marker,
                style,
                &format!(
                    "{} {} -> {}{}",
                    change.name, change.old_range, change.new_range, suffix
                ),
            );
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &CompareResponse) -> Result<String> {
        if !response.has_changes() {
            return Ok("No dependency changes detected.\n".to_string());
        }

        let mut output = String::new();
        let changed: Vec<&GroupReport> = response
            .comparison
            .iter()
            .filter(|group| !group.changes.is_empty())
            .collect();

        for group in &changed {
            self.render_group(&mut output, group);
        }
        output.push_str(&format!(
            "\n{} change(s) in {} group(s)\n",
            response.comparison.total_changes(),
            changed.len()
        ));

        Ok(output)
    }
}
