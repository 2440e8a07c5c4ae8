use crate::application::dto::CompareResponse;
use crate::comparison::domain::{GroupReport, MovedDependency, RangeChange};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for range changes
const RANGE_TABLE_HEADER: &str = "| Package | Old Range | New Range |\n";

/// Markdown table separator line for range changes
const RANGE_TABLE_SEPARATOR: &str = "|---------|-----------|-----------|\n";

/// Markdown table header for moved dependencies
const MOVED_TABLE_HEADER: &str = "| Package | Previous Group(s) |\n";

/// Markdown table separator line for moved dependencies
const MOVED_TABLE_SEPARATOR: &str = "|---------|-------------------|\n";

/// MarkdownFormatter adapter for human-readable reports
///
/// One section per group that has changes. Plain name lists for added and
/// removed dependencies, tables for moved ones and for range changes.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Inline code span whose fence outlasts any backtick run in `text`
    fn code(text: &str) -> String {
        let text = Self::escape_markdown_table_cell(text);
        let longest_run = text.split(|c| c != '`').map(str::len).max().unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);
        let padding = if text.starts_with('`') || text.ends_with('`') {
            " "
        } else {
            ""
        };
        format!("{0}{1}{2}{1}{0}", fence, padding, text)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &CompareResponse) {
        output.push_str("# Dependency Changes\n\n");
        output.push_str(&format!(
            "Comparing {} with {}.\n\n",
            Self::code(response.metadata.old_manifest()),
            Self::code(response.metadata.new_manifest())
        ));
    }

    fn render_group(&self, output: &mut String, group: &GroupReport) {
        let changes = &group.changes;
        output.push_str(&format!("## {}\n\n", group.title));

        self.render_names(output, "Added", &changes.added);
        self.render_names(output, "Removed", &changes.removed);
        self.render_moved(output, &changes.moved);
        self.render_range_changes(output, "Upgraded", &changes.upgraded);
        self.render_range_changes(output, "Downgraded", &changes.downgraded);
        self.render_range_changes(output, "Locked", &changes.locked);
        self.render_range_changes(output, "Unlocked", &changes.unlocked);
    }

    fn render_names(&self, output: &mut String, heading: &str, names: &[String]) {
        if names.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", heading));
        for name in names {
            output.push_str(&format!("- {}\n", Self::code(name)));
        }
        output.push('\n');
    }

    fn render_moved(&self, output: &mut String, moved: &[MovedDependency]) {
        if moved.is_empty() {
            return;
        }
        output.push_str("### Moved\n\n");
        output.push_str(MOVED_TABLE_HEADER);
        output.push_str(MOVED_TABLE_SEPARATOR);
        for dependency in moved {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::code(&dependency.name),
                Self::escape_markdown_table_cell(&dependency.old_groups.join(", "))
            ));
        }
        output.push('\n');
    }

    fn render_range_changes(&self, output: &mut String, heading: &str, changes: &[RangeChange]) {
        if changes.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", heading));
        output.push_str(RANGE_TABLE_HEADER);
        output.push_str(RANGE_TABLE_SEPARATOR);
        for change in changes {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::code(&change.name),
                Self::code(&change.old_range),
                Self::code(&change.new_range)
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, response: &CompareResponse) {
        let changed_groups = response
            .comparison
            .iter()
            .filter(|group| !group.changes.is_empty())
            .count();
        output.push_str(&format!(
            "---\n\n{} change(s) in {} group(s).\n",
            response.comparison.total_changes(),
            changed_groups
        ));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &CompareResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);

        if !response.has_changes() {
            output.push_str("No dependency changes detected.\n");
            return Ok(output);
        }

        for group in response
            .comparison
            .iter()
            .filter(|group| !group.changes.is_empty())
        {
            self.render_group(&mut output, group);
        }
        self.render_summary(&mut output, response);

        Ok(output)
    }
}
