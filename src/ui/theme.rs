//! Visual theme and styling.

use console::Style;

/// Console styles for setup output.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Success lines (green).
    pub success: Style,
    /// Warning lines (orange).
    pub warning: Style,
    /// Error lines (red bold).
    pub error: Style,
    /// Informational lines (cyan).
    pub info: Style,
    /// Secondary text.
    pub dim: Style,
    /// Emphasis.
    pub highlight: Style,
    /// Banner text (cyan bold).
    pub header: Style,
    /// Tool counters such as `[2/7]`.
    pub step_number: Style,
    /// Commands echoed in dry-run and error output.
    pub command: Style,
    /// Box-drawing borders.
    pub border: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// The coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            step_number: Style::new().dim(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
            command: Style::new(),
            border: Style::new(),
        }
    }

    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner followed by a rule.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}\n{}",
            self.header.apply_to("🚀"),
            self.highlight.apply_to(title),
            self.border.apply_to("=".repeat(50))
        )
    }

    /// Frame a failed command and its captured output, one entry per line.
    pub fn format_error_block(&self, command: &str, output: &str) -> Vec<String> {
        let b = &self.border;
        let mut lines = vec![
            format!("    {}", b.apply_to("┌─ Command ──────────────────────────")),
            format!("    {} {}", b.apply_to("│"), self.command.apply_to(command)),
        ];
        if !output.is_empty() {
            lines.push(format!("    {}", b.apply_to("├─ Output ───────────────────────────")));
            lines.extend(output.lines().map(|l| format!("    {} {}", b.apply_to("│"), l)));
        }
        lines.push(format!("    {}", b.apply_to("└────────────────────────────────────")));
        lines
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
