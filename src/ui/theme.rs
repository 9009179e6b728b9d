//! Styles and the line layouts shared by every UI.
//!
//! Both [`TerminalUI`](super::TerminalUI) and
//! [`NonInteractiveUI`](super::NonInteractiveUI) render through a
//! [`LaunchpadTheme`]; the plain one simply carries no-op styles.

use console::Style;

/// Launchpad's visual theme.
#[derive(Debug, Clone)]
pub struct LaunchpadTheme {
    /// Completed checks and steps (green).
    pub success: Style,
    /// Missing artifacts and skipped work (orange).
    pub warning: Style,
    /// Fatal problems (red bold).
    pub error: Style,
    /// Live installer output under a spinner.
    pub dim: Style,
    /// Header titles.
    pub highlight: Style,
    /// Header icon.
    pub header: Style,
    /// The failed command inside an error block.
    pub command: Style,
    /// Error block frame.
    pub border: Style,
    /// Next-step hints.
    pub hint: Style,
}

impl Default for LaunchpadTheme {
    fn default() -> Self {
        Self::new(should_use_colors())
    }
}

impl LaunchpadTheme {
    /// Build the theme. Without colors every style is a no-op.
    pub fn new(colored: bool) -> Self {
        let style = |s: Style| if colored { s } else { Style::new() };
        Self {
            success: style(Style::new().green()),
            warning: style(Style::new().color256(208)),
            error: style(Style::new().red().bold()),
            dim: style(Style::new().dim()),
            highlight: style(Style::new().bold()),
            header: style(Style::new().bold().magenta()),
            command: style(Style::new().dim().italic()),
            border: style(Style::new().dim()),
            hint: style(Style::new().magenta().dim()),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Header banner, padded by a blank line on each side.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "\n{} {}\n",
            self.header.apply_to("🚀"),
            self.highlight.apply_to(title)
        )
    }

    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(format!("💡 {}", hint)))
    }

    /// Frame a failed command and its output.
    ///
    /// The output section is omitted when there was no output.
    pub fn format_error_block(&self, command: &str, output: &str, hint: Option<&str>) -> String {
        let frame = |edge: &str| format!("    {}", self.border.apply_to(edge));
        let row = |text: String| format!("    {} {}", self.border.apply_to("│"), text);

        let mut lines = vec![
            String::new(),
            frame("┌─ Command ──────────────────────────"),
            row(self.command.apply_to(command).to_string()),
        ];
        if !output.is_empty() {
            lines.push(frame("├─ Output ───────────────────────────"));
            lines.extend(output.lines().map(|line| row(line.to_string())));
        }
        lines.push(frame("└────────────────────────────────────"));

        if let Some(hint) = hint {
            lines.push(String::new());
            lines.push(format!("    {}", self.hint.apply_to(format!("Hint: {}", hint))));
        }
        lines.join("\n")
    }
}

/// Whether stdout should get colored output.
///
/// `NO_COLOR` and `--no-color` both turn colors off.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() || !console::colors_enabled() {
        return false;
    }
    console::Term::stdout().is_term()
}
