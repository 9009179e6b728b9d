//! UI for an attached terminal: colors and live spinners.

use console::Term;

use super::{
    LaunchpadTheme, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// UI for an interactive terminal.
///
/// Status lines go to stdout; warnings, errors and error blocks to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LaunchpadTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: LaunchpadTheme::default(),
            mode,
        }
    }

    fn status(&self, line: &str) {
        if self.mode.shows_status() {
            // a closed stdout only costs status lines
            self.out.write_line(line).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.status(msg);
    }

    fn success(&mut self, msg: &str) {
        self.status(&self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.err.write_line(&self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        self.err.write_line(&self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = if self.mode.shows_spinners() {
            ProgressSpinner::new(message)
        } else {
            ProgressSpinner::hidden()
        };
        Box::new(spinner)
    }

    fn show_header(&mut self, title: &str) {
        self.status(&self.theme.format_header(title));
    }

    fn show_hint(&mut self, hint: &str) {
        self.status(&self.theme.format_hint(hint));
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        let block = self.theme.format_error_block(command, output, hint);
        self.err.write_line(&block).ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Pick the UI for this process.
///
/// The terminal UI needs both `interactive` and a TTY on stdout; anything
/// else, including CI, gets plain line output.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_its_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn silent_terminal_hides_spinner() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        let spinner = ui.start_spinner("Installing dependencies");
        assert!(spinner.progress_bar().is_some_and(|bar| bar.is_hidden()));
    }

    #[test]
    fn ci_gets_plain_output() {
        let ui = create_ui(false, OutputMode::Silent);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
