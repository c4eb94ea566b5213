//! Output trait for rendering reports to different formats.

use bija_scaffold::Action;
use colored::{ColoredString, Colorize};

/// Width of the right-aligned action column.
const LABEL_WIDTH: usize = 8;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render one change to the project tree.
    fn status(&mut self, action: Action, path: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn label(action: Action) -> ColoredString {
        let label = format!("{:>LABEL_WIDTH$}", action.as_str());
        let colored = match action {
            Action::Create => label.green(),
            Action::Update => label.yellow(),
            Action::Exists => label.cyan(),
            Action::Remove | Action::Missing => label.red(),
        };
        colored.bold()
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn status(&mut self, action: Action, path: &str) {
        println!("{}  {}", Self::label(action), path);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}
