//! Generate and destroy report.

use bija_scaffold::Change;

use super::output::{Output, Report};

/// The change log of one generate or destroy run.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub changes: Vec<Change>,
}

impl ScaffoldReport {
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        if self.changes.is_empty() {
            out.preformatted("Nothing to do.");
            return;
        }

        for change in &self.changes {
            out.status(change.action, &change.display_path());
        }
    }
}
