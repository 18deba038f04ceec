//! Message boxes shown by the dialog.

/// Informational and yes/no prompts
pub trait Notifier {
    /// Show a message the user only has to acknowledge
    fn inform(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> bool;
}

/// Writes messages to the log and answers every question with a fixed reply
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier {
    pub assume_yes: bool,
}

impl LogNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for LogNotifier {
    fn inform(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn confirm(&self, question: &str) -> bool {
        tracing::info!("{} -> {}", question, if self.assume_yes { "yes" } else { "no" });
        self.assume_yes
    }
}
