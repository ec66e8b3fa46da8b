//! # Narration
//!
//! Progress reporting is a dependency of the API, not ambient state. Anything
//! that implements [`Narrator`] can receive the running commentary of a
//! generation: the CLI prints it to the terminal, tests record it.
//!
//! Info messages are only delivered when the narrator is verbose. Success,
//! warning and error messages are always delivered.

use crate::commands::{CmdMessage, MessageLevel};
use std::sync::Mutex;

pub trait Narrator: Send + Sync {
    fn is_verbose(&self) -> bool;

    fn set_verbose(&mut self, verbose: bool);

    /// Deliver a message unconditionally.
    fn emit(&self, message: CmdMessage);

    fn info(&self, content: &str) {
        if self.is_verbose() {
            self.emit(CmdMessage::info(content));
        }
    }

    fn success(&self, content: &str) {
        self.emit(CmdMessage::success(content));
    }

    fn warning(&self, content: &str) {
        self.emit(CmdMessage::warning(content));
    }

    fn error(&self, content: &str) {
        self.emit(CmdMessage::error(content));
    }
}

/// Keeps every delivered message in memory.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    verbose: bool,
    messages: Mutex<Vec<CmdMessage>>,
}

impl RecordingNarrator {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<CmdMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn contents(&self) -> Vec<String> {
        self.messages().into_iter().map(|m| m.content).collect()
    }

    pub fn contents_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.level == level)
            .map(|m| m.content)
            .collect()
    }
}

impl Narrator for RecordingNarrator {
    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn emit(&self, message: CmdMessage) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_is_dropped_when_quiet() {
        let narrator = RecordingNarrator::new(false);
        narrator.info("Generating ideas for topic: AI");
        narrator.success("Ideas stored successfully!");
        assert_eq!(narrator.contents(), vec!["Ideas stored successfully!"]);
    }

    #[test]
    fn info_is_kept_when_verbose() {
        let narrator = RecordingNarrator::new(true);
        narrator.info("Generating ideas for topic: AI");
        assert_eq!(
            narrator.contents_at(MessageLevel::Info),
            vec!["Generating ideas for topic: AI"]
        );
    }

    #[test]
    fn errors_are_always_kept() {
        let narrator = RecordingNarrator::new(false);
        narrator.error("Error storing ideas: disk full");
        assert_eq!(
            narrator.contents_at(MessageLevel::Error),
            vec!["Error storing ideas: disk full"]
        );
    }
}
