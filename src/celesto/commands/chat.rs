use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::narrate::Narrator;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatOptions {
    pub kb_path: Option<PathBuf>,
    pub dump_path: Option<PathBuf>,
}

/// Interactive chat is not built yet; this only says so.
pub fn run<N: Narrator>(narrator: &N, options: &ChatOptions) -> Result<CmdResult> {
    narrator.info(&format!("Starting chat mode with options: {:?}", options));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning("Chat mode is not implemented yet."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::narrate::RecordingNarrator;

    #[test]
    fn reports_placeholder() {
        let narrator = RecordingNarrator::new(false);
        let result = run(&narrator, &ChatOptions::default()).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.ideas.is_empty());
        assert!(narrator.messages().is_empty());
    }

    #[test]
    fn narrates_options_when_verbose() {
        let narrator = RecordingNarrator::new(true);
        let options = ChatOptions {
            kb_path: Some(PathBuf::from("./kb")),
            dump_path: None,
        };
        run(&narrator, &options).unwrap();

        let contents = narrator.contents();
        assert_eq!(contents.len(), 1);
        assert!(contents[0].starts_with("Starting chat mode with options:"));
    }
}
