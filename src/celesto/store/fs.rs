use super::IdeaStore;
use crate::error::{CelestoError, Result};
use crate::model::{Idea, IdeaLocation};
use async_trait::async_trait;
use tokio::fs;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IdeaStore for FileStore {
    async fn save_ideas(&self, location: &IdeaLocation, ideas: &[Idea]) -> Result<()> {
        // create_dir_all is a no-op for existing folders, so racing writers are fine.
        fs::create_dir_all(&location.kb_path)
            .await
            .map_err(CelestoError::Io)?;
        fs::create_dir_all(&location.folder)
            .await
            .map_err(CelestoError::Io)?;

        let content = serde_json::to_string_pretty(ideas).map_err(CelestoError::Serialization)?;
        fs::write(&location.file, content)
            .await
            .map_err(CelestoError::Io)?;

        tracing::debug!(file = %location.file.display(), count = ideas.len(), "wrote ideas");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_ideas, TestEnv};

    #[tokio::test]
    async fn creates_folders_and_writes_pretty_json() {
        let env = TestEnv::new();
        let kb = env.root.join("kb");
        let location = IdeaLocation::new(&kb, "hello_world", 1700000000000);
        let ideas = sample_ideas();

        FileStore::new().save_ideas(&location, &ideas).await.unwrap();

        let written = std::fs::read_to_string(&location.file).unwrap();
        assert_eq!(written, serde_json::to_string_pretty(&ideas).unwrap());
        assert!(written.starts_with("[\n  {\n    \"title\""));
        assert!(!written.ends_with('\n'));
    }

    #[tokio::test]
    async fn existing_folders_are_fine() {
        let env = TestEnv::new();
        let first = IdeaLocation::new(&env.root, "topic", 1);
        let second = IdeaLocation::new(&env.root, "topic", 2);

        let store = FileStore::new();
        store.save_ideas(&first, &sample_ideas()).await.unwrap();
        store.save_ideas(&second, &sample_ideas()).await.unwrap();

        assert!(first.file.exists());
        assert!(second.file.exists());
    }

    #[tokio::test]
    async fn kb_path_blocked_by_file_fails() {
        let env = TestEnv::new();
        let blocker = env.root.join("not_a_dir");
        std::fs::write(&blocker, "occupied").unwrap();
        let location = IdeaLocation::new(&blocker, "topic", 1);

        let err = FileStore::new()
            .save_ideas(&location, &sample_ideas())
            .await
            .unwrap_err();
        assert!(matches!(err, CelestoError::Io(_)));
        assert!(!location.file.exists());
    }
}
