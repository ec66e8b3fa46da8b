use super::IdeaStore;
use crate::error::{CelestoError, Result};
use crate::model::{Idea, IdeaLocation};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Keeps written batches in memory, keyed by file path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<Idea>>>,
    attempts: Mutex<usize>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails with an I/O error carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn files(&self) -> HashMap<PathBuf, Vec<Idea>> {
        self.files.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Number of save calls, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.lock().map(|a| *a).unwrap_or_default()
    }
}

#[async_trait]
impl IdeaStore for InMemoryStore {
    async fn save_ideas(&self, location: &IdeaLocation, ideas: &[Idea]) -> Result<()> {
        if let Ok(mut attempts) = self.attempts.lock() {
            *attempts += 1;
        }

        if let Some(reason) = &self.failure {
            return Err(CelestoError::Io(std::io::Error::other(reason.clone())));
        }

        let mut files = self
            .files
            .lock()
            .map_err(|_| CelestoError::Io(std::io::Error::other("store lock poisoned")))?;
        files.insert(location.file.clone(), ideas.to_vec());
        Ok(())
    }
}
