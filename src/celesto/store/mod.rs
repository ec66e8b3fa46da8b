//! # Storage Layer
//!
//! Idea batches are persisted through the [`IdeaStore`] trait so the command
//! layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage on disk
//!   - Creates the knowledge base root and the topic folder as needed
//!   - Writes each batch to its own file, pretty-printed with 2-space indent
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Records every write, can be told to fail
//!
//! ## Storage Format
//!
//! ```text
//! knowledge_base/
//! ├── hello_world/
//! │   ├── ideas_1718000000000.json   # JSON array of ideas
//! │   └── ideas_1718000042000.json
//! └── urban_farming/
//!     └── ideas_1718000100000.json
//! ```
//!
//! Files are written once and never rewritten or deleted.

use crate::error::Result;
use crate::model::{Idea, IdeaLocation};
use async_trait::async_trait;

pub mod fs;
pub mod memory;

#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Persist a batch of ideas at the given location, creating folders as needed.
    async fn save_ideas(&self, location: &IdeaLocation, ideas: &[Idea]) -> Result<()>;
}
