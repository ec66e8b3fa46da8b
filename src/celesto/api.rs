//! # API Facade
//!
//! [`CelestoApi`] is the single entry point for every Celesto operation. It
//! owns the three collaborators a generation needs and dispatches to the
//! command layer:
//!
//! - an [`IdeaProvider`] that talks to the model
//! - an [`IdeaStore`] that persists the results
//! - a [`Narrator`] that receives progress messages
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: Output goes through the narrator or the returned `CmdResult`
//!
//! ## Generic Over Collaborators
//!
//! Production wires `CelestoApi<OpenAiProvider, FileStore, ConsoleNarrator>`;
//! tests swap in a static provider, `InMemoryStore` and `RecordingNarrator`.
//!
//! `generate_ideas` takes `&mut self`: one API value never has two
//! generations in flight.

use crate::commands;
use crate::error::Result;
use crate::model::GenerateOptions;
use crate::narrate::Narrator;
use crate::provider::IdeaProvider;
use crate::store::IdeaStore;

pub struct CelestoApi<P: IdeaProvider, S: IdeaStore, N: Narrator> {
    provider: P,
    store: S,
    narrator: N,
}

impl<P: IdeaProvider, S: IdeaStore, N: Narrator> CelestoApi<P, S, N> {
    pub fn new(provider: P, store: S, narrator: N) -> Self {
        narrator.info("Initializing Celesto!");
        let api = Self {
            provider,
            store,
            narrator,
        };
        api.narrator.info("Celesto initialized successfully!");
        api
    }

    pub async fn generate_ideas(&mut self, options: &GenerateOptions) -> Result<CmdResult> {
        commands::generate::run(&self.provider, &self.store, &self.narrator, options).await
    }

    pub fn chat(&self, options: &ChatOptions) -> Result<CmdResult> {
        commands::chat::run(&self.narrator, options)
    }

    /// Toggles narration. The change itself is always announced.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.narrator.set_verbose(verbose);
        let note = if verbose {
            "Verbose mode enabled."
        } else {
            "Verbose mode disabled."
        };
        self.narrator.emit(CmdMessage::info(note));
    }

    pub fn is_verbose(&self) -> bool {
        self.narrator.is_verbose()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }
}

pub use crate::commands::chat::ChatOptions;
pub use crate::commands::generate::STORE_ERROR_PREFIX;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
