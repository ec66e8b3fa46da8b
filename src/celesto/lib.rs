//! # Celesto Architecture
//!
//! Celesto asks a hosted language model for structured startup-idea proposals
//! and files the answers away as JSON under a per-topic folder of a knowledge
//! base. The library does all of that; the `celesto` binary is only one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads .env, prints banner and messages │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CelestoApi owns provider, store and narrator             │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate: validate, prompt, call provider, persist       │
//! │  - chat: placeholder                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                           │
//!                  ▼                           ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Provider Layer (provider/)   │ │  Storage Layer (store/)   │
//! │  - IdeaProvider trait         │ │  - IdeaStore trait        │
//! │  - OpenAiProvider (reqwest)   │ │  - FileStore, InMemory    │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Generation is all-or-nothing, persistence is best effort:
//!
//! - An empty topic is rejected with [`error::CelestoError::InvalidInput`] before
//!   anything else happens.
//! - Provider failures (transport, HTTP status, schema mismatch) propagate to the
//!   caller untouched.
//! - Storage failures are reported through the [`narrate::Narrator`] as
//!   `Error storing ideas: ...` and swallowed. The call still succeeds.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for `generate` and `chat`
//! - [`provider`]: Structured-generation backends
//! - [`store`]: Persistence of idea batches
//! - [`schema`]: Response schema and validation
//! - [`prompt`]: System persona and instruction prompt
//! - [`slug`]: Topic to folder-name normalization
//! - [`model`]: Core data types (`Idea`, `IdeaMetric`, `GenerateOptions`)
//! - [`narrate`]: Operator-facing narration
//! - [`config`]: Provider configuration from the environment
//! - [`env`]: `.env` loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod model;
pub mod narrate;
pub mod prompt;
pub mod provider;
pub mod schema;
pub mod slug;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
