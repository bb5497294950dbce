//! Host collaborator boundaries.
//!
//! The orchestrator never talks to a concrete editor, dialog toolkit, or
//! build system directly; it consumes the narrow capabilities defined here.
//! Each trait ships with the production implementation the CLI uses and a
//! test double lives with the tests that need it.
//!
//! - [`document`]: text buffer with transactional patch application
//! - [`prompt`]: user confirmation of key/value (or reuse of an existing key)
//! - [`build`]: fire-and-forget build-task trigger

pub mod build;
pub mod document;
pub mod prompt;

pub use build::{BuildRunner, GradleRunner, NoopBuildRunner};
pub use document::{Document, Edit, FileDocument};
pub use prompt::{FlagPrompt, Prompt, PromptOutcome, PromptRequest};
