//! Core types for the fxtask pipeline task.
//!
//! This crate defines the operation and capability vocabulary, task input
//! validation, the project config readers, the typed task errors and the
//! CI host reporting used across the fxtask workspace.

pub mod capability;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod host;
pub mod inputs;
pub mod operation;

pub use capability::{Capability, ProgrammingLanguage};
pub use error::{ErrorKind, TaskError};
pub use host::{AzurePipelines, TaskHost, TaskResult};
pub use inputs::TaskInputs;
pub use operation::OperationType;
