//! Wordcount plugin: count controller and host collaborator seams.
mod controller;
mod host;
mod subscription;

pub use controller::WordCountController;
pub use host::{
    ActiveDocumentSource, HostError, HostResult, IdleScheduler, SignalId, StatusDisplay,
    TextDocument,
};
