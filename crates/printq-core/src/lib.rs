//! Printq Core Library
//!
//! This crate provides the domain models, the in-memory print queue,
//! error types, and configuration shared by the printq client and CLI.

pub mod config;
pub mod error;
pub mod models;
pub mod queue;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use models::{ColorMode, Duplex, JobUpdate, PrintJob};
pub use queue::PrintQueue;
