//! Data models for the application

mod print_job;

pub use print_job::*;
