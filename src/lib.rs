pub mod build;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod guard;
pub mod process;
pub mod publish;
pub mod readme;
pub mod ui;
pub mod version_store;

pub use error::{ReleaseError, Result};
