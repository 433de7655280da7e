//! Domain logic - pure release rules independent of git, files and processes

pub mod directive;
pub mod release;
pub mod version;

pub use directive::VersionDirective;
pub use release::ReleaseDescriptor;
pub use version::Version;
