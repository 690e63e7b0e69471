//! Resolve a source file to the shell command that runs it, and run it.
//!
//! A [`Registry`] maps language keys to command templates. A [`Resolver`]
//! turns a [`FileDescriptor`] into a [`CommandString`] or an [`Unsupported`]
//! notice, and [`runner::run`] hands the command to a shell.

/// User configuration: extra executors, extension aliases, shell choice.
pub mod config;
/// The file being run.
pub mod descriptor;
/// `tracing` subscriber setup.
pub mod logging;
/// Language key and extension alias tables.
pub mod registry;
/// File → command resolution.
pub mod resolver;
/// Shell execution of resolved commands.
pub mod runner;
/// Command templates and placeholder rendering.
pub mod template;

pub use config::Config;
pub use descriptor::FileDescriptor;
pub use registry::Registry;
pub use resolver::{CommandString, Resolver, Unsupported};
