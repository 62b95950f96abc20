//! Document converter adapter
//!
//! The conversion is injected behind the [`Converter`] trait so the export
//! pipeline can run against a fake in tests. [`CommandConverter`] is the
//! production implementation.

pub mod command;
pub mod traits;
pub mod transient;

pub use command::CommandConverter;
pub use traits::{ConvertOptions, Converter, OutputFormat};
pub use transient::TransientFile;
