//! Shared library modules providing error types, filesystem walking, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod paths;
pub mod telemetry;
