//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `cli_loading`: Flags parsed from argv
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Defaults, token, and API base resolution tests

mod field_resolution;
mod helpers;
