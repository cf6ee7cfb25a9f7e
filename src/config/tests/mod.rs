//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, database, and repository resolution tests
//! - `dry_run`: Dry-run defaulting and overrides

mod helpers;
