//! CLI operation handlers.
//!
//! - [`migrate`]: Resolve configuration and run the migration
//!
//! Output formatting utilities are in [`output`].

pub mod migrate;
pub mod output;

#[cfg(test)]
pub mod test_utils;
