//! CLI command implementations.

pub(crate) mod pivots;
pub(crate) mod process;
