//! High-level operations wiring the CLI to the resolver and installer.

pub mod ops_supply;
pub mod ops_versions;
