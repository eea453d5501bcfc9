//! Version resolution: expands a requested specifier through the version-line
//! table and selects exactly one concrete version from a catalog.

pub mod resolver;
pub mod version;
