//! Core data types for depstage.
//!
//! The resolved [`dependency::Dependency`], the optional per-build
//! [`config::SupplyConfig`], the catalog [`manifest::CatalogManifest`], and
//! the [`version_lines::VersionLineTable`] loaded from it, plus the
//! [`catalog::CatalogProvider`] and [`catalog::Stager`] capability traits.
//!
//! This crate performs only local file reads; it never installs anything.

/// Dependency supplied when none is named on the command line.
pub const DEFAULT_DEPENDENCY: &str = "nginx";

pub mod catalog;
pub mod config;
pub mod dependency;
pub mod manifest;
pub mod version_lines;
