//! Dependency installation: materialize a resolved version into the staging
//! directory and publish its binary under a stable name.

pub mod catalog;
pub mod install;
pub mod stager;
