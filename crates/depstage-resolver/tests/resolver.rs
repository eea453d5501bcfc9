use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use depstage_core::catalog::CatalogProvider;
use depstage_core::dependency::Dependency;
use depstage_core::version_lines::VersionLineTable;
use depstage_resolver::resolver::{find_matching_version, VersionResolver};
use depstage_util::errors::SupplyError;

/// In-memory catalog exposing only version listings.
struct FakeCatalog {
    root: PathBuf,
    versions: BTreeMap<String, Vec<String>>,
}

impl FakeCatalog {
    fn with(name: &str, versions: &[&str]) -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            name.to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
        );
        Self {
            root: PathBuf::from("/catalog"),
            versions: map,
        }
    }
}

impl CatalogProvider for FakeCatalog {
    fn all_dependency_versions(&self, name: &str) -> Vec<String> {
        self.versions.get(name).cloned().unwrap_or_default()
    }

    fn install_dependency(&self, _dependency: &Dependency, _dest: &Path) -> miette::Result<()> {
        unreachable!("resolution never installs")
    }

    fn root_dir(&self) -> &Path {
        &self.root
    }
}

fn nginx() -> FakeCatalog {
    FakeCatalog::with("nginx", &["1.18.0", "1.19.2", "1.19.10", "1.20.1"])
}

fn resolve(catalog: &FakeCatalog, lines: &VersionLineTable, requested: &str) -> String {
    VersionResolver::new(catalog, lines)
        .resolve("nginx", requested)
        .unwrap()
        .version
}

#[test]
fn prefix_selects_numerically_greatest() {
    assert_eq!(resolve(&nginx(), &VersionLineTable::default(), "1.19"), "1.19.10");
}

#[test]
fn empty_specifier_selects_latest() {
    let catalog = FakeCatalog::with("nginx", &["1.18.0", "1.19.2", "1.20.1"]);
    assert_eq!(resolve(&catalog, &VersionLineTable::default(), ""), "1.20.1");
    assert_eq!(resolve(&catalog, &VersionLineTable::default(), "   "), "1.20.1");
}

#[test]
fn exact_version_selected_directly() {
    let catalog = FakeCatalog::with("nginx", &["1.18.0", "1.19.2", "1.20.1"]);
    assert_eq!(resolve(&catalog, &VersionLineTable::default(), "1.19.2"), "1.19.2");
}

#[test]
fn no_match_names_dependency_and_specifier() {
    let catalog = FakeCatalog::with("nginx", &["1.18.0", "1.19.2", "1.20.1"]);
    let lines = VersionLineTable::default();
    let report = VersionResolver::new(&catalog, &lines)
        .resolve("nginx", "2.0")
        .unwrap_err();
    match report.downcast_ref::<SupplyError>() {
        Some(SupplyError::NoMatchingVersion {
            dependency,
            requested,
            selector,
        }) => {
            assert_eq!(dependency, "nginx");
            assert_eq!(requested, "2.0");
            assert_eq!(selector, "2.0");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(report.to_string().contains("'2.0'"));
}

#[test]
fn line_alias_expands_to_selector() {
    let catalog = FakeCatalog::with("nginx", &["1.18.0", "1.19.2", "1.20.1"]);
    let lines: VersionLineTable = [("stable", "1.19")].into_iter().collect();
    assert_eq!(resolve(&catalog, &lines, "stable"), "1.19.2");
}

#[test]
fn line_alias_no_match_reports_both_forms() {
    let lines: VersionLineTable = [("legacy", "1.8")].into_iter().collect();
    let catalog = nginx();
    let report = VersionResolver::new(&catalog, &lines)
        .resolve("nginx", "legacy")
        .unwrap_err();
    let msg = report.to_string();
    assert!(msg.contains("'legacy'"), "got: {msg}");
    assert!(msg.contains("'1.8'"), "got: {msg}");
}

#[test]
fn line_table_is_not_expanded_recursively() {
    // "stable" -> "mainline" stays the literal selector "mainline".
    let lines: VersionLineTable = [("stable", "mainline"), ("mainline", "1.20")]
        .into_iter()
        .collect();
    let catalog = nginx();
    let report = VersionResolver::new(&catalog, &lines)
        .resolve("nginx", "stable")
        .unwrap_err();
    assert!(matches!(
        report.downcast_ref::<SupplyError>(),
        Some(SupplyError::NoMatchingVersion { selector, .. }) if selector == "mainline"
    ));
}

#[test]
fn line_lookup_takes_precedence_over_numeric_prefix() {
    let lines: VersionLineTable = [("1.19", "1.18")].into_iter().collect();
    assert_eq!(resolve(&nginx(), &lines, "1.19"), "1.18.0");
}

#[test]
fn malformed_catalog_versions_are_skipped() {
    let catalog = FakeCatalog::with("nginx", &["garbage", "1.19.2", "1.21.0-rc1", ""]);
    assert_eq!(resolve(&catalog, &VersionLineTable::default(), ""), "1.19.2");
}

#[test]
fn only_malformed_versions_is_no_match() {
    let catalog = FakeCatalog::with("nginx", &["garbage", "latest"]);
    let lines = VersionLineTable::default();
    assert!(VersionResolver::new(&catalog, &lines).resolve("nginx", "").is_err());
}

#[test]
fn malformed_version_still_matches_exactly() {
    let catalog = FakeCatalog::with("nginx", &["1.21.0-rc1", "1.20.1"]);
    assert_eq!(
        resolve(&catalog, &VersionLineTable::default(), "1.21.0-rc1"),
        "1.21.0-rc1"
    );
}

#[test]
fn unknown_dependency_is_no_match() {
    let lines = VersionLineTable::default();
    let catalog = nginx();
    let report = VersionResolver::new(&catalog, &lines)
        .resolve("openresty", "")
        .unwrap_err();
    assert!(matches!(
        report.downcast_ref::<SupplyError>(),
        Some(SupplyError::NoMatchingVersion { dependency, .. }) if dependency == "openresty"
    ));
}

#[test]
fn non_numeric_selector_is_no_match() {
    assert_eq!(
        find_matching_version("mainline", &["1.20.1".to_string()]),
        None
    );
}

#[test]
fn explicit_wildcard_selector() {
    let versions: Vec<String> = ["1.19.2", "1.19.10", "1.20.1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        find_matching_version("1.19.x", &versions).as_deref(),
        Some("1.19.10")
    );
}

#[test]
fn resolution_returns_dependency_name() {
    let lines = VersionLineTable::default();
    let catalog = nginx();
    let dep = VersionResolver::new(&catalog, &lines)
        .resolve("nginx", "1.18")
        .unwrap();
    assert_eq!(dep, Dependency::new("nginx", "1.18.0"));
}
