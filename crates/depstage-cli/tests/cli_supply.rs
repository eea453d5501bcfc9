use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

#[allow(deprecated)]
fn depstage() -> Command {
    Command::cargo_bin("depstage").unwrap()
}

fn buildpack() -> TempDir {
    let root = TempDir::new().unwrap();
    let mut manifest = String::from("version_lines:\n  stable: \"1.20\"\ndependencies:\n");
    for v in ["1.20.1", "1.20.2", "1.21.6"] {
        let archive = root.path().join(format!("nginx-{v}.zip"));
        let mut zip = zip::ZipWriter::new(std::fs::File::create(&archive).unwrap());
        zip.start_file(
            "nginx/sbin/nginx",
            SimpleFileOptions::default().unix_permissions(0o755),
        )
        .unwrap();
        zip.write_all(format!("nginx/{v}\n").as_bytes()).unwrap();
        zip.finish().unwrap();
        manifest.push_str(&format!(
            "  - name: nginx\n    version: \"{v}\"\n    uri: nginx-{v}.zip\n"
        ));
    }
    std::fs::write(root.path().join("manifest.yml"), manifest).unwrap();
    root
}

fn supply(bp: &Path, staging: &Path) -> assert_cmd::assert::Assert {
    std::fs::create_dir_all(staging.join("build")).unwrap();
    depstage()
        .arg("supply")
        .arg(staging.join("build"))
        .arg(staging.join("cache"))
        .arg(staging.join("deps"))
        .arg("0")
        .arg("--buildpack-dir")
        .arg(bp)
        .assert()
}

#[test]
fn supply_installs_latest_and_links() {
    let bp = buildpack();
    let staging = TempDir::new().unwrap();

    supply(bp.path(), staging.path())
        .success()
        .stderr(predicate::str::contains(
            "Requested nginx version:  => 1.21.6",
        ));

    let link = staging.path().join("deps/0/bin/nginx");
    assert_eq!(std::fs::read_to_string(link).unwrap(), "nginx/1.21.6\n");
}

#[test]
fn supply_honours_config_version_line() {
    let bp = buildpack();
    let staging = TempDir::new().unwrap();
    std::fs::create_dir_all(staging.path().join("build")).unwrap();
    std::fs::write(staging.path().join("build/nginx.yml"), "version: stable\n").unwrap();

    supply(bp.path(), staging.path())
        .success()
        .stderr(predicate::str::contains(
            "Requested nginx version: stable => 1.20.2",
        ));
}

#[test]
fn supply_unmatched_version_fails() {
    let bp = buildpack();
    let staging = TempDir::new().unwrap();
    std::fs::create_dir_all(staging.path().join("build")).unwrap();
    std::fs::write(staging.path().join("build/nginx.yml"), "version: \"1.9\"\n").unwrap();

    supply(bp.path(), staging.path())
        .failure()
        .stderr(predicate::str::contains("No matching version for nginx"));
    assert!(!staging.path().join("deps/0/bin/nginx").exists());
}

#[test]
fn supply_without_manifest_fails() {
    let empty = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();

    supply(empty.path(), staging.path())
        .failure()
        .stderr(predicate::str::contains("Could not load manifest"));
}

#[test]
fn supply_requires_positional_dirs() {
    depstage().args(["supply", "/tmp/build"]).assert().failure();
}
