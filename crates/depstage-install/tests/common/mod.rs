#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

/// Write an nginx-shaped archive (`nginx/sbin/nginx`) and return its path.
pub fn nginx_zip(dir: &Path, version: &str) -> PathBuf {
    let path = dir.join(format!("nginx-{version}.zip"));
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let dir_opts = SimpleFileOptions::default();
    let exe_opts = SimpleFileOptions::default().unix_permissions(0o755);

    zip.add_directory("nginx/", dir_opts).unwrap();
    zip.add_directory("nginx/sbin/", dir_opts).unwrap();
    zip.start_file("nginx/sbin/nginx", exe_opts).unwrap();
    zip.write_all(format!("#!/bin/sh\necho nginx/{version}\n").as_bytes())
        .unwrap();
    zip.start_file("nginx/conf/mime.types", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"types {}\n").unwrap();
    zip.finish().unwrap();
    path
}

/// Write a manifest listing the given `(version, uri, sha256)` entries.
pub fn write_manifest(root: &Path, lines: &[(&str, &str)], deps: &[(&str, String, Option<String>)]) {
    let mut yaml = String::from("language: nginx\nversion_lines:\n");
    for (line, selector) in lines {
        yaml.push_str(&format!("  {line}: \"{selector}\"\n"));
    }
    yaml.push_str("dependencies:\n");
    for (version, uri, sha) in deps {
        yaml.push_str(&format!(
            "  - name: nginx\n    version: \"{version}\"\n    uri: \"{uri}\"\n"
        ));
        if let Some(sha) = sha {
            yaml.push_str(&format!("    sha256: \"{sha}\"\n"));
        }
    }
    std::fs::write(root.join("manifest.yml"), yaml).unwrap();
}
