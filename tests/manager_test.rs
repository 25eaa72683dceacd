//! End-to-end install/launch tests against a local git remote.
//!
//! A bare repository stands in for the module's hosting, and a stub shell
//! script stands in for the Python interpreter so neither pip nor a real
//! module is needed.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Create a bare repository holding a minimal pyproject module and return
/// its path.
fn create_module_remote(root: &Path) -> PathBuf {
    let remote = root.join("remote.git");
    std::fs::create_dir_all(&remote).unwrap();
    git(&remote, &["init", "--bare", "--initial-branch=main"]);

    let work = root.join("work");
    git(root, &["clone", remote.to_str().unwrap(), "work"]);
    git(&work, &["config", "user.email", "test@example.com"]);
    git(&work, &["config", "user.name", "Test"]);

    std::fs::write(
        work.join("pyproject.toml"),
        "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    std::fs::create_dir_all(work.join("demo")).unwrap();
    std::fs::write(work.join("demo").join("__init__.py"), "").unwrap();

    git(&work, &["add", "."]);
    git(&work, &["commit", "-m", "initial"]);
    git(&work, &["push", "origin", "HEAD:main"]);

    remote
}

/// Write an executable script that accepts any arguments and exits 0.
fn create_stub_python(root: &Path) -> PathBuf {
    let stub = root.join("python-stub.sh");
    std::fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
    let mut perms = std::fs::metadata(&stub).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&stub, perms).unwrap();
    stub
}

fn write_catalog(root: &Path, remote: &Path) -> PathBuf {
    let path = root.join("modules.json");
    let body = format!(
        r#"{{
  "Demo": {{
    "url": "{}",
    "branch": "main",
    "description": "A demo module",
    "entry_point": "demo.main",
    "version": "latest",
    "icon": "🔧"
  }}
}}"#,
        remote.display()
    );
    std::fs::write(&path, body).unwrap();
    path
}

fn modlaunch_cmd(catalog: &Path, modules_root: &Path, python: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modlaunch").unwrap();
    cmd.arg("--catalog")
        .arg(catalog)
        .arg("--modules-root")
        .arg(modules_root)
        .env("MODLAUNCH_PYTHON", python);
    cmd
}

#[test]
fn install_list_update_launch_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let remote = create_module_remote(dir.path());
    let python = create_stub_python(dir.path());
    let catalog = write_catalog(dir.path(), &remote);
    let modules_root = dir.path().join("modules");

    // Install clones the module and runs the editable install.
    modlaunch_cmd(&catalog, &modules_root, &python)
        .args(["--install", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo installed successfully"));

    let module_dir = modules_root.join("Demo");
    assert!(module_dir.join("pyproject.toml").exists());

    // The listing now reports the module as installed.
    modlaunch_cmd(&catalog, &modules_root, &python)
        .arg("--list-modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Installed"));

    // A second install is an update and leaves exactly one checkout.
    modlaunch_cmd(&catalog, &modules_root, &python)
        .args(["--install", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo updated successfully"));

    let entries: Vec<_> = std::fs::read_dir(&modules_root)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "update must not leave staging dirs behind");
    assert!(module_dir.join("pyproject.toml").exists());

    // Launch spawns the (stub) interpreter and reports success.
    modlaunch_cmd(&catalog, &modules_root, &python)
        .args(["--launch", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo launched successfully"));
}

#[test]
fn failed_install_leaves_module_not_installed() {
    let dir = tempfile::tempdir().unwrap();
    let remote = create_module_remote(dir.path());
    let python = dir.path().join("python-fail.sh");
    std::fs::write(&python, "#!/bin/sh\necho \"pip exploded\" >&2\nexit 1\n").unwrap();
    let mut perms = std::fs::metadata(&python).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&python, perms).unwrap();

    let catalog = write_catalog(dir.path(), &remote);
    let modules_root = dir.path().join("modules");

    modlaunch_cmd(&catalog, &modules_root, &python)
        .args(["--install", "Demo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to install Demo"));

    assert!(!modules_root.join("Demo").exists());

    modlaunch_cmd(&catalog, &modules_root, &python)
        .arg("--list-modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Not Installed"));
}

#[test]
fn clone_failure_reports_error_and_keeps_root_clean() {
    let dir = tempfile::tempdir().unwrap();
    let python = create_stub_python(dir.path());
    let bogus_remote = dir.path().join("does-not-exist.git");
    let catalog = write_catalog(dir.path(), &bogus_remote);
    let modules_root = dir.path().join("modules");

    modlaunch_cmd(&catalog, &modules_root, &python)
        .args(["--install", "Demo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to install Demo"));

    assert!(!modules_root.join("Demo").exists());
    let leftovers: Vec<_> = std::fs::read_dir(&modules_root)
        .map(|rd| rd.filter_map(|e| e.ok()).collect())
        .unwrap_or_default();
    assert!(leftovers.is_empty(), "clone failure must not leave staging dirs");
}
