use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// `trellis` isolated from the user's home directory.
fn trellis(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn trellis_create_and_list() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");

    trellis(dir.path())
        .args(["--store", store.to_str().unwrap(), "node", "create", "--id", "page1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page1"));

    trellis(dir.path())
        .args(["--store", store.to_str().unwrap(), "node", "list"])
        .assert()
        .success()
        .stdout("page1\n");
}

#[test]
fn trellis_create_random_id() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");

    let output = trellis(dir.path())
        .args(["--store", store.to_str().unwrap(), "node", "create"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap();
    assert_eq!(id.trim().len(), 36);
}

#[test]
fn trellis_duplicate_create_fails() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let args = ["--store", store.to_str().unwrap(), "node", "create", "--id", "page1"];

    trellis(dir.path()).args(args).assert().success();
    trellis(dir.path())
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn trellis_set_get_round_trip() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store_arg = store.to_str().unwrap();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "set", "page1", "title", "Hello"])
        .assert()
        .success();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "get", "page1", "title"])
        .assert()
        .success()
        .stdout("Hello\n");

    let snapshot = fs::read_to_string(&store).unwrap();
    assert!(snapshot.contains("\"title\""));
    assert!(snapshot.contains("\"version\": 1"));
}

#[test]
fn trellis_get_default_for_absent_key() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store_arg = store.to_str().unwrap();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "create", "--id", "page1"])
        .assert()
        .success();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "get", "page1", "title", "--default", "x"])
        .assert()
        .success()
        .stdout("x\n");

    trellis(dir.path())
        .args(["--store", store_arg, "node", "get", "page1", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'title' not found"));
}

#[test]
fn trellis_blank_set_removes_key() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store_arg = store.to_str().unwrap();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "set", "page1", "title", "Hello"])
        .assert()
        .success();
    trellis(dir.path())
        .args(["--store", store_arg, "node", "set", "page1", "title", "  "])
        .assert()
        .success();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "show", "page1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title").not());
}

#[test]
fn trellis_unset_key() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let store_arg = store.to_str().unwrap();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "set", "page1", "title", "Hello"])
        .assert()
        .success();
    trellis(dir.path())
        .args(["--store", store_arg, "node", "set", "page1", "body", "Text"])
        .assert()
        .success();
    trellis(dir.path())
        .args(["--store", store_arg, "node", "unset", "page1", "title"])
        .assert()
        .success();

    trellis(dir.path())
        .args(["--store", store_arg, "node", "show", "page1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"body\": \"Text\""))
        .stdout(predicate::str::contains("title").not());
}

#[test]
fn trellis_show_missing_node_fails() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");

    trellis(dir.path())
        .args(["--store", store.to_str().unwrap(), "node", "show", "missing-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("text node not found: missing-id"));
}

#[test]
fn trellis_uses_configured_snapshot_path() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("configured.json");
    let config = dir.path().join("trellis.toml");
    fs::write(
        &config,
        format!(
            "[store]\nsnapshot_path = {:?}\npretty = false\n",
            store.to_str().unwrap()
        ),
    )
    .unwrap();

    trellis(dir.path())
        .args(["--config", config.to_str().unwrap(), "node", "create", "--id", "cfg"])
        .assert()
        .success();

    let snapshot = fs::read_to_string(&store).unwrap();
    assert!(snapshot.contains("\"cfg\""));
    assert!(!snapshot.contains('\n'));
}

#[test]
fn trellis_set_without_create_fails_for_missing_node() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("store.json");
    let config = dir.path().join("trellis.toml");
    fs::write(&config, "[binding]\ncreate_if_absent = false\n").unwrap();

    trellis(dir.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "--store",
            store.to_str().unwrap(),
            "node",
            "set",
            "page1",
            "title",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required text node not found: page1"));
}
