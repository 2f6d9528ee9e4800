use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn nbcards(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nbcards").unwrap();
    cmd.current_dir(temp.path())
        .env("NBCARDS_HOME", temp.path().join(".deck"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn read_notebook(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn seed(temp: &TempDir) {
    nbcards(temp)
        .args(["add", "Load", "import os"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card added (1): Load"));
    nbcards(temp)
        .args(["add", "Plot", "plot(x)", "--kernel", "ir"])
        .assert()
        .success();
    nbcards(temp)
        .args(["note", "Intro", "# Hello"])
        .assert()
        .success();
}

#[test]
fn export_writes_one_notebook_per_kernel() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("output_python3.ipynb"))
        .stdout(predicate::str::contains("output_r.ipynb"));

    let python = read_notebook(&temp.path().join("output_python3.ipynb"));
    assert_eq!(python["nbformat"], 4);
    assert_eq!(python["nbformat_minor"], 2);
    assert_eq!(python["metadata"]["kernelspec"]["name"], "python3");
    let cells = python["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["source"], "import os");
    assert_eq!(cells[1]["cell_type"], "markdown");
    assert_eq!(cells[1]["source"], "# Hello");

    let r = read_notebook(&temp.path().join("output_r.ipynb"));
    assert_eq!(r["metadata"]["kernelspec"]["name"], "ir");
    assert_eq!(r["metadata"]["language_info"]["codemirror_mode"], "r");
    assert_eq!(r["cells"].as_array().unwrap().len(), 1);
    assert_eq!(r["cells"][0]["source"], "plot(x)");
}

#[test]
fn export_selection_skips_other_kernel() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp).args(["export", "2"]).assert().success();

    assert!(temp.path().join("output_r.ipynb").exists());
    assert!(!temp.path().join("output_python3.ipynb").exists());
}

#[test]
fn stale_export_index_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp)
        .args(["export", "9"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("out of range"));

    assert!(!temp.path().join("output_python3.ipynb").exists());
    assert!(!temp.path().join("output_r.ipynb").exists());
}

#[test]
fn reordering_changes_exported_cell_order() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp)
        .args(["up", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card moved (3 -> 2): Intro"));
    nbcards(&temp)
        .args(["up", "2"])
        .assert()
        .success();
    nbcards(&temp).arg("export").assert().success();

    let python = read_notebook(&temp.path().join("output_python3.ipynb"));
    assert_eq!(python["cells"][0]["cell_type"], "markdown");
    assert_eq!(python["cells"][1]["source"], "import os");
}

#[test]
fn list_delete_and_config_round_trip() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot"))
        .stdout(predicate::str::contains("markdown"));

    nbcards(&temp).args(["delete", "1"]).assert().success();
    nbcards(&temp)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load").not());

    let out = temp.path().join("notebooks");
    std::fs::create_dir_all(&out).unwrap();
    nbcards(&temp)
        .args(["config", "output-dir", out.to_str().unwrap()])
        .assert()
        .success();
    nbcards(&temp).arg("export").assert().success();
    assert!(out.join("output_r.ipynb").exists());
}

#[test]
fn bad_index_is_reported_as_error() {
    let temp = TempDir::new().unwrap();
    nbcards(&temp)
        .args(["delete", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn imported_note_lands_in_python_notebook() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("note.json");
    std::fs::write(
        &file,
        r##"{"id": 3, "title": "Heading", "kernel": "ir", "sourceCode": "# Heading", "isCustomMarkdown": true}"##,
    )
    .unwrap();

    nbcards(&temp)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 card(s)"));
    nbcards(&temp).arg("export").assert().success();

    let python = read_notebook(&temp.path().join("output_python3.ipynb"));
    assert_eq!(python["cells"][0]["cell_type"], "markdown");
    assert_eq!(python["cells"][0]["source"], "# Heading");
    assert!(!temp.path().join("output_r.ipynb").exists());
}

#[test]
fn huge_range_is_an_error_not_a_crash() {
    let temp = TempDir::new().unwrap();
    seed(&temp);

    nbcards(&temp)
        .args(["delete", "1-18446744073709551615"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("spans more than"));
    nbcards(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load"));
}
