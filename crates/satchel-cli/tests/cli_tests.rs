//! Integration tests for satchel-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const PNG_BYTES: &[u8] =
    b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00";

fn satchel_cmd() -> Command {
    cargo_bin_cmd!("satchel")
}

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    fs::write(path, zip.finish().unwrap().into_inner()).unwrap();
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("invalid JSON output")
}

#[test]
fn test_version_flag() {
    satchel_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("satchel"));
}

#[test]
fn test_help_lists_subcommands() {
    satchel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("sniff"));
}

#[test]
fn test_info_lists_entries() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("upload.zip");
    write_zip(&archive, &[("notes.txt", b"hello"), ("logo.png", PNG_BYTES)]);

    satchel_cmd()
        .arg("info")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("upload.zip"))
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("image/png"))
        .stdout(predicate::str::contains("Total: 2 files"));
}

#[test]
fn test_info_json_record() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("upload.zip");
    write_zip(&archive, &[("a.txt", b"12345"), ("b.png", PNG_BYTES)]);
    let archive_size = fs::metadata(&archive).unwrap().len();

    let json = stdout_json(satchel_cmd().arg("--json").arg("info").arg(&archive));

    assert_eq!(json["operation"], "info");
    assert_eq!(json["status"], "success");
    let data = &json["data"];
    assert_eq!(data["filename"], "upload.zip");
    assert_eq!(data["archive_size"], archive_size);
    assert_eq!(data["total_files"], 2);
    assert_eq!(data["total_size"], 5 + PNG_BYTES.len() as u64);
    assert_eq!(data["files"][0]["file_path"], "a.txt");
    assert_eq!(data["files"][0]["size"], 5);
    assert_eq!(data["files"][0]["mimetype"], "text/plain");
    assert_eq!(data["files"][1]["file_path"], "b.png");
    assert_eq!(data["files"][1]["mimetype"], "image/png");
}

#[test]
fn test_info_reads_stdin() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("piped.zip");
    write_zip(&archive, &[("one.txt", b"1")]);

    let json = stdout_json(
        satchel_cmd()
            .args(["--json", "info", "-", "--name", "from-pipe.zip"])
            .write_stdin(fs::read(&archive).unwrap()),
    );
    assert_eq!(json["data"]["filename"], "from-pipe.zip");
    assert_eq!(json["data"]["total_files"], 1);
}

#[test]
fn test_info_empty_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("empty.zip");
    write_zip(&archive, &[]);

    let json = stdout_json(satchel_cmd().arg("--json").arg("info").arg(&archive));
    assert_eq!(json["data"]["total_files"], 0);
    assert_eq!(json["data"]["total_size"], 0);
    assert_eq!(json["data"]["files"], serde_json::json!([]));
}

#[test]
fn test_info_rejects_non_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let image = write_file(&temp, "photo.png", PNG_BYTES);

    satchel_cmd()
        .arg("info")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a ZIP archive"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_info_entry_limit() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("many.zip");
    write_zip(&archive, &[("a", b"1"), ("b", b"2"), ("c", b"3")]);

    satchel_cmd()
        .args(["info", "--max-entries", "2"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry count"));
}

#[test]
fn test_info_rejects_oversized_sniff_len() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("small.zip");
    write_zip(&archive, &[("a.txt", b"hello")]);

    satchel_cmd()
        .args(["info", "--sniff-len", "4611686018427387903"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sniff length"));
}

#[test]
fn test_info_nonexistent_archive() {
    satchel_cmd()
        .args(["info", "does-not-exist.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_bundle_creates_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "a.txt", b"plain text");
    let image = write_file(&temp, "b.png", PNG_BYTES);
    let output = temp.path().join("bundle.zip");

    satchel_cmd()
        .arg("bundle")
        .arg(&output)
        .arg(&text)
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    let json = stdout_json(satchel_cmd().arg("--json").arg("info").arg(&output));
    assert_eq!(json["data"]["total_files"], 2);
    assert_eq!(json["data"]["files"][0]["file_path"], "a.txt");
    assert_eq!(json["data"]["files"][1]["file_path"], "b.png");
}

#[test]
fn test_bundle_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "a.txt", b"plain text");
    let output = temp.path().join("bundle.zip");

    let json = stdout_json(
        satchel_cmd()
            .arg("--json")
            .arg("bundle")
            .arg(&output)
            .arg(&text),
    );
    assert_eq!(json["operation"], "bundle");
    assert_eq!(json["data"]["content_type"], "application/zip");
    assert_eq!(json["data"]["total_files"], 1);
    assert_eq!(json["data"]["archive_size"], fs::metadata(&output).unwrap().len());
    assert!(
        json["data"]["filename"]
            .as_str()
            .unwrap()
            .starts_with("archive-")
    );
}

#[test]
fn test_bundle_rejects_unsupported_type() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "a.txt", b"plain text");
    let binary = write_file(&temp, "tool.bin", &[0x7F, b'E', b'L', b'F', 0x02, 0x01, 0x01, 0x00]);
    let output = temp.path().join("bundle.zip");

    satchel_cmd()
        .arg("bundle")
        .arg(&output)
        .arg(&text)
        .arg(&binary)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tool.bin"))
        .stderr(predicate::str::contains("unsupported type"));

    assert!(!output.exists());
}

#[test]
fn test_bundle_allow_extends_list() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let gif = write_file(&temp, "anim.gif", b"GIF89a\x01\x00\x01\x00\x00\x00\x00;");
    let output = temp.path().join("bundle.zip");

    satchel_cmd()
        .arg("bundle")
        .arg(&output)
        .arg(&gif)
        .assert()
        .failure();

    satchel_cmd()
        .args(["bundle", "--allow", "image/gif"])
        .arg(&output)
        .arg(&gif)
        .assert()
        .success();
    assert!(output.exists());
}

#[test]
fn test_bundle_output_exists_without_force() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "a.txt", b"plain text");
    let output = write_file(&temp, "bundle.zip", b"previous");

    satchel_cmd()
        .arg("bundle")
        .arg(&output)
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read(&output).unwrap(), b"previous");

    satchel_cmd()
        .arg("bundle")
        .arg("--force")
        .arg(&output)
        .arg(&text)
        .assert()
        .success();
    assert!(fs::read(&output).unwrap().starts_with(b"PK"));
}

#[test]
fn test_bundle_duplicate_names_rejected() {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::create_dir(temp.path().join("one")).unwrap();
    fs::create_dir(temp.path().join("two")).unwrap();
    let first = write_file(&temp, "one/a.txt", b"first");
    let second = write_file(&temp, "two/a.txt", b"second");
    let output = temp.path().join("bundle.zip");

    satchel_cmd()
        .arg("bundle")
        .arg(&output)
        .arg(&first)
        .arg(&second)
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.txt"));
    assert!(!output.exists());
}

#[test]
fn test_bundle_max_file_size() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "big.txt", &[b'x'; 2048]);
    let output = temp.path().join("bundle.zip");

    satchel_cmd()
        .args(["bundle", "--max-file-size", "1K"])
        .arg(&output)
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("big.txt"));
}

#[test]
fn test_bundle_stored_level() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let text = write_file(&temp, "a.txt", b"stored stored stored stored");
    let output = temp.path().join("stored.zip");

    satchel_cmd()
        .args(["--quiet", "bundle", "-l", "0"])
        .arg(&output)
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let mut archive = zip::ZipArchive::new(fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(
        archive.by_index(0).unwrap().compression(),
        zip::CompressionMethod::Stored
    );
}

#[test]
fn test_sniff_reports_types() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let image = write_file(&temp, "logo.png", PNG_BYTES);
    let archive = temp.path().join("pack.zip");
    write_zip(&archive, &[("x.txt", b"x")]);

    let json = stdout_json(
        satchel_cmd()
            .args(["--json", "sniff"])
            .arg(&image)
            .arg(&archive),
    );
    assert_eq!(json["data"][0]["mimetype"], "image/png");
    assert_eq!(json["data"][0]["container"], false);
    assert_eq!(json["data"][1]["mimetype"], "application/zip");
    assert_eq!(json["data"][1]["container"], true);
}

#[test]
fn test_sniff_rejects_out_of_range_length() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let image = write_file(&temp, "logo.png", PNG_BYTES);

    for len in ["0", "1048576"] {
        satchel_cmd()
            .args(["sniff", "--sniff-len", len])
            .arg(&image)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid sniff length"));
    }
}

#[test]
fn test_completion_bash() {
    satchel_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("satchel"));
}
