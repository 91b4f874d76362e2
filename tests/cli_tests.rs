//! CLI integration tests
//!
//! These tests run the atlas-packer binary against temporary sprite
//! directories and check exit codes and the files it writes.

use image::{Rgba, RgbaImage};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the binary under test
fn packer_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_atlas-packer"))
}

/// Run the binary from `cwd` so config discovery stays inside the temp dir
fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(packer_binary())
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute atlas-packer")
}

fn write_sprites(dir: &Path, sprites: &[(&str, u32, u32)]) {
    fs::create_dir_all(dir).expect("should create sprite dir");
    for (name, w, h) in sprites {
        RgbaImage::from_pixel(*w, *h, Rgba([10, 20, 30, 255]))
            .save(dir.join(format!("{}.png", name)))
            .expect("should write sprite");
    }
}

fn read_manifest(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).expect("manifest should exist");
    serde_json::from_str::<Value>(&text).expect("manifest should be JSON").as_array().unwrap().clone()
}

#[test]
fn test_pack_writes_image_and_manifest() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("hero", 64, 64), ("coin", 64, 64)]);

    let output = run(temp.path(), &["--dimensions", "128x128", "--space", "0", "sprites", "atlas"]);
    assert!(output.status.success(), "Pack failed: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Packed 2 sprites"), "unexpected stdout: {}", stdout);

    let atlas = image::open(temp.path().join("atlas.png")).expect("atlas should decode");
    assert_eq!((atlas.width(), atlas.height()), (128, 128));

    let records = read_manifest(&temp.path().join("atlas.json"));
    assert_eq!(records.len(), 2);
    // Equal areas keep directory (file name) order
    assert_eq!(records[0]["Name"], "coin");
    assert_eq!(records[0]["Offset"], serde_json::json!({"X": 0, "Y": 0}));
    assert_eq!(records[1]["Name"], "hero");
    assert_eq!(records[1]["Offset"], serde_json::json!({"X": 64, "Y": 0}));
    assert_eq!(records[1]["Size"], serde_json::json!({"X": 64, "Y": 64}));
}

#[test]
fn test_second_run_is_skipped_until_forced() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 8, 8)]);
    let args = ["--dimensions", "32x32", "sprites", "atlas"];

    assert!(run(temp.path(), &args).status.success());

    let second = run(temp.path(), &args);
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("up to date"));

    let forced = run(temp.path(), &["--force", "--dimensions", "32x32", "sprites", "atlas"]);
    assert!(forced.status.success());
    assert!(String::from_utf8_lossy(&forced.stdout).contains("Packed 1 sprites"));
}

#[test]
fn test_compact_manifest_has_no_newlines() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 4, 4)]);

    let output = run(temp.path(), &["--compact", "--dimensions", "16x16", "sprites", "atlas"]);
    assert!(output.status.success());

    let text = fs::read_to_string(temp.path().join("atlas.json")).unwrap();
    assert_eq!(text, r#"[{"Name":"a","Offset":{"X":0,"Y":0},"Size":{"X":4,"Y":4}}]"#);
}

#[test]
fn test_capacity_overflow_exits_with_error() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 30, 30), ("b", 30, 30), ("c", 30, 30)]);

    let output = run(temp.path(), &["--dimensions", "50x50", "--space", "0", "sprites", "atlas"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Atlas too small"));
    assert!(!temp.path().join("atlas.png").exists());
    assert!(!temp.path().join("atlas.json").exists());
}

#[test]
fn test_undecodable_file_exits_with_error() {
    let temp = TempDir::new().expect("should create temp dir");
    let dir = temp.path().join("sprites");
    write_sprites(&dir, &[("a", 4, 4)]);
    fs::write(dir.join("notes.txt"), "not an image").unwrap();

    let output = run(temp.path(), &["sprites", "atlas"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("notes.txt"));
    assert!(!temp.path().join("atlas.png").exists());
}

#[test]
fn test_bad_dimensions_is_usage_error() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 4, 4)]);

    let output = run(temp.path(), &["--dimensions", "wide", "sprites", "atlas"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_file_is_discovered() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 10, 10), ("b", 10, 10)]);
    fs::write(
        temp.path().join("atlas-packer.toml"),
        "[atlas]\nsize = [48, 64]\nspace = 2\n\n[output]\npretty = false\n",
    )
    .unwrap();

    let output = run(temp.path(), &["sprites", "atlas"]);
    assert!(output.status.success(), "Pack failed: {}", String::from_utf8_lossy(&output.stderr));

    let atlas = image::open(temp.path().join("atlas.png")).unwrap();
    assert_eq!((atlas.width(), atlas.height()), (48, 64));

    let records = read_manifest(&temp.path().join("atlas.json"));
    assert_eq!(records[1]["Offset"], serde_json::json!({"X": 12, "Y": 0}));
    assert_eq!(records[1]["Size"], serde_json::json!({"X": 10, "Y": 10}));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 4, 4)]);
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[atlas]\nsize = [0, 16]\nspace = 0\n").unwrap();

    let output = run(temp.path(), &["--config", "broken.toml", "sprites", "atlas"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("atlas.size"));
}

#[test]
fn test_dimensions_flag_overrides_invalid_config_size() {
    let temp = TempDir::new().expect("should create temp dir");
    write_sprites(&temp.path().join("sprites"), &[("a", 4, 4)]);
    fs::write(temp.path().join("atlas-packer.toml"), "[atlas]\nsize = [0, 0]\n").unwrap();

    let output = run(temp.path(), &["--dimensions", "16x16", "sprites", "atlas"]);
    assert!(output.status.success(), "Pack failed: {}", String::from_utf8_lossy(&output.stderr));

    let atlas = image::open(temp.path().join("atlas.png")).unwrap();
    assert_eq!((atlas.width(), atlas.height()), (16, 16));
}
