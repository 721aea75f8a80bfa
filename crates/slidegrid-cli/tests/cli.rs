//! Drive the slidegrid binary against files in a temporary directory

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn slidegrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidegrid"))
        .args(args)
        .output()
        .expect("failed to run slidegrid")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn new_document(dir: &TempDir) -> std::path::PathBuf {
    let doc = dir.path().join("table.json");
    let out = slidegrid(&[
        "new",
        "--rows",
        "2",
        "--cols",
        "3",
        "--width",
        "300",
        "--height",
        "40",
        "-o",
        path_str(&doc),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    doc
}

#[test]
fn test_new_sizes_frame_to_grid() {
    let dir = TempDir::new().unwrap();
    let doc = read_json(&new_document(&dir));

    assert_eq!(doc["width"], 300);
    assert_eq!(doc["height"], 40);
    assert_eq!(doc["table"]["grid"].as_array().unwrap().len(), 3);
    assert_eq!(doc["table"]["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_resize_updates_frame() {
    let dir = TempDir::new().unwrap();
    let path = new_document(&dir);

    let out = slidegrid(&["resize", path_str(&path), "--row", "1", "--height", "100"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let out = slidegrid(&["resize", path_str(&path), "--column", "0", "--width", "1in"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let doc = read_json(&path);
    assert_eq!(doc["height"], 120);
    assert_eq!(doc["width"], 914_400 + 200);
}

#[test]
fn test_resize_rejects_bad_index() {
    let dir = TempDir::new().unwrap();
    let path = new_document(&dir);
    let before = std::fs::read_to_string(&path).unwrap();

    let out = slidegrid(&["resize", path_str(&path), "--row", "-1", "--height", "10"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("row index [-1] out of range"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_xml_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = new_document(&dir);
    let xml = dir.path().join("table.xml");
    let back = dir.path().join("back.json");

    let out = slidegrid(&["to-xml", path_str(&path), "-o", path_str(&xml)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(std::fs::read_to_string(&xml).unwrap().contains("<a:gridCol w=\"100\"/>"));

    let out = slidegrid(&["from-xml", path_str(&xml), "-o", path_str(&back)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(read_json(&back), read_json(&path));
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let path = new_document(&dir);

    let out = slidegrid(&["info", path_str(&path)]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Size: 2 rows x 3 columns"));
    assert!(stdout.contains("Flags: firstRow bandRow"));
    assert!(stdout.contains("Merged: none"));
    assert!(stdout.contains("  Column 2: 100 EMU"));
}
