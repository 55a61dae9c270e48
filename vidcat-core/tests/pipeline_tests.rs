// vidcat-core/tests/pipeline_tests.rs

mod common;

use chrono::DateTime;
use common::{Scripted, ScriptedProbe, touch};
use std::fs;
use tempfile::tempdir;
use vidcat_core::{CatalogConfig, build_index};

#[test]
fn test_index_written_for_mixed_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("Library");
    fs::create_dir(&root)?;
    touch(&root, "a.mp4");
    touch(&root, "notes.txt");
    touch(&root, "Clips/sub/b.avi");

    let config = CatalogConfig::new(root.clone(), root.clone());
    let probe = ScriptedProbe::new().secs("a.mp4", 10).secs("b.avi", 20);
    let summary = build_index(&config, &probe)?;

    assert_eq!(summary.totals.duration_secs, 30);
    assert_eq!(summary.group_count, 2);
    assert_eq!(summary.index_path, root.join("video_index.html"));
    assert!(summary.error_log_path.is_none());
    assert!(!root.join("error.txt").exists());

    let html = fs::read_to_string(&summary.index_path)?;
    assert!(html.contains("<h1>Library</h1>"));
    assert!(html.contains("total duration 00:00:30"));
    assert!(html.contains("a.mp4"));
    assert!(html.contains("Clips/sub/b.avi"));
    assert!(!html.contains("notes.txt"));
    Ok(())
}

#[test]
fn test_empty_tree_still_writes_index() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();
    touch(root, "readme.md");

    let config = CatalogConfig::new(root.to_path_buf(), root.to_path_buf());
    let summary = build_index(&config, &ScriptedProbe::new())?;

    assert_eq!(summary.totals.file_count, 0);
    assert_eq!(summary.group_count, 0);
    assert!(summary.index_path.exists());
    assert!(!root.join("error.txt").exists());
    assert!(fs::read_to_string(&summary.index_path)?.contains("No video files found."));
    Ok(())
}

#[test]
fn test_existing_index_is_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("video_index.html"), "stale index")?;

    let config = CatalogConfig::new(root.to_path_buf(), root.to_path_buf());
    build_index(&config, &ScriptedProbe::new())?;

    let html = fs::read_to_string(root.join("video_index.html"))?;
    assert!(!html.contains("stale index"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    Ok(())
}

#[test]
fn test_unreadable_file_produces_error_log() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();
    touch(root, "fine.mp4");
    touch(root, "Broken/corrupt.avi");

    let config = CatalogConfig::new(root.to_path_buf(), root.to_path_buf());
    let probe = ScriptedProbe::new()
        .secs("fine.mp4", 65)
        .with("corrupt.avi", Scripted::Unreadable);
    let summary = build_index(&config, &probe)?;

    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.totals.duration_secs, 65);
    assert!(summary.index_path.exists());

    let log_path = summary.error_log_path.expect("error log should be written");
    let log = fs::read_to_string(log_path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(DateTime::parse_from_rfc3339(lines[0]).is_ok());
    assert!(lines[1].contains("corrupt.avi"));
    Ok(())
}

#[test]
fn test_outputs_go_to_configured_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let scan = tempdir()?;
    let out = tempdir()?;
    touch(scan.path(), "a.mp4");

    let mut config = CatalogConfig::new(scan.path().to_path_buf(), out.path().to_path_buf());
    config.index_file_name = "index.html".to_string();
    build_index(&config, &ScriptedProbe::new())?;

    assert!(out.path().join("index.html").exists());
    assert!(!scan.path().join("index.html").exists());
    assert!(!scan.path().join("video_index.html").exists());
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_writing() {
    let dir = tempdir().unwrap();
    let mut config = CatalogConfig::new(dir.path().to_path_buf(), dir.path().to_path_buf());
    config.video_extensions.clear();

    assert!(build_index(&config, &ScriptedProbe::new()).is_err());
    assert!(!dir.path().join("video_index.html").exists());
}

/// Every `href="..."` value in `html`, in document order.
fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn test_links_resolve_from_separate_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("Library");
    let site = dir.path().join("site");
    fs::create_dir(&root)?;
    fs::create_dir(&site)?;
    touch(&root, "a.mp4");
    touch(&root, "Clips/my clip.avi");

    let config = CatalogConfig::new(root.clone(), site.clone());
    let summary = build_index(&config, &ScriptedProbe::new())?;

    let html = fs::read_to_string(&summary.index_path)?;
    let links = hrefs(&html);
    assert_eq!(links, vec!["../Library/a.mp4", "../Library/Clips/my%20clip.avi"]);

    let decoded = urlencoding::decode(links[1])?;
    assert!(site.join(decoded.as_ref()).is_file());
    assert!(site.join(links[0]).is_file());
    Ok(())
}
