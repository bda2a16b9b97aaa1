// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneysage::config::{mask_key, AppPaths, Config};
use tempfile::tempdir;

#[test]
fn missing_or_corrupt_config_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    assert_eq!(Config::load(&path), Config::default());

    std::fs::write(&path, "[1, 2").unwrap();
    assert_eq!(Config::load(&path), Config::default());
}

#[test]
fn config_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let cfg = Config {
        gemini_api_key: "AIzaSyExampleKey123".into(),
        model: Some("gemini-1.5-flash".into()),
    };
    cfg.save(&path).unwrap();
    assert_eq!(Config::load(&path), cfg);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["gemini_api_key"], "AIzaSyExampleKey123");
}

#[test]
fn key_without_model_omits_the_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"gemini_api_key": "abc"}"#).unwrap();
    let cfg = Config::load(&path);
    assert_eq!(cfg.gemini_api_key, "abc");
    assert_eq!(cfg.model, None);

    cfg.save(&path).unwrap();
    assert!(!std::fs::read_to_string(&path).unwrap().contains("model"));
}

#[test]
fn stored_key_wins_and_is_masked() {
    let cfg = Config {
        gemini_api_key: "  AIzaSyExampleKey123 ".into(),
        model: None,
    };
    assert_eq!(cfg.api_key(), "AIzaSyExampleKey123");
    assert_eq!(cfg.masked_key(), "AIzaSyEx...");
}

#[test]
fn mask_hides_short_and_missing_keys() {
    assert_eq!(mask_key(""), "not configured");
    assert_eq!(mask_key("   "), "not configured");
    assert_eq!(mask_key("abc"), "********");
    assert_eq!(mask_key("AIzaSyExampleKey123"), "AIzaSyEx...");
}

#[test]
fn app_paths_place_files_in_the_data_dir() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("moneysage-data");
    let paths = AppPaths::resolve(Some(&root)).unwrap();

    assert!(root.is_dir());
    assert_eq!(paths.dir(), root.as_path());
    assert_eq!(paths.ledger_path(), root.join("financial_data.json"));
    assert_eq!(paths.config_path(), root.join("config.json"));
}
