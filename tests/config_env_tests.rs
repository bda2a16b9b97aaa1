// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

// Kept in its own test binary: it sets a process-wide environment variable.

use moneysage::config::{Config, API_KEY_ENV};

#[test]
fn environment_key_is_reported_when_none_is_stored() {
    unsafe { std::env::set_var(API_KEY_ENV, " AIzaSyFromTheEnv42 ") };

    let cfg = Config::default();
    assert_eq!(cfg.api_key(), "AIzaSyFromTheEnv42");
    assert_eq!(cfg.masked_key(), "AIzaSyFr... (from GEMINI_API_KEY)");

    let stored = Config {
        gemini_api_key: "AIzaSyStoredKey0001".into(),
        model: None,
    };
    assert_eq!(stored.api_key(), "AIzaSyStoredKey0001");
    assert_eq!(stored.masked_key(), "AIzaSySt...");
}
