// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn status_rows(ledger: &Ledger, config: &Config) -> Vec<Vec<String>> {
    let profile = if ledger.profile().is_empty() {
        "not configured"
    } else {
        "configured"
    };
    vec![
        vec!["Income entries".into(), ledger.income().len().to_string()],
        vec!["Expense entries".into(), ledger.expenses().len().to_string()],
        vec!["Profile".into(), profile.to_string()],
        vec!["API key".into(), config.masked_key()],
        vec![
            "Ledger file".into(),
            ledger.store().path().display().to_string(),
        ],
    ]
}

pub fn handle(ledger: &Ledger, config: &Config) -> Result<()> {
    println!("{}", pretty_table(&["Item", "Value"], status_rows(ledger, config)));
    Ok(())
}

pub fn reset(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        anyhow::bail!("Refusing to delete all data without --yes");
    }
    ledger.reset()?;
    println!("All data has been deleted.");
    Ok(())
}
