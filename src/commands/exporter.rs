// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::ledger::Ledger;
use crate::models::LedgerDocument;
use crate::utils::required;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backup artifact: the whole document plus the headline totals at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    #[serde(flatten)]
    pub document: LedgerDocument,
    pub exported_at: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_expenses: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl ExportSnapshot {
    pub fn capture(doc: &LedgerDocument, exported_at: NaiveDateTime) -> Self {
        Self {
            document: doc.clone(),
            exported_at,
            total_income: aggregate::total_income(doc),
            total_expenses: aggregate::total_expenses(doc),
            balance: aggregate::balance(doc),
        }
    }
}

pub fn default_file_name(at: NaiveDateTime, format: &str) -> String {
    format!("financial_data_backup_{}.{}", at.format("%Y%m%d_%H%M%S"), format)
}

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<PathBuf> {
    let fmt = required(m, "format")?.to_lowercase();
    let now = Local::now().naive_local();
    let out = m
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_file_name(now, &fmt)));

    match fmt.as_str() {
        "json" => write_json(&ExportSnapshot::capture(ledger.document(), now), &out)?,
        "csv" => write_csv(ledger.document(), &out)?,
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported ledger to {}", out.display());
    Ok(out)
}

pub fn write_json(snapshot: &ExportSnapshot, out: &Path) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(snapshot)?)
        .with_context(|| format!("Write export to {}", out.display()))?;
    Ok(())
}

/// One row per entry, income first, both in stored order.
pub fn write_csv(doc: &LedgerDocument, out: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("Create export at {}", out.display()))?;
    wtr.write_record(["kind", "id", "date", "label", "amount", "category"])?;
    for e in &doc.income {
        wtr.write_record([
            "income".to_string(),
            e.id.to_string(),
            e.date.to_string(),
            e.source.clone(),
            e.amount.to_string(),
            e.category.clone(),
        ])?;
    }
    for e in &doc.expenses {
        wtr.write_record([
            "expense".to_string(),
            e.id.to_string(),
            e.date.to_string(),
            e.description.clone(),
            e.amount.to_string(),
            e.category.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
