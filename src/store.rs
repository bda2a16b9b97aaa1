// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Entry, LedgerDocument};
use anyhow::Context;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Single JSON document holding the whole ledger. Rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing file. A missing or unreadable file yields an empty document.
    pub fn load(&self) -> LedgerDocument {
        match self.read() {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(path = %self.path.display(), "no ledger file yet, starting empty");
                LedgerDocument::default()
            }
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(path = %self.path.display(), error = %reason, "ignoring unreadable ledger file");
                LedgerDocument::default()
            }
        }
    }

    fn read(&self) -> anyhow::Result<Option<LedgerDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read ledger at {}", self.path.display()))?;
        let doc = serde_json::from_str(&raw)
            .with_context(|| format!("Parse ledger at {}", self.path.display()))?;
        Ok(Some(doc))
    }

    /// Serializes `doc` next to the target and renames it over the old file, so a
    /// concurrent reader sees either the previous or the new document.
    pub fn save(&self, doc: &LedgerDocument) -> Result<()> {
        let body = serde_json::to_string_pretty(doc)?;
        let write_err = |source: std::io::Error| LedgerError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        debug!(
            path = %self.path.display(),
            income = doc.income.len(),
            expenses = doc.expenses.len(),
            "ledger saved"
        );
        Ok(())
    }
}

/// Renumbers a collection `1..=N` in stored order when it holds duplicate or
/// zero ids. Collections with valid ids are left alone, so the pass is idempotent.
pub fn repair_ids(mut doc: LedgerDocument) -> (LedgerDocument, bool) {
    let income = renumber_if_invalid(&mut doc.income);
    let expenses = renumber_if_invalid(&mut doc.expenses);
    if income || expenses {
        warn!(
            income_renumbered = income,
            expenses_renumbered = expenses,
            income = doc.income.len(),
            expenses = doc.expenses.len(),
            "repaired duplicate entry ids"
        );
    }
    (doc, income || expenses)
}

fn renumber_if_invalid<E: Entry>(entries: &mut [E]) -> bool {
    let mut seen = HashSet::new();
    if entries.iter().all(|e| e.id() > 0 && seen.insert(e.id())) {
        return false;
    }
    for (id, entry) in (1u32..).zip(entries.iter_mut()) {
        entry.set_id(id);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeEntry;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn income(id: u32) -> IncomeEntry {
        IncomeEntry {
            id,
            amount: Decimal::ONE,
            source: "Job".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: "Salary".into(),
        }
    }

    #[test]
    fn gaps_are_not_renumbered() {
        let mut entries = vec![income(1), income(3), income(7)];
        assert!(!renumber_if_invalid(&mut entries));
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 7]);
    }

    #[test]
    fn zero_id_triggers_renumbering() {
        let mut entries = vec![income(0), income(5)];
        assert!(renumber_if_invalid(&mut entries));
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
