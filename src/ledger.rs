// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::error::{LedgerError, Result};
use crate::models::{Entry, ExpenseEntry, IncomeEntry, LedgerDocument, UserProfile};
use crate::store::{repair_ids, Store};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// In-memory ledger bound to its backing [`Store`].
///
/// Every mutation is applied to a copy of the document, saved, and only then
/// swapped in, so a failed write leaves the in-memory state untouched.
#[derive(Debug)]
pub struct Ledger {
    store: Store,
    doc: LedgerDocument,
}

impl Ledger {
    /// Loads the store and runs the id repair pass, persisting the result
    /// right away when anything was renumbered.
    pub fn open(store: Store) -> Result<Self> {
        let (doc, repaired) = repair_ids(store.load());
        if repaired {
            store.save(&doc)?;
            info!(path = %store.path().display(), "persisted repaired ledger");
        }
        Ok(Self { store, doc })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.doc
    }

    pub fn income(&self) -> &[IncomeEntry] {
        &self.doc.income
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.doc.expenses
    }

    pub fn profile(&self) -> &UserProfile {
        &self.doc.user_profile
    }

    pub fn add_income(
        &mut self,
        amount: Decimal,
        source: &str,
        date: NaiveDate,
        category: &str,
    ) -> Result<u32> {
        check_amount(amount)?;
        let source = check_label("source", source)?;
        let category = check_label("category", category)?;
        let id = self.commit(|doc| {
            let id = next_id(&doc.income);
            doc.income.push(IncomeEntry {
                id,
                amount,
                source,
                date,
                category,
            });
            id
        })?;
        debug!(id, %amount, "income added");
        Ok(id)
    }

    pub fn add_expense(
        &mut self,
        amount: Decimal,
        description: &str,
        date: NaiveDate,
        category: &str,
    ) -> Result<u32> {
        check_amount(amount)?;
        let description = check_label("description", description)?;
        let category = check_label("category", category)?;
        let id = self.commit(|doc| {
            let id = next_id(&doc.expenses);
            doc.expenses.push(ExpenseEntry {
                id,
                amount,
                description,
                date,
                category,
            });
            id
        })?;
        debug!(id, %amount, "expense added");
        Ok(id)
    }

    /// Removes the income entry with `id`. Returns whether one was found; an
    /// unknown id is not an error and the document is still saved.
    pub fn delete_income(&mut self, id: u32) -> Result<bool> {
        let removed = self.commit(|doc| remove_by_id(&mut doc.income, id))?;
        debug!(id, removed, "income delete");
        Ok(removed)
    }

    /// Expense counterpart of [`Ledger::delete_income`].
    pub fn delete_expense(&mut self, id: u32) -> Result<bool> {
        let removed = self.commit(|doc| remove_by_id(&mut doc.expenses, id))?;
        debug!(id, removed, "expense delete");
        Ok(removed)
    }

    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.commit(|doc| doc.user_profile = profile)
    }

    /// Drops every entry and the profile.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(|doc| *doc = LedgerDocument::default())?;
        info!(path = %self.store.path().display(), "ledger reset");
        Ok(())
    }

    pub fn total_income(&self) -> Decimal {
        aggregate::total_income(&self.doc)
    }

    pub fn total_expenses(&self) -> Decimal {
        aggregate::total_expenses(&self.doc)
    }

    pub fn balance(&self) -> Decimal {
        aggregate::balance(&self.doc)
    }

    pub fn savings_rate(&self) -> Decimal {
        aggregate::savings_rate(&self.doc)
    }

    pub fn expenses_by_category(&self) -> Vec<(String, Decimal)> {
        aggregate::expenses_by_category(&self.doc)
    }

    fn commit<T>(&mut self, mutate: impl FnOnce(&mut LedgerDocument) -> T) -> Result<T> {
        let mut next = self.doc.clone();
        let out = mutate(&mut next);
        self.store.save(&next)?;
        self.doc = next;
        Ok(out)
    }
}

/// One past the highest id in the collection, or 1 when it is empty.
pub fn next_id<E: Entry>(entries: &[E]) -> u32 {
    entries.iter().map(Entry::id).max().map_or(1, |max| max + 1)
}

fn remove_by_id<E: Entry>(entries: &mut Vec<E>, id: u32) -> bool {
    match entries.iter().position(|e| e.id() == id) {
        Some(idx) => {
            entries.remove(idx);
            true
        }
        None => false,
    }
}

fn check_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn check_label(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyLabel(field));
    }
    Ok(trimmed.to_string())
}
