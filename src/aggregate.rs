// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures over a [`LedgerDocument`]. Everything here is pure.
//!
//! Sums and ratios saturate at `Decimal::MAX` / `Decimal::MIN` instead of
//! overflowing.

use crate::models::{Entry, LedgerDocument};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn total_income(doc: &LedgerDocument) -> Decimal {
    saturating_sum(doc.income.iter().map(|e| e.amount))
}

pub fn total_expenses(doc: &LedgerDocument) -> Decimal {
    saturating_sum(doc.expenses.iter().map(|e| e.amount))
}

pub fn balance(doc: &LedgerDocument) -> Decimal {
    total_income(doc).saturating_sub(total_expenses(doc))
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

/// Share of income kept, in percent. Zero when there is no income.
pub fn savings_rate(doc: &LedgerDocument) -> Decimal {
    percentage_of(balance(doc), total_income(doc))
}

pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match part.checked_div(total) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if part.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// False when the ledger holds no income and no expenses at all.
pub fn has_data(doc: &LedgerDocument) -> bool {
    total_income(doc) > Decimal::ZERO || !doc.expenses.is_empty()
}

/// Expense totals per category, in order of each category's first appearance.
pub fn expenses_by_category(doc: &LedgerDocument) -> Vec<(String, Decimal)> {
    let mut out: Vec<(String, Decimal)> = Vec::new();
    for e in &doc.expenses {
        match out.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, sum)) => *sum = sum.saturating_add(e.amount),
            None => out.push((e.category.clone(), e.amount)),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub percentage: Decimal,
}

pub fn category_breakdown(doc: &LedgerDocument) -> Vec<CategoryTotal> {
    let total = total_expenses(doc);
    expenses_by_category(doc)
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: percentage_of(amount, total),
        })
        .collect()
}

/// The `n` latest entries, newest first. Entries sharing a date keep their stored order.
pub fn recent<E: Entry>(entries: &[E], n: usize) -> Vec<&E> {
    let mut sorted: Vec<&E> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_expenses: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub savings_rate: Decimal,
}

pub fn totals(doc: &LedgerDocument) -> Totals {
    Totals {
        total_income: total_income(doc),
        total_expenses: total_expenses(doc),
        balance: balance(doc),
        savings_rate: savings_rate(doc),
    }
}
