// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Sale",
    "Bonus",
    "Pension",
    "Rent",
    "Other",
];
pub const DEFAULT_INCOME_CATEGORY: &str = "Salary";

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Entertainment",
    "Clothing",
    "Education",
    "Technology",
    "Debt",
    "Other",
];
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Other";

pub const FAMILY_STATUSES: &[&str] = &["Single", "Married", "Partnered", "With children", "Divorced"];
pub const RISK_TOLERANCES: &[&str] = &["Conservative", "Moderate", "Aggressive"];
pub const INCOME_RANGES: &[&str] = &[
    "Under 3,000",
    "3,000 - 9,000",
    "9,000 - 15,000",
    "15,000 - 30,000",
    "Over 30,000",
];

fn default_income_category() -> String {
    DEFAULT_INCOME_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub source: String,
    pub date: NaiveDate, // YYYY-MM-DD
    #[serde(default = "default_income_category")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate, // YYYY-MM-DD
    pub category: String,
}

/// Common view over income and expense entries, used by the aggregator,
/// the summary formatter and the id repair pass.
pub trait Entry {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
    fn amount(&self) -> Decimal;
    /// Source for income, description for expenses.
    fn label(&self) -> &str;
    fn date(&self) -> NaiveDate;
    fn category(&self) -> &str;
}

impl Entry for IncomeEntry {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn label(&self) -> &str {
        &self.source
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn category(&self) -> &str {
        &self.category
    }
}

impl Entry for ExpenseEntry {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
    fn label(&self) -> &str {
        &self.description
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn category(&self) -> &str {
        &self.category
    }
}

/// Self-described profile fed to the advisor. Every field is optional and an
/// unset profile persists as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub income: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    // reserved, carried through untouched
    #[serde(default)]
    pub goals: Vec<serde_json::Value>,
    #[serde(default)]
    pub user_profile: UserProfile,
}
