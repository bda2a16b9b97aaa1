// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneysage::models::{ExpenseEntry, IncomeEntry, LedgerDocument, UserProfile};
use moneysage::summary::{entry_line, format_summary};
use rust_decimal::Decimal;

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
}

fn worked_example() -> LedgerDocument {
    LedgerDocument {
        income: vec![IncomeEntry {
            id: 1,
            amount: Decimal::new(100, 0),
            source: "Job".into(),
            date: day(1),
            category: "Salario".into(),
        }],
        expenses: vec![ExpenseEntry {
            id: 1,
            amount: Decimal::new(30, 0),
            description: "Lunch".into(),
            date: day(2),
            category: "Alimentación".into(),
        }],
        ..LedgerDocument::default()
    }
}

#[test]
fn missing_profile_fields_read_not_specified() {
    let text = format_summary(&worked_example());
    for line in [
        "- Age: not specified",
        "- Occupation: not specified",
        "- Family status: not specified",
        "- Financial goals: not specified",
        "- Risk tolerance: not specified",
        "- Monthly income range: not specified",
    ] {
        assert!(text.contains(line), "missing {line:?} in\n{text}");
    }
}

#[test]
fn figures_breakdown_and_recent_entries_are_rendered() {
    let mut doc = worked_example();
    doc.user_profile = UserProfile {
        age: Some(24),
        occupation: Some("Student".into()),
        ..UserProfile::default()
    };
    let text = format_summary(&doc);

    assert!(text.contains("- Age: 24"));
    assert!(text.contains("- Occupation: Student"));
    assert!(text.contains("- Total income: $100.00"));
    assert!(text.contains("- Total expenses: $30.00"));
    assert!(text.contains("- Current balance: $70.00"));
    assert!(text.contains("- Savings rate: 70.0%"));
    assert!(text.contains("- Alimentación: $30.00 (100.0%)"));
    assert!(text.contains("RECENT EXPENSES (LAST 10):\n- 2024-01-02: Lunch - $30.00 (Alimentación)"));
    assert!(text.contains("RECENT INCOME (LAST 5):\n- 2024-01-01: Job - $100.00 (Salario)"));
}

#[test]
fn summary_is_deterministic() {
    let doc = worked_example();
    assert_eq!(format_summary(&doc), format_summary(&doc));
}

#[test]
fn empty_ledger_omits_recent_sections() {
    let text = format_summary(&LedgerDocument::default());
    assert!(text.contains("- Savings rate: 0.0%"));
    assert!(text.contains("- No expenses recorded"));
    assert!(!text.contains("RECENT EXPENSES"));
    assert!(!text.contains("RECENT INCOME"));
}

#[test]
fn recent_sections_are_capped() {
    let mut doc = LedgerDocument::default();
    for n in 1..=12 {
        doc.expenses.push(ExpenseEntry {
            id: n,
            amount: Decimal::new(1, 0),
            description: format!("expense {n}"),
            date: day(n),
            category: "Food".into(),
        });
        doc.income.push(IncomeEntry {
            id: n,
            amount: Decimal::new(10, 0),
            source: format!("income {n}"),
            date: day(n),
            category: "Salary".into(),
        });
    }
    let text = format_summary(&doc);

    let expense_lines = text.lines().filter(|l| l.contains(": expense ")).count();
    let income_lines = text.lines().filter(|l| l.contains(": income ")).count();
    assert_eq!(expense_lines, 10);
    assert_eq!(income_lines, 5);
    // newest first
    assert!(text.contains("RECENT INCOME (LAST 5):\n- 2024-01-12: income 12"));
    assert!(!text.contains("expense 2 -"));
}

#[test]
fn entry_line_format() {
    let e = ExpenseEntry {
        id: 7,
        amount: Decimal::new(123456, 2),
        description: "New laptop".into(),
        date: day(9),
        category: "Technology".into(),
    };
    assert_eq!(entry_line(&e), "- 2024-01-09: New laptop - $1,234.56 (Technology)");
}
