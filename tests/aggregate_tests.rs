// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneysage::aggregate::{
    balance, category_breakdown, expenses_by_category, has_data, percentage_of, recent,
    savings_rate, total_expenses, total_income, totals,
};
use moneysage::models::{ExpenseEntry, IncomeEntry, LedgerDocument};
use moneysage::summary::format_summary;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(id: u32, amount: &str, description: &str, date: &str, category: &str) -> ExpenseEntry {
    ExpenseEntry {
        id,
        amount: dec(amount),
        description: description.into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.into(),
    }
}

fn income(id: u32, amount: &str, date: &str) -> IncomeEntry {
    IncomeEntry {
        id,
        amount: dec(amount),
        source: format!("source {}", id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: "Salary".into(),
    }
}

#[test]
fn empty_ledger_has_zero_figures() {
    let doc = LedgerDocument::default();
    assert_eq!(total_income(&doc), Decimal::ZERO);
    assert_eq!(total_expenses(&doc), Decimal::ZERO);
    assert_eq!(balance(&doc), Decimal::ZERO);
    assert_eq!(savings_rate(&doc), Decimal::ZERO);
    assert!(expenses_by_category(&doc).is_empty());
    assert!(!has_data(&doc));
}

#[test]
fn savings_rate_is_zero_without_income() {
    let doc = LedgerDocument {
        expenses: vec![expense(1, "80", "Rent share", "2024-01-01", "Housing")],
        ..LedgerDocument::default()
    };
    assert_eq!(balance(&doc), dec("-80"));
    assert_eq!(savings_rate(&doc), Decimal::ZERO);
    assert!(has_data(&doc));
}

#[test]
fn negative_balance_gives_negative_savings_rate() {
    let doc = LedgerDocument {
        income: vec![income(1, "200", "2024-01-01")],
        expenses: vec![expense(1, "300", "Laptop", "2024-01-02", "Technology")],
        ..LedgerDocument::default()
    };
    assert_eq!(balance(&doc), dec("-100"));
    assert_eq!(savings_rate(&doc), dec("-50"));
}

#[test]
fn category_sums_match_total_in_first_seen_order() {
    let doc = LedgerDocument {
        expenses: vec![
            expense(1, "12.40", "Lunch", "2024-01-03", "Food"),
            expense(2, "2.50", "Bus", "2024-01-01", "Transport"),
            expense(3, "7.60", "Dinner", "2024-01-02", "Food"),
            expense(4, "30", "Cinema", "2024-01-05", "Entertainment"),
            expense(5, "2.50", "Bus", "2024-01-06", "Transport"),
        ],
        ..LedgerDocument::default()
    };

    let by_cat = expenses_by_category(&doc);
    assert_eq!(
        by_cat,
        vec![
            ("Food".to_string(), dec("20.00")),
            ("Transport".to_string(), dec("5.00")),
            ("Entertainment".to_string(), dec("30")),
        ]
    );
    let sum: Decimal = by_cat.iter().map(|(_, v)| *v).sum();
    assert_eq!(sum, total_expenses(&doc));

    let breakdown = category_breakdown(&doc);
    let shares: Vec<Decimal> = breakdown.iter().map(|c| c.percentage).collect();
    let rounded: Vec<Decimal> = shares.iter().map(|s| s.round_dp(2)).collect();
    assert_eq!(rounded, vec![dec("36.36"), dec("9.09"), dec("54.55")]);
}

#[test]
fn recent_is_newest_first_and_stable_on_ties() {
    let expenses = vec![
        expense(1, "1", "a", "2024-01-02", "Food"),
        expense(2, "1", "b", "2024-01-05", "Food"),
        expense(3, "1", "c", "2024-01-02", "Food"),
        expense(4, "1", "d", "2023-12-31", "Food"),
        expense(5, "1", "e", "2024-01-05", "Food"),
    ];
    let ids: Vec<u32> = recent(&expenses, 10).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 5, 1, 3, 4]);

    let ids: Vec<u32> = recent(&expenses, 3).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 5, 1]);

    assert!(recent(&expenses, 0).is_empty());
}

#[test]
fn totals_snapshot_matches_individual_figures() {
    let doc = LedgerDocument {
        income: vec![income(1, "1000", "2024-01-01"), income(2, "250", "2024-01-15")],
        expenses: vec![expense(1, "500", "Rent", "2024-01-02", "Housing")],
        ..LedgerDocument::default()
    };
    let t = totals(&doc);
    assert_eq!(t.total_income, dec("1250"));
    assert_eq!(t.total_expenses, dec("500"));
    assert_eq!(t.balance, dec("750"));
    assert_eq!(t.savings_rate, dec("60"));
}

#[test]
fn sums_saturate_instead_of_overflowing() {
    let doc = LedgerDocument {
        expenses: vec![
            expense(1, "50000000000000000000000000000", "Yacht", "2024-01-01", "Other"),
            expense(2, "50000000000000000000000000000", "Yacht", "2024-01-02", "Other"),
        ],
        ..LedgerDocument::default()
    };
    assert_eq!(total_expenses(&doc), Decimal::MAX);
    assert_eq!(balance(&doc), Decimal::MIN);
    assert_eq!(savings_rate(&doc), Decimal::ZERO);
    assert_eq!(expenses_by_category(&doc), vec![("Other".to_string(), Decimal::MAX)]);
    assert_eq!(category_breakdown(&doc)[0].percentage, dec("100"));
    assert!(format_summary(&doc).contains("- Total expenses: $79,228,162,514,264,337,593,543,950,335.00"));
}

#[test]
fn tiny_income_with_huge_expenses_saturates_the_rate() {
    let doc = LedgerDocument {
        income: vec![income(1, "0.01", "2024-01-01")],
        expenses: vec![expense(1, "10000000000000000000000000", "House", "2024-01-02", "Housing")],
        ..LedgerDocument::default()
    };
    assert_eq!(savings_rate(&doc), Decimal::MIN);
    assert_eq!(totals(&doc).savings_rate, Decimal::MIN);
    assert!(format_summary(&doc).contains("- Savings rate: -"));
}

#[test]
fn percentage_division_overflow_saturates() {
    assert_eq!(percentage_of(Decimal::MAX, dec("0.5")), Decimal::MAX);
    assert_eq!(percentage_of(Decimal::MIN, dec("0.5")), Decimal::MIN);
    assert_eq!(percentage_of(dec("5"), Decimal::ZERO), Decimal::ZERO);
}
