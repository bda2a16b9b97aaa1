// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Plain-text rendering of the ledger handed to the advisor, plus the
//! instruction text wrapped around it.

use crate::aggregate::{self, category_breakdown, recent};
use crate::models::{Entry, LedgerDocument, UserProfile};
use crate::utils::{fmt_money, fmt_percent};
use std::fmt::Write;

pub const RECENT_EXPENSES: usize = 10;
pub const RECENT_INCOME: usize = 5;

const NOT_SPECIFIED: &str = "not specified";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Which category do I spend the most money on?",
    "How can I save more money?",
    "What is my biggest unnecessary expense?",
    "Should I invest my money, and where?",
    "How can I improve my savings rate?",
    "What strategy do you recommend for this month?",
];

pub fn format_summary(doc: &LedgerDocument) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_summary(&mut out, doc);
    out
}

fn write_summary(out: &mut String, doc: &LedgerDocument) -> std::fmt::Result {
    let totals = aggregate::totals(doc);

    writeln!(out, "USER FINANCIAL PROFILE")?;
    writeln!(out)?;
    write_profile(out, &doc.user_profile)?;
    writeln!(out)?;

    writeln!(out, "CURRENT FINANCIAL SUMMARY:")?;
    writeln!(out, "- Total income: {}", fmt_money(&totals.total_income))?;
    writeln!(out, "- Total expenses: {}", fmt_money(&totals.total_expenses))?;
    writeln!(out, "- Current balance: {}", fmt_money(&totals.balance))?;
    writeln!(out, "- Savings rate: {}", fmt_percent(&totals.savings_rate))?;
    writeln!(out)?;

    writeln!(out, "EXPENSES BY CATEGORY:")?;
    let breakdown = category_breakdown(doc);
    if breakdown.is_empty() {
        writeln!(out, "- No expenses recorded")?;
    }
    for c in &breakdown {
        writeln!(
            out,
            "- {}: {} ({})",
            c.category,
            fmt_money(&c.amount),
            fmt_percent(&c.percentage)
        )?;
    }

    let expenses = recent(&doc.expenses, RECENT_EXPENSES);
    if !expenses.is_empty() {
        writeln!(out)?;
        writeln!(out, "RECENT EXPENSES (LAST {}):", RECENT_EXPENSES)?;
        for e in expenses {
            writeln!(out, "{}", entry_line(e))?;
        }
    }

    let income = recent(&doc.income, RECENT_INCOME);
    if !income.is_empty() {
        writeln!(out)?;
        writeln!(out, "RECENT INCOME (LAST {}):", RECENT_INCOME)?;
        for e in income {
            writeln!(out, "{}", entry_line(e))?;
        }
    }
    Ok(())
}

fn write_profile(out: &mut String, p: &UserProfile) -> std::fmt::Result {
    let age = p.age.map(|a| a.to_string());
    writeln!(out, "PERSONAL INFORMATION:")?;
    writeln!(out, "- Age: {}", or_unset(age.as_deref()))?;
    writeln!(out, "- Occupation: {}", or_unset(p.occupation.as_deref()))?;
    writeln!(out, "- Family status: {}", or_unset(p.family_status.as_deref()))?;
    writeln!(out, "- Financial goals: {}", or_unset(p.financial_goals.as_deref()))?;
    writeln!(out, "- Risk tolerance: {}", or_unset(p.risk_tolerance.as_deref()))?;
    writeln!(
        out,
        "- Monthly income range: {}",
        or_unset(p.monthly_income_range.as_deref())
    )
}

fn or_unset(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// `- 2024-01-02: Lunch - $30.00 (Food)`
pub fn entry_line<E: Entry>(e: &E) -> String {
    format!(
        "- {}: {} - {} ({})",
        e.date(),
        e.label(),
        fmt_money(&e.amount()),
        e.category()
    )
}

pub fn analysis_prompt(summary: &str) -> String {
    format!(
        "You are an expert personal financial advisor. Analyze the following financial information and provide:

1. A DETAILED ANALYSIS of the current financial situation
2. SPECIFIC RECOMMENDATIONS to improve these finances
3. OPTIMIZATION AREAS, identifying unnecessary expenses
4. PERSONALIZED SAVING STRATEGIES

FINANCIAL INFORMATION:
{summary}
Answer with a clear structure."
    )
}

pub fn question_prompt(summary: &str, question: &str) -> String {
    format!(
        "You are a personal financial advisor. Answer this question: \"{question}\"

Base your answer on this financial information:
{summary}
Give a practical, personalized answer."
    )
}
