// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{category_breakdown, totals};
use crate::ledger::Ledger;
use crate::summary::format_summary;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        Some(("prompt", _)) => print!("{}", format_summary(ledger.document())),
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let t = totals(ledger.document());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        let data = vec![
            vec!["Total income".to_string(), fmt_money(&t.total_income)],
            vec!["Total expenses".to_string(), fmt_money(&t.total_expenses)],
            vec!["Balance".to_string(), fmt_money(&t.balance)],
            vec!["Savings rate".to_string(), fmt_percent(&t.savings_rate)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}

fn categories(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let breakdown = category_breakdown(ledger.document());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &breakdown)? {
        let data: Vec<Vec<String>> = breakdown
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    fmt_money(&c.amount),
                    fmt_percent(&c.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    }
    Ok(())
}
