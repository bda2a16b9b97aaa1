// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::recent;
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table, required};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// `--date` when given, today otherwise.
pub(crate) fn entry_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(d) => parse_date(d),
        None => Ok(Local::now().date_naive()),
    }
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    let source = required(sub, "source")?;
    let category = required(sub, "category")?;
    let date = entry_date(sub)?;

    let id = ledger.add_income(amount, source, date, category)?;
    println!(
        "Recorded income #{}: {} from '{}' on {} ({})",
        id,
        fmt_money(&amount),
        source.trim(),
        date,
        category
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<u32>("id")
        .ok_or_else(|| anyhow::anyhow!("Missing argument 'id'"))?;
    if ledger.delete_income(id)? {
        println!("Removed income #{}", id);
    } else {
        println!("No income with id {}; nothing removed", id);
    }
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.source.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Source", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct IncomeRow {
    pub id: u32,
    pub date: String,
    pub source: String,
    pub amount: String,
    pub category: String,
}

/// Income entries newest first, honoring `--limit`.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Vec<IncomeRow> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(usize::MAX);
    recent(ledger.income(), limit)
        .into_iter()
        .map(|e| IncomeRow {
            id: e.id,
            date: e.date.to_string(),
            source: e.source.clone(),
            amount: format!("{:.2}", e.amount),
            category: e.category.clone(),
        })
        .collect()
}
