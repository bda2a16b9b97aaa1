// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::UserProfile;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let profile = merged_profile(ledger.profile(), sub, Local::now().naive_local());
            ledger.set_profile(profile)?;
            println!("Profile saved. Advice will now take it into account.");
        }
        Some(("show", sub)) => show(ledger.profile(), sub)?,
        _ => {}
    }
    Ok(())
}

/// Current profile overlaid with whatever flags were passed, stamped with `now`.
pub fn merged_profile(
    current: &UserProfile,
    sub: &clap::ArgMatches,
    now: NaiveDateTime,
) -> UserProfile {
    let text = |id: &str, old: &Option<String>| {
        sub.get_one::<String>(id)
            .map(|s| s.trim().to_string())
            .or_else(|| old.clone())
    };
    UserProfile {
        age: sub.get_one::<u32>("age").copied().or(current.age),
        occupation: text("occupation", &current.occupation),
        family_status: text("family-status", &current.family_status),
        financial_goals: text("goals", &current.financial_goals),
        risk_tolerance: text("risk", &current.risk_tolerance),
        monthly_income_range: text("income-range", &current.monthly_income_range),
        updated_at: Some(now),
    }
}

fn show(profile: &UserProfile, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), profile)? {
        return Ok(());
    }
    if profile.is_empty() {
        println!("No profile configured. Use `moneysage profile set`.");
        return Ok(());
    }
    let field = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let rows = vec![
        vec!["Age".to_string(), field(profile.age.map(|a| a.to_string()))],
        vec!["Occupation".to_string(), field(profile.occupation.clone())],
        vec!["Family status".to_string(), field(profile.family_status.clone())],
        vec!["Financial goals".to_string(), field(profile.financial_goals.clone())],
        vec!["Risk tolerance".to_string(), field(profile.risk_tolerance.clone())],
        vec![
            "Monthly income".to_string(),
            field(profile.monthly_income_range.clone()),
        ],
        vec![
            "Updated".to_string(),
            field(profile.updated_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())),
        ],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}
