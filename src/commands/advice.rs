// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advisor::{request_analysis, request_answer, Advice, AdvisorGateway};
use crate::ledger::Ledger;
use crate::summary::SUGGESTED_QUESTIONS;
use anyhow::Result;

pub fn advise<G: AdvisorGateway + ?Sized>(ledger: &Ledger, gateway: &G) -> Advice {
    let advice = request_analysis(ledger.document(), gateway);
    println!("{}", advice);
    advice
}

/// Prints the suggestions for `--suggest`, otherwise the answer to the question.
pub fn ask<G: AdvisorGateway + ?Sized>(
    ledger: &Ledger,
    gateway: &G,
    m: &clap::ArgMatches,
) -> Result<Option<Advice>> {
    if m.get_flag("suggest") {
        for (i, q) in SUGGESTED_QUESTIONS.iter().enumerate() {
            println!("{}. {}", i + 1, q);
        }
        return Ok(None);
    }
    let question = question_text(m)?;
    let advice = request_answer(ledger.document(), gateway, &question);
    println!("Question: {}\n", question);
    println!("{}", advice);
    Ok(Some(advice))
}

/// Joins the positional words back into one question.
pub fn question_text(m: &clap::ArgMatches) -> Result<String> {
    let words: Vec<&str> = m
        .get_many::<String>("question")
        .map(|vals| vals.map(String::as_str).collect())
        .unwrap_or_default();
    let question = words.join(" ");
    if question.trim().is_empty() {
        anyhow::bail!("Question must not be empty");
    }
    Ok(question.trim().to_string())
}
