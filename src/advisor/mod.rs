// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod gemini;

use crate::aggregate;
use crate::models::LedgerDocument;
use crate::summary::format_summary;
use std::fmt;

pub use gemini::GeminiAdvisor;

/// Outcome of an advisory request. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    Narrative(String),
    Unavailable,
    InsufficientData,
    Failed(String),
}

impl Advice {
    pub fn is_narrative(&self) -> bool {
        matches!(self, Advice::Narrative(_))
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::Narrative(text) => f.write_str(text),
            Advice::Unavailable => f.write_str(
                "Gemini is not available. Configure your API key with `moneysage config set-key <KEY>`.",
            ),
            Advice::InsufficientData => f.write_str(
                "Not enough data for an analysis yet. Start by recording your income and expenses.",
            ),
            Advice::Failed(reason) => write!(f, "Error: {}", reason),
        }
    }
}

/// Text-in/text-out language model behind the advisory commands.
///
/// Implementations receive nothing about the ledger beyond the formatted
/// summary and must answer [`Advice::Unavailable`] while unconfigured.
pub trait AdvisorGateway {
    fn is_available(&self) -> bool;
    fn analyze(&self, summary: &str) -> Advice;
    fn answer(&self, summary: &str, question: &str) -> Advice;
}

/// Full analysis of the ledger. Short-circuits before touching the gateway
/// when there is nothing to analyze or the gateway is not configured.
pub fn request_analysis<G: AdvisorGateway + ?Sized>(doc: &LedgerDocument, gateway: &G) -> Advice {
    if let Some(advice) = precheck(doc, gateway) {
        return advice;
    }
    gateway.analyze(&format_summary(doc))
}

pub fn request_answer<G: AdvisorGateway + ?Sized>(
    doc: &LedgerDocument,
    gateway: &G,
    question: &str,
) -> Advice {
    if let Some(advice) = precheck(doc, gateway) {
        return advice;
    }
    gateway.answer(&format_summary(doc), question.trim())
}

fn precheck<G: AdvisorGateway + ?Sized>(doc: &LedgerDocument, gateway: &G) -> Option<Advice> {
    if !aggregate::has_data(doc) {
        return Some(Advice::InsufficientData);
    }
    if !gateway.is_available() {
        return Some(Advice::Unavailable);
    }
    None
}
