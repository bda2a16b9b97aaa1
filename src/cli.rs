// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    DEFAULT_EXPENSE_CATEGORY, DEFAULT_INCOME_CATEGORY, EXPENSE_CATEGORIES, FAMILY_STATUSES,
    INCOME_CATEGORIES, INCOME_RANGES, RISK_TOLERANCES,
};
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn choice(values: &'static [&'static str]) -> PossibleValuesParser {
    PossibleValuesParser::new(values.iter().copied())
}

fn entry_command(
    name: &'static str,
    about: &'static str,
    label: &'static str,
    categories: &'static [&'static str],
    default_category: &'static str,
) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record a new entry")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Positive amount, e.g. 12.50"),
                )
                .arg(Arg::new(label).long(label).required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(choice(categories))
                        .default_value(default_category),
                ),
        )
        .subcommand(json_flags(
            Command::new("list").about("List entries, newest first").arg(
                Arg::new("limit")
                    .long("limit")
                    .value_parser(value_parser!(usize)),
            ),
        ))
        .subcommand(
            Command::new("rm").about("Delete an entry by id").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(u32)),
            ),
        )
}

pub fn build_cli() -> Command {
    Command::new("moneysage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal income/expense ledger with AI financial advice")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .env("MONEYSAGE_HOME")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding financial_data.json and config.json"),
        )
        .subcommand(entry_command(
            "income",
            "Manage income entries",
            "source",
            INCOME_CATEGORIES,
            DEFAULT_INCOME_CATEGORY,
        ))
        .subcommand(entry_command(
            "expense",
            "Manage expense entries",
            "description",
            EXPENSE_CATEGORIES,
            DEFAULT_EXPENSE_CATEGORY,
        ))
        .subcommand(
            Command::new("profile")
                .about("Personal profile used to tailor advice")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .about("Update the profile; omitted fields keep their value")
                        .arg(
                            Arg::new("age")
                                .long("age")
                                .value_parser(value_parser!(u32).range(18..=100)),
                        )
                        .arg(Arg::new("occupation").long("occupation"))
                        .arg(
                            Arg::new("family-status")
                                .long("family-status")
                                .value_parser(choice(FAMILY_STATUSES)),
                        )
                        .arg(Arg::new("goals").long("goals").help("Financial goals, free text"))
                        .arg(
                            Arg::new("risk")
                                .long("risk")
                                .value_parser(choice(RISK_TOLERANCES)),
                        )
                        .arg(
                            Arg::new("income-range")
                                .long("income-range")
                                .value_parser(choice(INCOME_RANGES)),
                        ),
                )
                .subcommand(json_flags(Command::new("show").about("Show the profile"))),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and breakdowns")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expenses, balance, savings rate"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Expenses grouped by category"),
                ))
                .subcommand(
                    Command::new("prompt").about("Print the summary block sent to the advisor"),
                ),
        )
        .subcommand(Command::new("advise").about("Full financial analysis from Gemini"))
        .subcommand(
            Command::new("ask")
                .about("Ask Gemini a question about your finances")
                .arg(
                    Arg::new("question")
                        .required_unless_present("suggest")
                        .num_args(1..)
                        .help("Question text"),
                )
                .arg(
                    Arg::new("suggest")
                        .long("suggest")
                        .action(ArgAction::SetTrue)
                        .help("List suggested questions"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Advisor credentials")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set-key")
                        .about("Store the Gemini API key and reconnect")
                        .arg(Arg::new("key").required(true)),
                )
                .subcommand(
                    Command::new("set-model")
                        .about("Pin a Gemini model; 'auto' restores probing")
                        .arg(Arg::new("model").required(true)),
                )
                .subcommand(Command::new("show").about("Show the masked key and model")),
        )
        .subcommand(
            Command::new("export")
                .about("Write a snapshot of the ledger")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "csv"])
                        .default_value("json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path, defaults to a timestamped file name"),
                ),
        )
        .subcommand(Command::new("status").about("Entry counts, profile and key status"))
        .subcommand(
            Command::new("reset").about("Delete all data").arg(
                Arg::new("yes")
                    .long("yes")
                    .action(ArgAction::SetTrue)
                    .help("Confirm deleting every entry and the profile"),
            ),
        )
}
