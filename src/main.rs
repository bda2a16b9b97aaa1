// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use moneysage::advisor::GeminiAdvisor;
use moneysage::config::{AppPaths, Config};
use moneysage::ledger::Ledger;
use moneysage::store::Store;
use moneysage::{aggregate, cli, commands, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let paths = AppPaths::resolve(matches.get_one::<PathBuf>("data-dir").map(PathBuf::as_path))?;
    let mut ledger = Ledger::open(Store::new(paths.ledger_path()))?;
    let mut config = Config::load(&paths.config_path());

    // only reach out to Gemini when there is something to analyze
    let connect = |ledger: &Ledger, config: &Config| {
        if aggregate::has_data(ledger.document()) {
            GeminiAdvisor::connect(config)
        } else {
            GeminiAdvisor::unavailable()
        }
    };

    match matches.subcommand() {
        Some(("income", sub)) => commands::income::handle(&mut ledger, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut ledger, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("advise", _)) => {
            let gateway = connect(&ledger, &config);
            commands::advice::advise(&ledger, &gateway);
        }
        Some(("ask", sub)) => {
            let gateway = if sub.get_flag("suggest") {
                GeminiAdvisor::unavailable()
            } else {
                connect(&ledger, &config)
            };
            commands::advice::ask(&ledger, &gateway, sub)?;
        }
        Some(("config", sub)) => commands::settings::handle(&paths, &mut config, sub)?,
        Some(("export", sub)) => {
            commands::exporter::handle(&ledger, sub)?;
        }
        Some(("status", _)) => commands::status::handle(&ledger, &config)?,
        Some(("reset", sub)) => commands::status::reset(&mut ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
