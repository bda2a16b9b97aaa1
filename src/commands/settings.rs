// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advisor::GeminiAdvisor;
use crate::config::{AppPaths, Config};
use crate::utils::{pretty_table, required};
use anyhow::Result;

pub fn handle(paths: &AppPaths, config: &mut Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-key", sub)) => {
            let key = required(sub, "key")?.trim();
            if key.is_empty() {
                anyhow::bail!("Please provide a non-empty API key");
            }
            config.gemini_api_key = key.to_string();
            config.save(&paths.config_path())?;
            let advisor = GeminiAdvisor::connect(config);
            match advisor.model() {
                Some(model) => println!("API key updated. Connected to {}", model),
                None => println!("API key saved, but no Gemini model could be reached with it."),
            }
        }
        Some(("set-model", sub)) => {
            let model = required(sub, "model")?.trim();
            config.model = match model {
                "" | "auto" => None,
                m => Some(m.to_string()),
            };
            config.save(&paths.config_path())?;
            match &config.model {
                Some(m) => println!("Advisor pinned to model {}", m),
                None => println!("Advisor will probe the default models"),
            }
        }
        Some(("show", _)) => {
            let rows = vec![
                vec!["API key".to_string(), config.masked_key()],
                vec![
                    "Model".to_string(),
                    config.model.clone().unwrap_or_else(|| "auto".to_string()),
                ],
                vec![
                    "Config file".to_string(),
                    paths.config_path().display().to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
