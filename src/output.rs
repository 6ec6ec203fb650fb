//! Output rendering for the generate command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized `GenerateResult`.

use crate::models::{GenerateResult, Status};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a generate result in the requested format.
pub fn print_generate(res: &GenerateResult, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_generate_json(res)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            let readme = if color {
                res.readme.clone().bold().to_string()
            } else {
                res.readme.clone()
            };
            match res.status {
                Status::Empty => {
                    eprintln!(
                        "{} No documents found in {}; README left untouched.",
                        utils::info_prefix(),
                        res.docs
                    );
                }
                Status::Written => {
                    println!(
                        "{} README updated: {} (sections={} files={})",
                        utils::success_prefix(),
                        readme,
                        res.summary.sections,
                        res.summary.files
                    );
                }
                Status::UpToDate => {
                    println!("{} README is up to date: {}", utils::success_prefix(), readme);
                }
                Status::Stale => {
                    println!(
                        "{} README is stale: {} (run `docindex generate`)",
                        utils::error_prefix(),
                        readme
                    );
                }
                Status::Preview => {
                    if color {
                        println!("{} {}", "---".cyan().bold(), readme);
                    } else {
                        println!("--- {}", readme);
                    }
                    if let Some(text) = &res.preview {
                        print!("{}", text);
                    }
                }
            }
        }
    }
}

/// Compose the JSON object for a generate result (pure, for testing).
pub fn compose_generate_json(res: &GenerateResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}
