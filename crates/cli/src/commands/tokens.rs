//! List tokens caught by a template.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use template_core::tokens_within;

use crate::session::{GlobalArgs, Session, print_json};

/// List tokens standing inside a template
#[derive(Parser, Debug)]
pub struct Tokens {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Template to query
    #[arg(short, long, value_name = "ID")]
    template: u32,
}

impl Tokens {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let session = Session::open(&self.scenario, global)?;
        let template = session.template(self.template)?;
        let caught = tokens_within(template, &session.grid, &session.scenario.tokens)?;

        if session.json {
            return print_json(&caught);
        }

        if caught.is_empty() {
            println!("{}", style(format!("No tokens inside {}", template.id)).dim());
            return Ok(());
        }
        println!(
            "{} {} token(s) inside {}",
            style("Caught:").bold().green(),
            caught.len(),
            template.id
        );
        for token in caught {
            let name = if token.name.is_empty() {
                "(unnamed)"
            } else {
                token.name.as_str()
            };
            println!("  {} {}", style(token.id).yellow(), name);
        }
        Ok(())
    }
}
