//! Draw highlighted cells for placed templates.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use template_core::{GridPosition, ShapeKind, TemplateId, highlight_grid, tokens_within};

use crate::board::TextBoard;
use crate::session::{GlobalArgs, Session, print_json};

/// Draw the cells highlighted by placed templates
#[derive(Parser, Debug)]
pub struct Highlight {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Only highlight this template (all templates when omitted)
    #[arg(short, long, value_name = "ID")]
    template: Option<u32>,
}

#[derive(Serialize)]
struct TemplateHighlight<'a> {
    template: TemplateId,
    kind: ShapeKind,
    cells: &'a [GridPosition],
}

impl Highlight {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let session = Session::open(&self.scenario, global)?;
        let templates = session.templates(self.template)?;

        let mut board = TextBoard::new(session.scenario.board);
        let mut caught = HashSet::new();
        for template in &templates {
            highlight_grid(&mut board, template, &session.grid)?;
            caught.extend(
                tokens_within(template, &session.grid, &session.scenario.tokens)?
                    .into_iter()
                    .map(|token| token.id),
            );
        }

        if session.json {
            let highlights: Vec<TemplateHighlight<'_>> = templates
                .iter()
                .map(|template| TemplateHighlight {
                    template: template.id,
                    kind: template.kind(),
                    cells: board.painted(template.id),
                })
                .collect();
            return print_json(&highlights);
        }

        println!(
            "{} {} ({} measurement)",
            style("Scenario:").bold().cyan(),
            session.scenario.name,
            session.config.style
        );
        for template in &templates {
            let cells = board.painted(template.id).len();
            let note = if template.kind().is_area() {
                format!("{cells} cells")
            } else {
                "not grid highlighted".to_string()
            };
            println!(
                "  {} {} {}: {}",
                style(template.id).yellow(),
                template.kind(),
                template.distance,
                note
            );
        }
        println!();
        println!(
            "{}",
            board.render(&session.grid, &session.scenario.tokens, &caught)
        );
        Ok(())
    }
}
