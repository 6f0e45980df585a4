//! Preview a template dragged out between two points.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use template_core::{
    Cell, MeasuredTemplate, PixelPoint, ShapeKind, TemplateId, TemplatePlacement, Token,
    highlighted_cells, tokens_within,
};

use crate::session::{GlobalArgs, Session, parse_point, parse_shape, print_json};

/// Preview a template dragged out between two points
#[derive(Parser, Debug)]
pub struct Place {
    /// Scenario file (RON) providing the grid and tokens
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Template shape (circle, cone, ray, rectangle)
    #[arg(short, long, value_parser = parse_shape, default_value = "circle")]
    shape: ShapeKind,

    /// Where the pointer went down, `x,y` pixels
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    from: PixelPoint,

    /// Where the pointer was released, `x,y` pixels
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    to: PixelPoint,

    /// Identifier for the new template (next free id when omitted)
    #[arg(long, value_name = "ID")]
    id: Option<u32>,
}

#[derive(Serialize)]
struct Preview<'a> {
    template: &'a MeasuredTemplate,
    cells: &'a [Cell],
    tokens: &'a [&'a Token],
}

impl Place {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let session = Session::open(&self.scenario, global)?;
        let id = self.id.map(TemplateId).unwrap_or_else(|| {
            let last = session
                .scenario
                .templates
                .iter()
                .map(|template| template.id.0)
                .max()
                .unwrap_or(0);
            TemplateId(last + 1)
        });

        let mut placement =
            TemplatePlacement::begin(id, self.shape, self.from, &session.grid, &session.config)?;
        placement.drag_to(self.to, &session.grid);
        let template = placement.finish();

        let cells = highlighted_cells(&template, &session.grid)?;
        let caught = tokens_within(&template, &session.grid, &session.scenario.tokens)?;

        if session.json {
            return print_json(&Preview {
                template: &template,
                cells: &cells,
                tokens: &caught,
            });
        }

        println!(
            "{} {} {} at {}",
            style("Placed:").bold().green(),
            template.id,
            template.shape.kind(),
            template.origin
        );
        println!("  direction: {}°", template.direction);
        println!("  distance:  {}", template.distance);
        println!("  cells:     {}", cells.len());
        for token in caught {
            println!("  caught:    {} {}", style(token.id).yellow(), token.name);
        }
        Ok(())
    }
}
