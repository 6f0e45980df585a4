//! Measure the distance between two points on a scenario grid.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use template_core::{GridOracle, MeasureStyle, PixelPoint, grid_steps, measure};

use crate::session::{GlobalArgs, Session, parse_point, print_json};

/// Measure the distance between two pixel points
#[derive(Parser, Debug)]
pub struct Measure {
    /// Scenario file (RON) providing the grid
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Start point as `x,y` pixels
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    from: PixelPoint,

    /// End point as `x,y` pixels
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    to: PixelPoint,
}

#[derive(Serialize)]
struct Measurement {
    from: PixelPoint,
    to: PixelPoint,
    style: MeasureStyle,
    distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<u64>,
}

impl Measure {
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        let session = Session::open(&self.scenario, global)?;
        let grid = &session.grid;
        let distance = measure(self.from, self.to, grid)?;
        let steps = grid.style.is_grid_stepped().then(|| {
            grid_steps(
                self.to.x - self.from.x,
                self.to.y - self.from.y,
                grid.cell_size(),
            )
        });

        if session.json {
            return print_json(&Measurement {
                from: self.from,
                to: self.to,
                style: grid.style,
                distance,
                steps,
            });
        }

        print!(
            "{} {} -> {}: {}",
            style("Distance:").bold().cyan(),
            self.from,
            self.to,
            style(distance).bold()
        );
        match steps {
            Some(steps) => println!(" ({steps} steps)"),
            None => println!(),
        }
        Ok(())
    }
}
