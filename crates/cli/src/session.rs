//! Shared command state: loaded scenario, measurement config and output mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use serde::Serialize;
use strum::IntoEnumIterator;

use template_content::{ConfigLoader, Scenario, ScenarioLoader};
use template_core::{
    MeasureConfig, MeasuredTemplate, PixelPoint, ShapeKind, SquareGrid, TemplateId,
};

/// Options shared by every command
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Measurement config (TOML); defaults apply when omitted
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Scenario opened for a single command.
pub struct Session {
    pub scenario: Scenario,
    pub config: MeasureConfig,
    /// Scenario grid with the configured measure style applied.
    pub grid: SquareGrid,
    pub json: bool,
}

impl Session {
    pub fn open(scenario_path: &Path, global: &GlobalArgs) -> Result<Self> {
        let config = match &global.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => MeasureConfig::default(),
        };
        let scenario = ScenarioLoader::load(scenario_path)?;
        let grid = scenario.configured_grid(&config);

        tracing::info!(
            scenario = %scenario.name,
            style = %config.style,
            "session opened"
        );

        Ok(Self {
            scenario,
            config,
            grid,
            json: global.json,
        })
    }

    pub fn template(&self, id: u32) -> Result<&MeasuredTemplate> {
        self.scenario.template(TemplateId(id)).ok_or_else(|| {
            anyhow!(
                "Template {} not found in scenario '{}'",
                TemplateId(id),
                self.scenario.name
            )
        })
    }

    /// The requested template, or every template when `id` is `None`.
    pub fn templates(&self, id: Option<u32>) -> Result<Vec<&MeasuredTemplate>> {
        match id {
            Some(id) => Ok(vec![self.template(id)?]),
            None => Ok(self.scenario.templates.iter().collect()),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Parses `x,y` pixel coordinates.
pub fn parse_point(value: &str) -> Result<PixelPoint, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{value}'"))?;
    let coordinate = |text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", text.trim()))
    };
    Ok(PixelPoint::new(coordinate(x)?, coordinate(y)?))
}

pub fn parse_shape(value: &str) -> Result<ShapeKind, String> {
    value.parse::<ShapeKind>().map_err(|_| {
        let known: Vec<String> = ShapeKind::iter().map(|kind| kind.to_string()).collect();
        format!("unknown shape '{value}', expected one of: {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_core::MeasureStyle;

    const SCENARIO: &str = r#"(
        name: "crossroads",
        board: (columns: 4, rows: 4),
        grid: (cell_size: 100.0, distance_per_cell: 5.0),
        templates: [
            (id: TemplateId(2), shape: Circle, origin: (x: 200.0, y: 200.0), distance: 5.0),
        ],
    )"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn config_file_overrides_scenario_style() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = write(dir.path(), "crossroads.ron", SCENARIO);
        let config = write(dir.path(), "measure.toml", "style = \"euclidean\"\n");

        let global = GlobalArgs {
            config: Some(config),
            json: true,
        };
        let session = Session::open(&scenario, &global).unwrap();
        assert_eq!(session.config.style, MeasureStyle::Euclidean);
        assert_eq!(session.grid.style, MeasureStyle::Euclidean);
        assert_eq!(session.scenario.grid.style, MeasureStyle::Pathfinder);
        assert!(session.json);

        assert_eq!(session.template(2).unwrap().distance, 5.0);
        assert!(session.template(7).is_err());
        assert_eq!(session.templates(None).unwrap().len(), 1);
    }

    #[test]
    fn defaults_apply_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = write(dir.path(), "crossroads.ron", SCENARIO);
        let global = GlobalArgs {
            config: None,
            json: false,
        };

        let session = Session::open(&scenario, &global).unwrap();
        assert_eq!(session.config, MeasureConfig::default());
        assert_eq!(session.grid, session.scenario.grid);
    }

    #[test]
    fn broken_config_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = write(dir.path(), "crossroads.ron", SCENARIO);
        let config = write(dir.path(), "broken.toml", "style = \"hexagonal\"\n");
        let global = GlobalArgs {
            config: Some(config),
            json: false,
        };

        let err = Session::open(&scenario, &global).err().unwrap();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn parses_points_with_spaces() {
        assert_eq!(parse_point("150, -25.5").unwrap(), PixelPoint::new(150.0, -25.5));
        assert!(parse_point("150").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn parses_shapes_case_insensitively() {
        assert_eq!(parse_shape("Cone").unwrap(), ShapeKind::Cone);
        let err = parse_shape("hexagon").unwrap_err();
        assert!(err.contains("circle, cone, ray, rectangle"));
    }
}
