//! Scenario loader.
//!
//! Loads a board snapshot (grid, templates, tokens) from a RON file.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     name: "ambush",
    ///     board: (columns: 10, rows: 8),
    ///     grid: (cell_size: 100.0, distance_per_cell: 5.0),
    ///     templates: [
    ///         (
    ///             id: TemplateId(1),
    ///             shape: Cone(half_angle: 45.0),
    ///             origin: (x: 200.0, y: 200.0),
    ///             distance: 15.0,
    ///         ),
    ///     ],
    ///     tokens: [
    ///         (id: TokenId(1), name: "goblin", x: 300.0, y: 200.0, width: 100.0, height: 100.0),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario {}: {}", path.display(), e))?;

        tracing::info!(
            scenario = %scenario.name,
            path = %path.display(),
            templates = scenario.templates.len(),
            tokens = scenario.tokens.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.validate()?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_core::{MeasureStyle, TemplateId, TemplateShape};

    const MINIMAL: &str = r#"(
        board: (columns: 4, rows: 4),
        grid: (cell_size: 100.0, distance_per_cell: 5.0),
        templates: [
            (id: TemplateId(3), shape: Circle, origin: (x: 150.0, y: 150.0), distance: 5.0),
        ],
    )"#;

    #[test]
    fn parses_minimal_scenario_with_defaults() {
        let scenario = ScenarioLoader::parse(MINIMAL).unwrap();
        assert_eq!(scenario.name, "");
        assert_eq!(scenario.grid.style, MeasureStyle::Pathfinder);
        assert!(scenario.tokens.is_empty());

        let template = scenario.template(TemplateId(3)).unwrap();
        assert_eq!(template.shape, TemplateShape::Circle);
        assert_eq!(template.direction, 0.0);
    }

    #[test]
    fn rejects_invalid_grid() {
        let broken = MINIMAL.replace("cell_size: 100.0", "cell_size: -1.0");
        let err = ScenarioLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("cell size"), "{err}");
    }
}
