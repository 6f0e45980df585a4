//! Board scenario: the snapshot a host hands to the measurement core.

use std::collections::HashSet;

use template_core::{
    GridError, GridOracle, MeasureConfig, MeasuredTemplate, SquareGrid, TemplateError, TemplateId,
    Token, TokenId,
};

/// Visible board extent in cells, used by hosts that draw the whole board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSize {
    pub columns: u32,
    pub rows: u32,
}

impl BoardSize {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }
}

/// A board with its grid, placed templates and current tokens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub board: BoardSize,
    pub grid: SquareGrid,
    #[cfg_attr(feature = "serde", serde(default))]
    pub templates: Vec<MeasuredTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokens: Vec<Token>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, board: BoardSize, grid: SquareGrid) -> Self {
        Self {
            name: name.into(),
            board,
            grid,
            templates: Vec::new(),
            tokens: Vec::new(),
        }
    }

    pub fn template(&self, id: TemplateId) -> Option<&MeasuredTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Grid with the configured measure style applied.
    ///
    /// The measure style is a host setting, so it overrides whatever the
    /// scenario file recorded.
    pub fn configured_grid(&self, config: &MeasureConfig) -> SquareGrid {
        self.grid.with_style(config.style)
    }

    /// Checks grid preconditions, template geometry and identifier uniqueness.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.grid.validate()?;

        let mut template_ids = HashSet::new();
        for template in &self.templates {
            template.validate()?;
            if !template_ids.insert(template.id) {
                return Err(ScenarioError::DuplicateTemplate(template.id));
            }
        }

        let mut token_ids = HashSet::new();
        for token in &self.tokens {
            if !token_ids.insert(token.id) {
                return Err(ScenarioError::DuplicateToken(token.id));
            }
        }

        tracing::debug!(
            scenario = %self.name,
            templates = self.templates.len(),
            tokens = self.tokens.len(),
            "scenario validated"
        );
        Ok(())
    }
}

/// Scenario contents that the measurement core cannot work with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid template: {0}")]
    Template(#[from] TemplateError),

    #[error("template id {0} is used more than once")]
    DuplicateTemplate(TemplateId),

    #[error("token id {0} is used more than once")]
    DuplicateToken(TokenId),
}
