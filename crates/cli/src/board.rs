//! Plain-text board renderer.

use std::collections::{BTreeMap, HashSet};

use console::style;
use template_content::BoardSize;
use template_core::{
    Cell, GridOracle, GridPosition, HighlightCanvas, HighlightStyle, PixelPoint, TemplateId,
    Token, TokenId,
};

const EMPTY: char = '.';
const HIGHLIGHT: char = '#';

/// Text canvas holding one highlight layer per template.
pub struct TextBoard {
    size: BoardSize,
    layers: BTreeMap<TemplateId, Vec<GridPosition>>,
}

impl TextBoard {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            layers: BTreeMap::new(),
        }
    }

    pub fn painted(&self, template: TemplateId) -> &[GridPosition] {
        self.layers
            .get(&template)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Renders the board, one line per row.
    ///
    /// Highlighted cells show `#`. Tokens show the first letter of their name,
    /// upper-cased when listed in `caught`.
    pub fn render<G>(&self, grid: &G, tokens: &[Token], caught: &HashSet<TokenId>) -> String
    where
        G: GridOracle + ?Sized,
    {
        let columns = self.size.columns as usize;
        let rows = self.size.rows as usize;
        let mut glyphs = vec![vec![EMPTY; columns]; rows];

        let mut put = |col: i64, row: i64, glyph: char| {
            let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
                return;
            };
            if let Some(slot) = glyphs.get_mut(row).and_then(|line| line.get_mut(col)) {
                *slot = glyph;
            }
        };

        for position in self.layers.values().flatten() {
            put(i64::from(position.col), i64::from(position.row), HIGHLIGHT);
        }

        let half = grid.cell_size() / 2.0;
        for token in tokens {
            let initial = token.name.chars().next().unwrap_or('t');
            let glyph = if caught.contains(&token.id) {
                initial.to_ascii_uppercase()
            } else {
                initial.to_ascii_lowercase()
            };
            let anchor = grid.pixel_to_grid(PixelPoint::new(token.x + half, token.y + half));
            let footprint = token.footprint(grid.cell_size());
            // Only the part of the footprint that lands on the board is drawn.
            let visible = |start: i32, span: i64, limit: u32| {
                let start = i64::from(start);
                start.max(0)..start.saturating_add(span).min(i64::from(limit))
            };
            for row in visible(anchor.row, footprint.height, self.size.rows) {
                for col in visible(anchor.col, footprint.width, self.size.columns) {
                    put(col, row, glyph);
                }
            }
        }

        glyphs
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|glyph| match glyph {
                        HIGHLIGHT => style(glyph).red().to_string(),
                        EMPTY => style(glyph).dim().to_string(),
                        _ => style(glyph).bold().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HighlightCanvas for TextBoard {
    fn clear(&mut self, template: TemplateId) {
        self.layers.remove(&template);
    }

    fn paint(&mut self, template: TemplateId, cell: &Cell, _style: HighlightStyle) {
        self.layers.entry(template).or_default().push(cell.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_core::{MeasuredTemplate, SquareGrid, highlight_grid};

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    #[test]
    fn renders_highlight_and_tokens() {
        let grid = SquareGrid::new(100.0, 5.0).unwrap();
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(150.0, 150.0), 5.0);
        let tokens = vec![
            Token::new(TokenId(1), 200.0, 200.0, 100.0, 100.0).with_name("orc"),
            Token::new(TokenId(2), 400.0, 0.0, 100.0, 100.0).with_name("elf"),
        ];
        let caught = HashSet::from([TokenId(1)]);

        let mut board = TextBoard::new(BoardSize::new(5, 3));
        assert_eq!(highlight_grid(&mut board, &template, &grid).unwrap(), 9);

        let text = plain(&board.render(&grid, &tokens, &caught));
        assert_eq!(text, "# # # . e\n# # # . .\n# # O . .");
    }

    #[test]
    fn huge_tokens_are_clipped_to_the_board() {
        let grid = SquareGrid::new(100.0, 5.0).unwrap();
        let tokens = vec![
            Token::new(TokenId(1), -100.0, 100.0, 1e30, 1e30).with_name("dragon"),
            Token::new(TokenId(2), 1e30, 1e30, 100.0, 100.0).with_name("lost"),
        ];
        let board = TextBoard::new(BoardSize::new(3, 2));

        let text = plain(&board.render(&grid, &tokens, &HashSet::new()));
        assert_eq!(text, ". . .\nd d d");
    }

    #[test]
    fn clear_drops_only_one_layer() {
        let grid = SquareGrid::new(100.0, 5.0).unwrap();
        let a = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(50.0, 50.0), 0.0);
        let b = MeasuredTemplate::circle(TemplateId(2), PixelPoint::new(150.0, 50.0), 0.0);
        let mut board = TextBoard::new(BoardSize::new(2, 1));
        highlight_grid(&mut board, &a, &grid).unwrap();
        highlight_grid(&mut board, &b, &grid).unwrap();

        board.clear(TemplateId(1));
        assert!(board.painted(TemplateId(1)).is_empty());
        assert_eq!(board.painted(TemplateId(2)), &[GridPosition::new(1, 0)]);
    }

    #[test]
    fn cells_off_the_board_are_ignored() {
        let grid = SquareGrid::new(100.0, 5.0).unwrap();
        let template = MeasuredTemplate::circle(TemplateId(1), PixelPoint::new(50.0, 50.0), 5.0);
        let mut board = TextBoard::new(BoardSize::new(2, 2));
        highlight_grid(&mut board, &template, &grid).unwrap();

        let text = plain(&board.render(&grid, &[], &HashSet::new()));
        assert_eq!(text, "# #\n# #");
    }
}
