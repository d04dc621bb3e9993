//! Shapes module - the block template library
//!
//! Sixteen fixed templates from 1x1 up to 3x3, plus bars, rectangles and
//! the L/T/S/Z silhouettes. Each template lists its occupied cells as
//! `(row, col)` offsets from the top-left corner of its bounding box,
//! sorted row-major. Templates are static; generated blocks reference one.

use block_blitz_types::BlockColor;

/// Offset of a single occupied cell relative to the bounding-box corner
pub type CellOffset = (u8, u8);

/// A fixed block silhouette from the template library
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub name: &'static str,
    /// Bounding-box height in rows
    pub rows: u8,
    /// Bounding-box width in columns
    pub cols: u8,
    /// Occupied cells, row-major order
    pub cells: &'static [CellOffset],
}

impl ShapeTemplate {
    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// The full template library. `TEMPLATES[0]` is the 1x1 dot, which is also
/// the generator's guaranteed-legal fallback.
pub const TEMPLATES: [ShapeTemplate; 16] = [
    ShapeTemplate {
        name: "dot",
        rows: 1,
        cols: 1,
        cells: &[(0, 0)],
    },
    ShapeTemplate {
        name: "bar2_h",
        rows: 1,
        cols: 2,
        cells: &[(0, 0), (0, 1)],
    },
    ShapeTemplate {
        name: "bar2_v",
        rows: 2,
        cols: 1,
        cells: &[(0, 0), (1, 0)],
    },
    ShapeTemplate {
        name: "bar3_h",
        rows: 1,
        cols: 3,
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    ShapeTemplate {
        name: "bar3_v",
        rows: 3,
        cols: 1,
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    ShapeTemplate {
        name: "square2",
        rows: 2,
        cols: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    ShapeTemplate {
        name: "square3",
        rows: 3,
        cols: 3,
        cells: &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ],
    },
    ShapeTemplate {
        name: "ell",
        rows: 3,
        cols: 2,
        cells: &[(0, 0), (1, 0), (2, 0), (2, 1)],
    },
    ShapeTemplate {
        name: "ell_rev",
        rows: 3,
        cols: 2,
        cells: &[(0, 1), (1, 1), (2, 0), (2, 1)],
    },
    ShapeTemplate {
        name: "tee",
        rows: 2,
        cols: 3,
        cells: &[(0, 0), (0, 1), (0, 2), (1, 1)],
    },
    ShapeTemplate {
        name: "ess",
        rows: 2,
        cols: 3,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1)],
    },
    ShapeTemplate {
        name: "zee",
        rows: 2,
        cols: 3,
        cells: &[(0, 0), (0, 1), (1, 1), (1, 2)],
    },
    ShapeTemplate {
        name: "bar4_h",
        rows: 1,
        cols: 4,
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3)],
    },
    ShapeTemplate {
        name: "bar4_v",
        rows: 4,
        cols: 1,
        cells: &[(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    ShapeTemplate {
        name: "rect2x3",
        rows: 2,
        cols: 3,
        cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
    },
    ShapeTemplate {
        name: "rect3x2",
        rows: 3,
        cols: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)],
    },
];

/// Index of the fallback template in [`TEMPLATES`]
pub const FALLBACK_TEMPLATE: usize = 0;

/// A generated block option - a template instance with color and identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShape {
    /// Identifier unique among currently offered options
    pub id: u32,
    pub template: &'static ShapeTemplate,
    pub color: BlockColor,
}

impl BlockShape {
    pub fn new(id: u32, template: &'static ShapeTemplate, color: BlockColor) -> Self {
        Self {
            id,
            template,
            color,
        }
    }

    /// Occupied cell offsets from the top-left anchor
    pub fn offsets(&self) -> &'static [CellOffset] {
        self.template.cells
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.template.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_library_size() {
        assert_eq!(TEMPLATES.len(), 16);
    }

    #[test]
    fn test_templates_nonempty_and_within_bounds() {
        for template in &TEMPLATES {
            assert!(!template.cells.is_empty(), "{} has no cells", template.name);
            for &(dr, dc) in template.cells {
                assert!(dr < template.rows, "{} offset row out of box", template.name);
                assert!(dc < template.cols, "{} offset col out of box", template.name);
            }
        }
    }

    #[test]
    fn test_templates_tight_bounding_boxes() {
        for template in &TEMPLATES {
            let max_row = template.cells.iter().map(|&(dr, _)| dr).max().unwrap();
            let max_col = template.cells.iter().map(|&(_, dc)| dc).max().unwrap();
            assert_eq!(max_row + 1, template.rows, "{} rows not tight", template.name);
            assert_eq!(max_col + 1, template.cols, "{} cols not tight", template.name);
        }
    }

    #[test]
    fn test_fallback_is_single_cell() {
        let fallback = &TEMPLATES[FALLBACK_TEMPLATE];
        assert_eq!(fallback.cell_count(), 1);
        assert_eq!((fallback.rows, fallback.cols), (1, 1));
    }

    #[test]
    fn test_cell_counts() {
        let counts: Vec<usize> = TEMPLATES.iter().map(|t| t.cell_count()).collect();
        assert_eq!(
            counts,
            vec![1, 2, 2, 3, 3, 4, 9, 4, 4, 4, 4, 4, 4, 4, 6, 6]
        );
    }
}
