//! # Responsive Grid Layout
//!
//! Implementation of the responsive grid panel algorithm.
//!
//! ## Overview
//!
//! The panel packs uniformly-sized cells into the available area:
//! - Every cell is sized to the largest desired width/height among the
//!   visible children
//! - The column count is the largest number of cells (plus gaps) that fits
//!   the available width; the row count is derived the same way from the
//!   available height
//! - When one axis is unconstrained (the panel lives in a scrolling
//!   container) the count along that axis is instead derived from the child
//!   count, so content grows along the scroll axis
//! - Children are placed row-major: left to right, then top to bottom
//!
//! Everything here is a total function over the per-pass inputs. Derived
//! state travels from `measure` to `arrange` as an explicit [`GridMetrics`]
//! value; nothing persists between passes.

use tracing::{debug, trace};

use crate::{ChildItem, LayoutError, Rect, ScrollDirection, Size};

// ==================== Configuration ====================

/// Host-facing configuration for a responsive grid panel.
#[derive(Debug, Clone, Default)]
pub struct GridConfig {
    /// Minimum gap between adjacent columns.
    pub column_gap: f32,
    /// Minimum gap between adjacent rows.
    pub row_gap: f32,
    /// Reserved: fixed column width override. Declared for host property
    /// parity; the solver does not apply it.
    pub auto_columns: Option<f32>,
    /// Reserved: fixed row height override. Declared for host property
    /// parity; the solver does not apply it.
    pub auto_rows: Option<f32>,
}

impl GridConfig {
    /// Configuration with the given gaps and no sizing overrides.
    pub fn with_gaps(column_gap: f32, row_gap: f32) -> Self {
        Self {
            column_gap,
            row_gap,
            ..Self::default()
        }
    }

    /// Check that the configuration is usable.
    ///
    /// Gaps must be finite and non-negative; sizing overrides, when present,
    /// must be finite and positive. The layout functions themselves never
    /// fail, so this is the place for a host to surface a misconfiguration.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.column_gap.is_finite() || self.column_gap < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "column_gap must be finite and non-negative, got {}",
                self.column_gap
            )));
        }
        if !self.row_gap.is_finite() || self.row_gap < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "row_gap must be finite and non-negative, got {}",
                self.row_gap
            )));
        }
        if let Some(width) = self.auto_columns {
            if !width.is_finite() || width <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "auto_columns must be finite and positive, got {width}"
                )));
            }
        }
        if let Some(height) = self.auto_rows {
            if !height.is_finite() || height <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "auto_rows must be finite and positive, got {height}"
                )));
            }
        }
        Ok(())
    }
}

// ==================== Per-pass state ====================

/// Grid shape derived during measure, consumed by arrange.
///
/// `columns` and `rows` are always at least 1, even with no visible
/// children, so downstream division is safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Number of columns in the grid.
    pub columns: usize,
    /// Number of rows in the grid.
    pub rows: usize,
    /// Largest desired width among visible children.
    pub max_child_width: f32,
    /// Largest desired height among visible children.
    pub max_child_height: f32,
    /// Which axis, if any, was unconstrained this pass.
    pub scroll: ScrollDirection,
}

/// Everything a measure pass produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureResult {
    /// The size the panel reports to its host.
    pub desired: Size,
    /// The constraint each visible child should be measured against.
    /// Infinite along an unconstrained axis, meaning "size to desired".
    pub cell_constraint: Size,
    /// Grid shape to thread into the arrange pass.
    pub metrics: GridMetrics,
}

// ==================== Shape solving ====================

/// Width of `count` cells plus the gaps between them.
fn span(count: usize, cell: f32, gap: f32) -> f32 {
    count as f32 * cell + count.saturating_sub(1) as f32 * gap
}

/// Largest desired width/height among visible children, plus how many
/// children are visible. All zero when nothing is visible.
fn visible_stats(children: &[ChildItem]) -> (f32, f32, usize) {
    let mut max_width = 0.0f32;
    let mut max_height = 0.0f32;
    let mut visible = 0usize;

    for child in children.iter().filter(|c| c.visible) {
        max_width = max_width.max(child.desired.width);
        max_height = max_height.max(child.desired.height);
        visible += 1;
    }

    (max_width, max_height, visible)
}

/// How many columns of `max_child_width` cells fit in `available_width`.
///
/// Greedy shrink: start from `floor(available / cell)` and decrement while
/// the cells plus the gaps between them overflow. One column is always
/// accepted, even when it alone overflows, since it cannot shrink further.
///
/// A degenerate zero (or negative/NaN) cell width is treated as 1 so the
/// initial estimate stays finite. An unconstrained axis yields 1; the caller
/// resolves that axis from the child count instead.
pub fn column_count(available_width: f32, max_child_width: f32, column_gap: f32) -> usize {
    if !available_width.is_finite() {
        return 1;
    }
    let cell = if max_child_width > 0.0 {
        max_child_width
    } else {
        1.0
    };

    let mut columns = ((available_width / cell).floor() as usize).max(1);
    while columns > 1 && span(columns, cell, column_gap) > available_width {
        columns -= 1;
    }
    columns
}

/// How many rows of `max_child_height` cells fit in `available_height`.
///
/// Symmetric to [`column_count`]; only meaningful when the vertical axis is
/// bounded.
pub fn row_count(available_height: f32, max_child_height: f32, row_gap: f32) -> usize {
    if !available_height.is_finite() {
        return 1;
    }
    let cell = if max_child_height > 0.0 {
        max_child_height
    } else {
        1.0
    };

    let mut rows = ((available_height / cell).floor() as usize).max(1);
    while rows > 1 && span(rows, cell, row_gap) > available_height {
        rows -= 1;
    }
    rows
}

/// Resolve the grid shape for one pass.
///
/// Both counts are first computed from the available space. An
/// unconstrained axis then gets its count recomputed from the child count,
/// packing all children into the rows/columns the bounded axis allows.
///
/// When both axes are bounded the two counts stand independently. They are
/// not reconciled against the child count, so a tightly-sized host can get a
/// grid with spare or missing cells. Joint reconciliation is future work.
fn solve_grid(
    available: Size,
    max_child_width: f32,
    max_child_height: f32,
    visible_count: usize,
    config: &GridConfig,
) -> (usize, usize) {
    // An empty panel is a 1x1 grid, never 0x0.
    if visible_count == 0 {
        return (1, 1);
    }

    let mut columns = column_count(available.width, max_child_width, config.column_gap);
    let mut rows = row_count(available.height, max_child_height, config.row_gap);

    if available.width.is_infinite() {
        columns = visible_count.div_ceil(rows.max(1)).max(1);
    }
    if available.height.is_infinite() {
        rows = visible_count.div_ceil(columns.max(1)).max(1);
    }

    (columns, rows)
}

// ==================== Measure ====================

/// Measure pass: resolve the grid shape and report a desired size.
///
/// The returned [`MeasureResult::cell_constraint`] is the size each visible
/// child should be measured against by the host; along an unconstrained axis
/// it is infinite, the conventional "size to desired" signal. The desired
/// size is the tight bounding box of the grid: max child size times the
/// count, plus the gaps between cells.
pub fn measure(available: Size, config: &GridConfig, children: &[ChildItem]) -> MeasureResult {
    let scroll = ScrollDirection::from_available(available);
    let (max_child_width, max_child_height, visible) = visible_stats(children);
    let (columns, rows) = solve_grid(available, max_child_width, max_child_height, visible, config);

    debug!(
        available_width = available.width,
        available_height = available.height,
        visible,
        columns,
        rows,
        ?scroll,
        "Measured responsive grid"
    );

    let cell_constraint = Size::new(
        (available.width - config.column_gap * (columns - 1) as f32) / columns as f32,
        (available.height - config.row_gap * (rows - 1) as f32) / rows as f32,
    );

    let desired = Size::new(
        max_child_width * columns as f32 + config.column_gap * (columns - 1) as f32,
        max_child_height * rows as f32 + config.row_gap * (rows - 1) as f32,
    );

    MeasureResult {
        desired,
        cell_constraint,
        metrics: GridMetrics {
            columns,
            rows,
            max_child_width,
            max_child_height,
            scroll,
        },
    }
}

// ==================== Arrange ====================

/// Placement rectangles for the first `visible_count` visible children,
/// row-major: child `i` occupies grid cell `(i % columns, i / columns)`.
///
/// Along a scrolling axis the cell uses the natural max-child size; dividing
/// an infinite final span would be meaningless. Along a bounded axis the
/// final extent is split evenly between the cells after reserving gaps.
pub fn placements(
    final_size: Size,
    config: &GridConfig,
    metrics: &GridMetrics,
    visible_count: usize,
) -> Vec<Rect> {
    let columns = metrics.columns.max(1);
    let rows = metrics.rows.max(1);

    let cell_width = if metrics.scroll == ScrollDirection::Horizontal {
        metrics.max_child_width
    } else {
        (final_size.width - config.column_gap * (columns - 1) as f32) / columns as f32
    };
    let cell_height = if metrics.scroll == ScrollDirection::Vertical {
        metrics.max_child_height
    } else {
        (final_size.height - config.row_gap * (rows - 1) as f32) / rows as f32
    };

    let mut rects = Vec::with_capacity(visible_count);
    for index in 0..visible_count {
        let column = index % columns;
        let row = index / columns;
        let rect = Rect::new(
            column as f32 * (cell_width + config.column_gap),
            row as f32 * (cell_height + config.row_gap),
            cell_width,
            cell_height,
        );
        trace!(index, column, row, ?rect, "Placed grid cell");
        rects.push(rect);
    }
    rects
}

/// Arrange pass: assign placement rectangles to the visible children.
///
/// Children are visited in traversal order; invisible children are skipped
/// and keep their previous rect. Returns the final size unchanged.
pub fn arrange(
    final_size: Size,
    config: &GridConfig,
    metrics: &GridMetrics,
    children: &mut [ChildItem],
) -> Size {
    let visible = children.iter().filter(|c| c.visible).count();
    let rects = placements(final_size, config, metrics, visible);

    let mut next = rects.into_iter();
    for child in children.iter_mut().filter(|c| c.visible) {
        if let Some(rect) = next.next() {
            child.rect = rect;
        }
    }

    debug!(
        final_width = final_size.width,
        final_height = final_size.height,
        columns = metrics.columns,
        rows = metrics.rows,
        visible,
        "Arranged responsive grid"
    );

    final_size
}
