//! # PanelKit Layout
//!
//! Responsive grid layout engine for PanelKit panels.
//! Computes how many rows and columns of uniformly-sized cells fit in an
//! available area, then places children into the resulting grid.
//!
//! ## Design Goals
//!
//! 1. **Two-phase protocol**: pure `measure` and `arrange` functions that a
//!    host toolkit adapts to its own layout pass
//! 2. **Scroll awareness**: an infinite available axis means the panel lives
//!    in a scrolling container and may grow along that axis
//! 3. **No retained state**: everything derived during measure is recomputed
//!    each pass and threaded explicitly into arrange
//! 4. **Total functions**: pathological input degrades to a 1x1 grid instead
//!    of faulting

pub mod grid;

pub use grid::{arrange, measure, placements, GridConfig, GridMetrics, MeasureResult};

use thiserror::Error;

/// Errors that can occur in layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// A 2D size. Either dimension may be `f32::INFINITY`, which signals an
/// unconstrained axis (the panel is hosted in a container that scrolls
/// along that axis).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Whether both dimensions are finite (a fixed-size, non-scrolling host).
    pub fn is_bounded(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// A 2D rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Which axis of the available area is unconstrained for this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Both axes are bounded; no scrolling host.
    #[default]
    None,
    /// The width is infinite; content may grow horizontally.
    Horizontal,
    /// The height is infinite; content may grow vertically.
    Vertical,
}

impl ScrollDirection {
    /// Classify an available size.
    ///
    /// The height is checked first, so `Vertical` wins when both axes are
    /// reported as infinite. Only one axis is ever treated as unconstrained
    /// in a single pass.
    pub fn from_available(available: Size) -> Self {
        if available.height.is_infinite() {
            Self::Vertical
        } else if available.width.is_infinite() {
            Self::Horizontal
        } else {
            Self::None
        }
    }
}

/// Per-child snapshot owned by the host framework.
///
/// The engine reads `visible` and `desired` during measure and writes `rect`
/// once during arrange. Children the host reports as invisible contribute
/// nothing to measurement and keep whatever rect they already had.
#[derive(Debug, Clone)]
pub struct ChildItem {
    /// Whether the child participates in layout this pass.
    pub visible: bool,
    /// The size the child reported during its own measurement.
    pub desired: Size,
    /// Placement assigned by the most recent arrange.
    pub rect: Rect,
}

impl ChildItem {
    /// A visible child with the given desired size.
    pub fn new(desired: Size) -> Self {
        Self {
            visible: true,
            desired,
            rect: Rect::zero(),
        }
    }

    /// A child excluded from layout.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            desired: Size::zero(),
            rect: Rect::zero(),
        }
    }
}
