//! Warped background grid behind the hero section.
//!
//! Lines sit every `gap` pixels and sway with time; the pointer pulls nearby
//! lines towards itself. A radial vignette darkens the edges.

use crate::constants::{
    GRID_BACKGROUND, GRID_HORIZONTAL_AMPLITUDE, GRID_LINE_COLOR, GRID_POINTER_PULL,
    GRID_VERTICAL_AMPLITUDE, GRID_VIGNETTE_ALPHA, GRID_WAVE_FREQUENCY,
};
use crate::settings::GridSettings;

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Vertical,
    Horizontal,
}

/// A line at its rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub kind: LineKind,
    /// x for vertical lines, y for horizontal lines
    pub position: f32,
}

/// Radial gradient from the canvas centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    pub center: (f32, f32),
    pub radius: f32,
    /// Opacity of black at the outer stop (inner stop is transparent)
    pub outer_alpha: f32,
}

/// Canvas 2D operations used to paint the grid.
pub trait GridPainter {
    fn fill_background(&mut self, color: &str, width: f32, height: f32);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: &str, line_width: f32);
    fn fill_vignette(&mut self, vignette: &Vignette, width: f32, height: f32);
}

/// Grid geometry for the current canvas size.
#[derive(Debug, Clone)]
pub struct CyberGrid {
    gap: f32,
    width: f32,
    height: f32,
    lines: Vec<GridLine>,
}

impl CyberGrid {
    pub fn new(settings: &GridSettings, width: f32, height: f32) -> Self {
        let mut grid = Self {
            gap: settings.gap,
            width: 0.0,
            height: 0.0,
            lines: Vec::new(),
        };
        grid.resize(width, height);
        grid
    }

    /// Match the canvas to the window and rebuild the lines.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.lines.clear();

        if self.gap <= 0.0 {
            return;
        }
        let columns = (self.width / self.gap).floor() as usize;
        let rows = (self.height / self.gap).floor() as usize;

        self.lines.extend((0..=columns).map(|i| GridLine {
            kind: LineKind::Vertical,
            position: i as f32 * self.gap,
        }));
        self.lines.extend((0..=rows).map(|i| GridLine {
            kind: LineKind::Horizontal,
            position: i as f32 * self.gap,
        }));
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Displaced position of `line` at time `t` (seconds) for a pointer at `pointer`.
    pub fn warp(&self, line: &GridLine, t: f32, pointer: (f32, f32)) -> f32 {
        let p = line.position;
        match line.kind {
            LineKind::Vertical => {
                let pull = (p - pointer.0) * GRID_POINTER_PULL;
                p + (t + p * GRID_WAVE_FREQUENCY).sin() * GRID_VERTICAL_AMPLITUDE - pull
            }
            LineKind::Horizontal => {
                let pull = (p - pointer.1) * GRID_POINTER_PULL;
                p + (t + p * GRID_WAVE_FREQUENCY).cos() * GRID_HORIZONTAL_AMPLITUDE - pull
            }
        }
    }

    pub fn vignette(&self) -> Vignette {
        Vignette {
            center: (self.width / 2.0, self.height / 2.0),
            radius: self.width,
            outer_alpha: GRID_VIGNETTE_ALPHA,
        }
    }

    /// Paint one frame.
    pub fn draw(&self, painter: &mut impl GridPainter, t: f32, pointer: (f32, f32)) {
        crate::profile_scope!("grid_draw");

        painter.fill_background(GRID_BACKGROUND, self.width, self.height);
        for line in &self.lines {
            let at = self.warp(line, t, pointer);
            let (from, to) = match line.kind {
                LineKind::Vertical => ((at, 0.0), (at, self.height)),
                LineKind::Horizontal => ((0.0, at), (self.width, at)),
            };
            painter.stroke_line(from, to, GRID_LINE_COLOR, 1.0);
        }
        painter.fill_vignette(&self.vignette(), self.width, self.height);
    }
}
