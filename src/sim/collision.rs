//! Collision detection for axis-aligned rectangles
//!
//! Everything on screen is an axis-aligned box: the paddle, the (square) ball
//! and every block cell. Block hits use a swept test over the previous and
//! current ball rectangles so a fast ball cannot skip a 30 px row in one tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::BlockGrid;
use crate::consts::*;

/// Axis-aligned rectangle, origin at the top-left corner, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` at `pos`
    pub fn square(pos: DVec2, size: f64) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Interiors intersect (shared edges don't count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Closed rectangles intersect (touching edges count)
    pub fn touches(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Shrunk by `margin` on the right and bottom edges, top-left corner fixed
    pub fn inset(&self, margin: f64) -> Rect {
        Rect::new(self.x, self.y, (self.w - margin).max(0.0), (self.h - margin).max(0.0))
    }
}

/// Which side of a block the ball came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitAxis {
    /// Left or right face: horizontal velocity flips
    Horizontal,
    /// Top or bottom face: vertical velocity flips
    Vertical,
}

/// A block the ball ran into this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHit {
    pub row: usize,
    pub col: usize,
    /// Screen rectangle of the cell (without render margin)
    pub cell: Rect,
    pub axis: HitAxis,
}

/// Inclusive range of grid cells a rectangle can touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: i64,
    pub end_row: i64,
    pub start_col: i64,
    pub end_col: i64,
}

impl CellRange {
    /// Map a screen rectangle to grid rows/columns, clamped to the grid.
    ///
    /// Uses truncating integer division, so a range fully off-grid ends up with
    /// `start > end` and iterates nothing.
    pub fn covering(area: &Rect) -> Self {
        let start_row = (area.top() as i64) / BLOCK_HEIGHT as i64;
        let end_row = (area.bottom() as i64) / BLOCK_HEIGHT as i64;
        let start_col = (area.left() as i64) / BLOCK_WIDTH as i64;
        let end_col = (area.right() as i64) / BLOCK_WIDTH as i64;

        Self {
            start_row: start_row.max(0),
            end_row: end_row.min(BLOCK_ROWS as i64 - 1),
            start_col: start_col.max(0),
            end_col: end_col.min(BLOCK_COLS as i64 - 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_row > self.end_row || self.start_col > self.end_col
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start_row..=self.end_row).flat_map(move |row| {
            (self.start_col..=self.end_col).map(move |col| (row as usize, col as usize))
        })
    }
}

/// Screen rectangle of grid cell `(row, col)`
pub fn cell_rect(row: usize, col: usize) -> Rect {
    Rect::new(
        col as f64 * BLOCK_WIDTH,
        row as f64 * BLOCK_HEIGHT,
        BLOCK_WIDTH,
        BLOCK_HEIGHT,
    )
}

/// Ball left the playfield horizontally
pub fn hits_side_wall(ball_x: f64) -> bool {
    ball_x <= 0.0 || ball_x >= SCREEN_WIDTH - BALL_SIZE
}

/// Ball reached the top edge
pub fn hits_ceiling(ball_y: f64) -> bool {
    ball_y <= 0.0
}

/// Ball fell past the bottom edge
pub fn fell_out(ball_y: f64) -> bool {
    ball_y >= SCREEN_HEIGHT
}

/// Ball and paddle overlap (touching counts)
pub fn hits_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.touches(paddle)
}

/// Classify which face of `cell` the ball crossed between `prev` and `curr`.
///
/// A horizontal hit means the ball's leading vertical edge was outside the block
/// last tick and is inside now. Everything else (including corner entries and a
/// ball that was already overlapping) is treated as vertical.
pub fn classify_hit(prev: &Rect, curr: &Rect, cell: &Rect) -> HitAxis {
    let from_left = prev.right() <= cell.left() && curr.right() > cell.left();
    let from_right = prev.left() >= cell.right() && curr.left() < cell.right();
    if from_left || from_right {
        HitAxis::Horizontal
    } else {
        HitAxis::Vertical
    }
}

/// Swept block test: find the first alive cell (row-major) overlapping the
/// current ball rectangle among the cells spanned by both ball positions.
pub fn find_block_hit(blocks: &BlockGrid, prev: &Rect, curr: &Rect) -> Option<BlockHit> {
    let range = CellRange::covering(&prev.union(curr));
    range
        .cells()
        .filter(|&(row, col)| blocks.is_alive(row, col))
        .map(|(row, col)| (row, col, cell_rect(row, col)))
        .find(|(_, _, cell)| curr.overlaps(cell))
        .map(|(row, col, cell)| BlockHit {
            row,
            col,
            cell,
            axis: classify_hit(prev, curr, &cell),
        })
}
