// File: crates/linechart-core/src/path.rs
// Summary: Backend-neutral vector path (move/line/cubic/close commands).

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

/// Immutable-once-built list of path commands. A fresh path is built for
/// every frame; nothing is shared between render passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self { commands: Vec::with_capacity(n) }
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, end));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Start point of the first `MoveTo`, if any.
    pub fn start(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match *c {
            PathCommand::MoveTo(p) => Some(p),
            _ => None,
        })
    }

    pub fn cubic_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::CubicTo(..))).count()
    }

    /// Number of drawable segments (lines + cubics).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_) | PathCommand::CubicTo(..)))
            .count()
    }
}
