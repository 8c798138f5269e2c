//! Path command sequence and the pattern builder.
//!
//! The outline is accumulated as an ordered list of typed commands and
//! serialized in a single final pass (see [`crate::document`]), so the
//! geometry never touches text.

use glam::{DVec2, dvec2};

use crate::layout::Layout;
use crate::params::ArcParams;

/// One SVG path command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    VerticalTo(f64),
    HorizontalTo(f64),
    /// Half-circle to `end`: equal radii, no rotation, minor arc, positive
    /// sweep. In SVG's y-down coordinate system this bulges visually upward.
    /// The sweep direction is a design constant, not a parameter.
    ArcTo { radius: f64, end: DVec2 },
}

/// Builds the command sequence for the whole pattern.
///
/// Keeps a running x cursor along the baseline: each U advances it by
/// `u_width`, each semicircle by `2 * radius`. The vertical commands never
/// move the cursor.
#[derive(Debug)]
struct PatternBuilder {
    commands: Vec<PathCommand>,
    x: f64,
    baseline: f64,
}

impl PatternBuilder {
    fn new(start_x: f64, baseline: f64) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(dvec2(start_x, baseline))],
            x: start_x,
            baseline,
        }
    }

    /// Left end cap: rise to `top`, then return to the baseline so the same
    /// vertical doubles as the first U's left leg. The path revisits the
    /// starting point; the cursor's logical position is unchanged.
    fn left_cap(&mut self, top: f64) {
        self.commands.push(PathCommand::VerticalTo(top));
        self.commands.push(PathCommand::VerticalTo(self.baseline));
    }

    /// One U: down, right by `u_width`, back up to the baseline.
    fn u_shape(&mut self, u_width: f64, u_depth: f64) {
        self.commands
            .push(PathCommand::VerticalTo(self.baseline + u_depth));
        self.x += u_width;
        self.commands.push(PathCommand::HorizontalTo(self.x));
        self.commands.push(PathCommand::VerticalTo(self.baseline));
    }

    /// Semicircle along the baseline, advancing the cursor by `2 * radius`.
    fn semicircle(&mut self, radius: f64) {
        self.x += 2.0 * radius;
        self.commands.push(PathCommand::ArcTo {
            radius,
            end: dvec2(self.x, self.baseline),
        });
    }

    /// Right end cap, then the top line joining the two cap tops back at
    /// `left_x`.
    fn right_cap(&mut self, top: f64, left_x: f64) {
        self.commands.push(PathCommand::VerticalTo(top));
        self.commands.push(PathCommand::HorizontalTo(left_x));
    }

    fn build(self) -> Vec<PathCommand> {
        self.commands
    }
}

/// Emit the full outline for `params` against `layout`:
/// `[U, semicircle] * repetitions`, one closing U, and the end caps.
pub fn pattern_commands(params: &ArcParams, layout: &Layout) -> Vec<PathCommand> {
    let left_x = params.margin;
    let mut builder = PatternBuilder::new(left_x, layout.baseline);

    builder.left_cap(layout.top);
    for _ in 0..params.repetitions {
        builder.u_shape(params.u_width, params.u_depth);
        builder.semicircle(params.radius);
    }
    builder.u_shape(params.u_width, params.u_depth);
    builder.right_cap(layout.top, left_x);

    builder.build()
}
