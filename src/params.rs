//! Shape parameters for the arc pattern.

use std::fmt;

/// Stroke line-cap style, serialized as the SVG `stroke-linecap` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// Stroke line-join style, serialized as the SVG `stroke-linejoin` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        })
    }
}

/// Inputs to one pattern build. Immutable once constructed.
///
/// The pattern is `[U, semicircle]` repeated `repetitions` times, closed by
/// one extra U, with a vertical extension at each end rising `ext_above`
/// units over the semicircle apex and a horizontal line joining the two
/// extension tops.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcParams {
    /// Number of `[U, semicircle]` repetitions. Must be at least 1.
    pub repetitions: u32,
    /// Radius of each semicircle.
    pub radius: f64,
    /// Horizontal span of each U-shape.
    pub u_width: f64,
    /// Depth of each U-shape below the baseline.
    pub u_depth: f64,
    /// How far above the semicircle apex the end extensions reach. Must be
    /// positive.
    pub ext_above: f64,
    /// Stroke color of the outline.
    pub stroke: String,
    /// Stroke width of the outline.
    pub stroke_width: f64,
    /// Blank border on every side of the canvas.
    pub margin: f64,
    pub linecap: LineCap,
    pub linejoin: LineJoin,
    /// Fill color of the background rectangle.
    pub background: String,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            repetitions: 1,
            radius: 24.0,
            u_width: 16.0,
            u_depth: 28.0,
            ext_above: 12.0,
            stroke: "black".to_string(),
            stroke_width: 2.5,
            margin: 16.0,
            linecap: LineCap::Round,
            linejoin: LineJoin::Round,
            background: "white".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_and_join_render_svg_keywords() {
        assert_eq!(LineCap::Butt.to_string(), "butt");
        assert_eq!(LineCap::Round.to_string(), "round");
        assert_eq!(LineJoin::Miter.to_string(), "miter");
        assert_eq!(LineJoin::Bevel.to_string(), "bevel");
    }

    #[test]
    fn defaults_use_round_stroke_ends() {
        let params = ArcParams::default();
        assert_eq!(params.linecap, LineCap::Round);
        assert_eq!(params.linejoin, LineJoin::Round);
        assert_eq!(params.repetitions, 1);
    }
}
