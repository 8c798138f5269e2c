//! SVG document assembly and number formatting.
//!
//! All text formatting lives here: coordinates render with fixed 2-decimal
//! precision, the overall document width and height as rounded integers.

use svg::Document;
use svg::node::element::{Path, Rectangle};

use crate::layout::Layout;
use crate::params::ArcParams;
use crate::path::PathCommand;

/// Fixed 2-decimal coordinate formatting.
fn fmt_coord(value: f64) -> String {
    format!("{value:.2}")
}

/// Document dimensions round to whole pixels.
fn fmt_dim(value: f64) -> i64 {
    value.round() as i64
}

/// Serialize a command sequence into SVG path data.
pub fn to_path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => {
                format!("M {},{}", fmt_coord(p.x), fmt_coord(p.y))
            }
            PathCommand::VerticalTo(y) => format!("V {}", fmt_coord(*y)),
            PathCommand::HorizontalTo(x) => format!("H {}", fmt_coord(*x)),
            PathCommand::ArcTo { radius, end } => format!(
                "A {r},{r} 0 0 1 {x},{y}",
                r = fmt_coord(*radius),
                x = fmt_coord(end.x),
                y = fmt_coord(end.y),
            ),
        })
        .collect();
    parts.join(" ")
}

/// Wrap the path data in a complete document: a full-canvas background
/// rectangle followed by the stroked, unfilled outline.
pub fn assemble(params: &ArcParams, layout: &Layout, commands: &[PathCommand]) -> Document {
    let width = fmt_dim(layout.total_width);
    let height = fmt_dim(layout.total_height);

    crate::log::debug!(width, height, "assembling document");

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", params.background.as_str());

    let outline = Path::new()
        .set("d", to_path_data(commands))
        .set("fill", "none")
        .set("stroke", params.stroke.as_str())
        .set("stroke-width", params.stroke_width)
        .set("stroke-linecap", params.linecap.to_string())
        .set("stroke-linejoin", params.linejoin.to_string());

    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
        .add(background)
        .add(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn coordinates_render_with_two_decimals() {
        let commands = [
            PathCommand::MoveTo(dvec2(20.0, 58.0)),
            PathCommand::VerticalTo(20.0),
            PathCommand::HorizontalTo(38.5),
            PathCommand::ArcTo {
                radius: 24.0,
                end: dvec2(86.0, 58.0),
            },
        ];
        assert_eq!(
            to_path_data(&commands),
            "M 20.00,58.00 V 20.00 H 38.50 A 24.00,24.00 0 0 1 86.00,58.00"
        );
    }

    #[test]
    fn dimensions_round_to_integers() {
        assert_eq!(fmt_dim(111.5), 112);
        assert_eq!(fmt_dim(112.4), 112);
    }
}
