//! Generator for a decorative repeating arc pattern.
//!
//! The pattern alternates square-bottomed U-shapes with upward-bulging
//! semicircles along a shared baseline, rendered as one continuous SVG path.
//! Both ends carry a vertical extension rising above the semicircle apex,
//! and a horizontal line joins the two extension tops.
//!
//! ```
//! use archway::ArcParams;
//!
//! let svg = archway::render(&ArcParams::default()).unwrap();
//! assert!(svg.contains("<path"));
//! ```

pub mod document;
pub mod errors;
pub mod layout;
pub mod log;
pub mod params;
pub mod path;

pub use errors::BuildError;
pub use layout::Layout;
pub use params::{ArcParams, LineCap, LineJoin};
pub use path::PathCommand;

use svg::Document;

/// Build the pattern for `params` and return the serialized SVG document.
///
/// Pure and deterministic: identical parameters yield byte-identical output.
/// Fails with [`BuildError::InvalidParameter`] when `repetitions < 1` or
/// `ext_above <= 0`, and with [`BuildError::Geometry`] when the computed top
/// coordinate does not clear the arc apex.
pub fn render(params: &ArcParams) -> Result<String, BuildError> {
    Ok(render_document(params)?.to_string())
}

/// Like [`render`], but returns the document before XML serialization.
pub fn render_document(params: &ArcParams) -> Result<Document, BuildError> {
    let layout = Layout::compute(params)?;
    let commands = path::pattern_commands(params, &layout);
    Ok(document::assemble(params, &layout, &commands))
}
