//! Error types for pattern construction.
//!
//! Both variants are precondition failures detected before any output is
//! produced; a partial document is never emitted.

use miette::Diagnostic;
use thiserror::Error;

/// Reasons a pattern build can be rejected.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    /// A parameter is outside its allowed range.
    #[error("invalid parameter: {message}")]
    #[diagnostic(code(archway::invalid_parameter))]
    InvalidParameter { message: String },

    /// The end-cap extensions cannot rise above the semicircle apex.
    #[error("end caps cannot clear the arc apex (top {top} is not above apex {arc_apex})")]
    #[diagnostic(
        code(archway::geometry),
        help("increase ext_above or margin so the extensions rise above the arcs")
    )]
    Geometry { top: f64, arc_apex: f64 },
}
