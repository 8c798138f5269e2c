//! Derived layout constants.

use crate::errors::BuildError;
use crate::params::ArcParams;

/// Vertical anchors and overall canvas size derived from the parameters.
///
/// The baseline is the height where U-tops and semicircle endpoints sit; the
/// apex is the topmost point of each semicircle, at `baseline - radius`. The
/// end-cap extensions rise from the baseline to `top`, which must lie
/// strictly above the apex or the caps would never clear the arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub top: f64,
    pub baseline: f64,
    pub arc_apex: f64,
    pub total_width: f64,
    pub total_height: f64,
}

impl Layout {
    /// Compute the layout, checking every precondition up front.
    pub fn compute(params: &ArcParams) -> Result<Self, BuildError> {
        if params.repetitions < 1 {
            return Err(BuildError::InvalidParameter {
                message: "repetitions must be >= 1".to_string(),
            });
        }
        if params.ext_above <= 0.0 {
            return Err(BuildError::InvalidParameter {
                message: "ext_above must be > 0".to_string(),
            });
        }

        let top = params.margin;
        let baseline = top + params.radius + params.ext_above;
        let arc_apex = baseline - params.radius;
        if top >= arc_apex {
            return Err(BuildError::Geometry { top, arc_apex });
        }

        // Each repetition contributes one U and one semicircle; one extra U
        // closes the run on the right.
        let n = f64::from(params.repetitions);
        let pattern_width = n * (params.u_width + 2.0 * params.radius) + params.u_width;
        let total_width = pattern_width + 2.0 * params.margin;
        let total_height = baseline + params.u_depth + params.margin;

        crate::log::debug!(top, baseline, arc_apex, total_width, total_height, "layout");

        Ok(Self {
            top,
            baseline,
            arc_apex,
            total_width,
            total_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ArcParams {
        ArcParams {
            repetitions: 1,
            radius: 24.0,
            u_width: 16.0,
            u_depth: 28.0,
            ext_above: 12.0,
            margin: 16.0,
            ..ArcParams::default()
        }
    }

    #[test]
    fn concrete_scenario() {
        let layout = Layout::compute(&params()).unwrap();
        assert_eq!(layout.top, 16.0);
        assert_eq!(layout.baseline, 52.0);
        assert_eq!(layout.arc_apex, 28.0);
        assert_eq!(layout.total_width, 112.0);
        assert_eq!(layout.total_height, 96.0);
    }

    #[test]
    fn width_formula_scales_with_repetitions() {
        for n in 1..=8 {
            let layout = Layout::compute(&ArcParams {
                repetitions: n,
                ..params()
            })
            .unwrap();
            let expected = f64::from(n) * (16.0 + 48.0) + 16.0 + 32.0;
            assert_eq!(layout.total_width, expected);
        }
    }

    #[test]
    fn top_stays_above_apex_for_valid_parameters() {
        for ext_above in [0.5, 5.0, 12.0, 100.0] {
            let layout = Layout::compute(&ArcParams {
                ext_above,
                ..params()
            })
            .unwrap();
            assert!(layout.top < layout.arc_apex);
        }
    }

    #[test]
    fn zero_repetitions_rejected() {
        let err = Layout::compute(&ArcParams {
            repetitions: 0,
            ..params()
        })
        .unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter { .. }));
    }

    #[test]
    fn non_positive_extension_rejected() {
        for ext_above in [0.0, -3.0] {
            let err = Layout::compute(&ArcParams {
                ext_above,
                ..params()
            })
            .unwrap_err();
            assert!(matches!(err, BuildError::InvalidParameter { .. }));
        }
    }
}
