//! Writes three example patterns with a fixed parameter preset.

use archway::ArcParams;
use miette::IntoDiagnostic;

fn main() -> miette::Result<()> {
    let preset = ArcParams {
        repetitions: 1,
        radius: 24.0,
        u_width: 18.0,
        u_depth: 30.0,
        ext_above: 14.0,
        margin: 20.0,
        ..ArcParams::default()
    };

    for (name, repetitions) in [("arc_out_1.svg", 1), ("arc_out_3.svg", 3), ("arc_out_6.svg", 6)] {
        let params = ArcParams {
            repetitions,
            ..preset.clone()
        };
        let svg = archway::render(&params)?;
        std::fs::write(name, svg).into_diagnostic()?;
        println!("Wrote {name}");
    }

    Ok(())
}
