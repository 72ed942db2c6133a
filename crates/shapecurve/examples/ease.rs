//! Minimal easing example: build a shaper by name and tween a value with it.

use std::error::Error;

use shapecurve::{Shaper, spec::ShaperSpec};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // A double-cubic seat with its plateau at x = 0.4.
    let spec: ShaperSpec = "cubic-seat:0.4,0.5".parse()?;
    let shaper = spec.build()?;
    println!("{}: {}", shaper.name(), shaper.info());

    for (x, y) in shaper.sample(4) {
        println!("f({x:.2}) = {y:.4}");
    }

    // Tween a position from 10 to 250 over shaped progress.
    let halfway = shaper.interpolate(10.0, 250.0, 0.5);
    println!("Position at t = 0.5: {halfway:.2}");

    assert_eq!(shaper.eval(0.0), 0.0);
    // snips-end: example

    Ok(())
}
