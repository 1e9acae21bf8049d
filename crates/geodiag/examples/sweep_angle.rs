//! Rotate the tutorial line once around its pivot and print the angle label.
//!
//! Usage:
//!   cargo run -p geodiag --example sweep_angle -- [steps]

use geodiag::demos::Example;
use geodiag::draw::ANGLE_TEXT_SEL;
use nalgebra::Vector2;

fn main() -> geodiag::Result<()> {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let mut d = Example::Annotated.build()?;
    let b = Vector2::new(5.0, 4.0);
    for k in 0..steps {
        let theta = (k as f64) / (steps as f64) * std::f64::consts::TAU;
        let grip = b + Vector2::new(theta.cos(), theta.sin());
        d.drag_first_to(&[grip])?;
        let label = d
            .graph
            .surface()
            .select(ANGLE_TEXT_SEL)
            .next()
            .and_then(|el| el.text())
            .unwrap_or("");
        println!("step {k:>3}: grip=({:.2}, {:.2}) angle={label}", grip.x, grip.y);
    }
    Ok(())
}
