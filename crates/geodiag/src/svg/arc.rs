//! Annular sector path generator.
//!
//! Convention: angles in radians, 0 at 12 o'clock, increasing clockwise on
//! screen (y down). A point at angle `a` and radius `r` is `(r sin a, -r cos a)`
//! relative to the arc centre. Callers translate the path to the centre.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use super::write::fmt_num;
use crate::geom::finite_or;

const EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

fn at(r: f64, a: f64) -> String {
    format!("{},{}", fmt_num(r * a.sin()), fmt_num(-r * a.cos()))
}

/// SVG path data for the ring sector described by `spec`.
///
/// Degenerate inputs stay finite: a zero sweep yields a zero-area path and
/// a zero outer radius collapses to the centre.
pub fn annular_sector(spec: &ArcSpec) -> String {
    let ri = finite_or(spec.inner_radius, 0.0).max(0.0);
    let ro = finite_or(spec.outer_radius, 0.0).max(0.0);
    let (r0, r1) = if ri <= ro { (ri, ro) } else { (ro, ri) };
    let a0 = finite_or(spec.start_angle, 0.0);
    let a1 = finite_or(spec.end_angle, 0.0);
    let da = (a1 - a0).abs();
    let cw = u8::from(a1 > a0);
    let ccw = 1 - cw;

    let mut d = String::new();
    if r1 <= EPS {
        d.push_str("M0,0Z");
    } else if da > TAU - EPS {
        // Full ring: two half arcs per circle.
        let dir = if a1 > a0 { 1.0 } else { -1.0 };
        let mid = a0 + dir * PI;
        let _ = write!(
            d,
            "M{}A{r},{r},0,1,{cw},{}A{r},{r},0,1,{cw},{}",
            at(r1, a0),
            at(r1, mid),
            at(r1, a0),
            r = fmt_num(r1),
        );
        if r0 > EPS {
            let _ = write!(
                d,
                "M{}A{r},{r},0,1,{ccw},{}A{r},{r},0,1,{ccw},{}",
                at(r0, a1),
                at(r0, a1 - dir * PI),
                at(r0, a1),
                r = fmt_num(r0),
            );
        }
        d.push('Z');
    } else if da <= EPS {
        let inner = if r0 > EPS { at(r0, a0) } else { "0,0".to_owned() };
        let _ = write!(d, "M{}L{}Z", at(r1, a0), inner);
    } else {
        let large = u8::from(da >= PI);
        let _ = write!(
            d,
            "M{}A{r},{r},0,{large},{cw},{}",
            at(r1, a0),
            at(r1, a1),
            r = fmt_num(r1),
        );
        if r0 > EPS {
            let _ = write!(
                d,
                "L{}A{r},{r},0,{large},{ccw},{}Z",
                at(r0, a1),
                at(r0, a0),
                r = fmt_num(r0),
            );
        } else {
            d.push_str("L0,0Z");
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn spec(a0: f64, a1: f64) -> ArcSpec {
        ArcSpec {
            inner_radius: 60.0,
            outer_radius: 61.0,
            start_angle: a0,
            end_angle: a1,
        }
    }

    #[test]
    fn quarter_sector_clockwise() {
        // From 12 o'clock to 3 o'clock.
        let d = annular_sector(&spec(0.0, FRAC_PI_2));
        assert_eq!(d, "M0,-61A61,61,0,0,1,61,0L60,0A60,60,0,0,0,0,-60Z");
    }

    #[test]
    fn anticlockwise_sweep_flips_flags() {
        let d = annular_sector(&spec(FRAC_PI_2, 0.0));
        assert_eq!(d, "M61,0A61,61,0,0,0,0,-61L0,-60A60,60,0,0,1,60,0Z");
    }

    #[test]
    fn large_arc_flag_set_past_half_turn() {
        let d = annular_sector(&spec(0.0, 1.5 * PI));
        assert!(d.contains("A61,61,0,1,1,"));
    }

    #[test]
    fn zero_sweep_is_degenerate_but_finite() {
        let d = annular_sector(&spec(FRAC_PI_2, FRAC_PI_2));
        assert_eq!(d, "M61,0L60,0Z");
        let d = annular_sector(&spec(f64::NAN, f64::INFINITY));
        assert!(!d.contains("NaN") && !d.contains("inf"));
    }

    #[test]
    fn full_turn_draws_two_rings() {
        let d = annular_sector(&spec(0.0, TAU));
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('A').count(), 4);
    }
}
