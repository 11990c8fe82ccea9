use complex::complex::Complex;

use crate::models::viewport::Viewport;

/// Orbits whose squared modulus exceeds this never come back.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Hard ceiling on the per-pass iteration budget.
pub const MAX_ITERATION_BUDGET: u32 = 2_000;

const BUDGET_SCALE: f64 = 300.0;

/// Escape iteration count of `c`, capped at `budget`. The orbit starts at
/// zero and escape is strict: a squared modulus of exactly
/// [`ESCAPE_RADIUS_SQ`] keeps iterating. A return value equal to `budget`
/// means the orbit never escaped.
pub fn escape_time(c: Complex, budget: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while z.norm_sq() <= ESCAPE_RADIUS_SQ && iterations < budget {
        z = z.square_add(c);
        iterations += 1;
    }

    iterations
}

/// Iteration budget for one render pass. Deeper zooms mean a smaller plane
/// surface and get a larger budget, clamped to `1..=MAX_ITERATION_BUDGET`;
/// a zero surface clamps to the ceiling.
pub fn iteration_budget(viewport: &Viewport) -> u32 {
    let surface = viewport.surface_area();
    (BUDGET_SCALE / surface.sqrt()).clamp(1.0, MAX_ITERATION_BUDGET as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, 1), 1);
        assert_eq!(escape_time(Complex::ZERO, 500), 500);
    }

    #[test]
    fn one_escapes_on_the_third_step() {
        // 0 -> 1 -> 2 -> 5; the modulus-2 boundary at z = 2 does not count
        // as an escape.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 3);
    }

    #[test]
    fn minus_two_rides_the_boundary_forever() {
        // The orbit cycles on |z|² == 4 and the boundary is not an escape.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 300), 300);
    }

    #[test]
    fn boundary_modulus_keeps_iterating() {
        // z₁ = 2 sits exactly on the boundary; the escape happens one step
        // later at z₂ = 6.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 50), 2);
    }

    #[test]
    fn interior_points_exhaust_the_budget() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 250), 250);
    }

    #[test]
    fn budget_of_the_default_view() {
        let viewport = Viewport::new(600, 720, Point::new(-2.0, 1.5), Point::new(0.5, -1.5));
        assert_eq!(iteration_budget(&viewport), 109);
    }

    #[test]
    fn budget_clamps_to_the_ceiling_on_a_collapsed_view() {
        let viewport = Viewport::new(10, 10, Point::new(0.5, 0.5), Point::new(0.5, 0.5));
        assert_eq!(iteration_budget(&viewport), MAX_ITERATION_BUDGET);
    }

    #[test]
    fn budget_clamps_to_one_on_a_huge_view() {
        let viewport = Viewport::new(
            10,
            10,
            Point::new(-1_000.0, 1_000.0),
            Point::new(1_000.0, -1_000.0),
        );
        assert_eq!(iteration_budget(&viewport), 1);
    }
}
