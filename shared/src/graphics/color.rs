#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of one pixel from its escape count. The hue tracks the escape
/// fraction of the budget and interior points render black. `budget` must
/// be at least 1, which the budget clamp guarantees.
pub fn escape_color(iterations: u32, budget: u32) -> Rgb {
    let hue = (255 * iterations / budget) as u8;
    let value = if iterations < budget { 255 } else { 0 };
    hsv_to_rgb(hue, 255, value)
}

/// Integer HSV to RGB on eight-bit channels, no floating point. The hue
/// circle splits into six regions of 43 and the in-region blend is scaled
/// with `>> 8`, so the output is reproducible byte for byte on every
/// platform.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> Rgb {
    if s == 0 {
        return Rgb::new(v, v, v);
    }

    let region = h / 43;
    // At most 42 * 6 == 252, safe in eight bits.
    let remainder = u32::from(h - region * 43) * 6;
    let s = u32::from(s);
    let v = u32::from(v);

    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
    let v = v as u8;

    match region {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_render_pure_red() {
        assert_eq!(escape_color(0, 1), Rgb::new(255, 0, 0));
        assert_eq!(escape_color(0, 2_000), Rgb::new(255, 0, 0));
    }

    #[test]
    fn interior_points_render_black() {
        assert_eq!(escape_color(109, 109), Rgb::new(0, 0, 0));
        assert_eq!(escape_color(2_000, 2_000), Rgb::new(0, 0, 0));
    }

    #[test]
    fn halfway_escape_of_the_default_budget() {
        assert_eq!(escape_color(54, 109), Rgb::new(0, 255, 240));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(17, 0, 200), Rgb::new(200, 200, 200));
    }

    #[test]
    fn full_value_corners_of_the_hue_circle() {
        assert_eq!(hsv_to_rgb(0, 255, 255), Rgb::new(255, 0, 0));
        // Region boundary: 43 flips from region 0 to region 1.
        assert_eq!(hsv_to_rgb(43, 255, 255).g, 255);
        // Top of the circle lands in region 5.
        let top = hsv_to_rgb(255, 255, 255);
        assert_eq!(top.r, 255);
        assert_eq!(top.g, 0);
    }
}
