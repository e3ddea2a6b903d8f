use crate::algebra::Vec3;

/// Scales an over-bright color down so its largest channel is 1, keeping hue.
#[inline]
pub fn rescale_overbright(c: Vec3) -> Vec3 {
    let max = c.max_component();
    if max > 1.0 { c.scale(1.0 / max) } else { c }
}

#[inline]
pub fn channel_to_byte(x: f32) -> u8 {
    (255.0 * x.clamp(0.0, 1.0)).round() as u8
}

/// Final 8-bit RGB for a linear color.
pub fn to_rgb8(c: Vec3) -> [u8; 3] {
    let c = rescale_overbright(c);
    [channel_to_byte(c.0), channel_to_byte(c.1), channel_to_byte(c.2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overbright_keeps_ratios() {
        assert_eq!(rescale_overbright(Vec3(2.0, 1.0, 0.5)), Vec3(1.0, 0.5, 0.25));
        assert_eq!(to_rgb8(Vec3(2.0, 1.0, 0.5)), [255, 128, 64]);
    }

    #[test]
    fn test_in_range_untouched() {
        assert_eq!(rescale_overbright(Vec3(0.2, 0.7, 0.8)), Vec3(0.2, 0.7, 0.8));
        assert_eq!(to_rgb8(Vec3(0.0, 1.0, 0.5)), [0, 255, 128]);
    }

    #[test]
    fn test_negative_and_nan_clamp() {
        assert_eq!(channel_to_byte(-3.0), 0);
        assert_eq!(channel_to_byte(f32::NAN), 0);
    }
}
