//! Dock magnification.

/// Pointer distance (px) beyond which an icon is not magnified.
pub const MAGNIFICATION_RADIUS_PX: f64 = 100.0;
/// Extra scale applied when the pointer sits on an icon's center.
pub const MAX_EXTRA_SCALE: f64 = 0.5;

/// Scale for an icon whose center is `distance` px from the pointer horizontally.
pub fn magnification_scale(distance: f64) -> f64 {
    let distance = distance.abs();
    if distance < MAGNIFICATION_RADIUS_PX {
        1.0 + (1.0 - distance / MAGNIFICATION_RADIUS_PX) * MAX_EXTRA_SCALE
    } else {
        1.0
    }
}

/// Scale for an icon centered at `icon_center_x` given the pointer's `pointer_x`, or `1.0`
/// while the pointer is away from the dock.
pub fn icon_scale(pointer_x: Option<f64>, icon_center_x: f64) -> f64 {
    pointer_x.map_or(1.0, |x| magnification_scale(x - icon_center_x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_peaks_at_center_and_falls_off_linearly() {
        assert_eq!(magnification_scale(0.0), 1.5);
        assert_eq!(magnification_scale(50.0), 1.25);
        assert_eq!(magnification_scale(-50.0), 1.25);
        assert_eq!(magnification_scale(100.0), 1.0);
        assert_eq!(magnification_scale(250.0), 1.0);
    }

    #[test]
    fn no_pointer_means_no_magnification() {
        assert_eq!(icon_scale(None, 10.0), 1.0);
        assert_eq!(icon_scale(Some(110.0), 10.0), 1.0);
        assert_eq!(icon_scale(Some(10.0), 10.0), 1.5);
    }
}
