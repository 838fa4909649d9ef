// THEORY:
// The `hsv` module is the color-space layer of the pipeline. Every downstream
// decision — category segmentation, the value-channel mask, the ripeness
// verdict — is phrased in HSV terms, so this module is the single point where
// RGB bytes are projected into that space.
//
// Key architectural principles:
// 1.  **One conversion, one set of numerics**: The segmentation thresholds sit
//     directly on HSV boundaries (h = 30, s = 20, v = 85, ...), so the
//     conversion must be bit-stable. All math runs in f64 and the hexagonal
//     projection is the textbook 6-sector formula; borderline pixels land on
//     the same side of every threshold on every run.
// 2.  **Domain-scaled components**: Hue is an angle in degrees [0, 360);
//     saturation and value are percentages [0, 100]. The thresholds were tuned
//     on those scales, so the converter emits them directly rather than the
//     normalized [0, 1] form.
// 3.  **Pure leaf dependency**: No state, no side effects. Given the same RGB
//     bytes, the same HSV comes out, which is what makes the whole analysis
//     idempotent.

pub mod hsv {
    use crate::core_modules::pixel::pixel::Pixel;

    pub type Hue = f64;
    pub type Saturation = f64;
    pub type Value = f64;

    /// A pixel projected into HSV space, on the scales the segmentation
    /// thresholds were tuned for.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct HsvColor {
        /// Hue angle in degrees, [0, 360).
        pub hue: Hue,
        /// Saturation percentage, [0, 100].
        pub saturation: Saturation,
        /// Value (brightness) percentage, [0, 100].
        pub value: Value,
    }

    impl HsvColor {
        /// Converts raw RGB bytes into HSV.
        ///
        /// Standard 6-sector hexagonal projection: `v = max(r, g, b)`,
        /// `s = delta / max` (0 when max is 0), and hue computed from
        /// whichever channel dominates. Achromatic pixels (max == min)
        /// have hue 0 by convention.
        pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
            let r = red as f64 / 255.0;
            let g = green as f64 / 255.0;
            let b = blue as f64 / 255.0;

            let max = r.max(g.max(b));
            let min = r.min(g.min(b));
            let delta = max - min;

            let saturation = if max == 0.0 { 0.0 } else { delta / max };

            let hue = if max == min {
                0.0
            } else {
                // Ties resolve red-first, then green; this matches the
                // reference conversion and keeps boundary hues stable.
                let sector = if max == r {
                    (g - b) / delta + if g < b { 6.0 } else { 0.0 }
                } else if max == g {
                    (b - r) / delta + 2.0
                } else {
                    (r - g) / delta + 4.0
                };
                sector * 60.0
            };

            HsvColor {
                hue,
                saturation: saturation * 100.0,
                value: max * 100.0,
            }
        }
    }

    impl From<&Pixel> for HsvColor {
        fn from(pixel: &Pixel) -> Self {
            HsvColor::from_rgb(pixel.red, pixel.green, pixel.blue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::hsv::HsvColor;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn pure_red_has_hue_zero() {
        let hsv = HsvColor::from_rgb(255, 0, 0);
        assert_close(hsv.hue, 0.0);
        assert_close(hsv.saturation, 100.0);
        assert_close(hsv.value, 100.0);
    }

    #[test]
    fn pure_green_has_hue_120() {
        let hsv = HsvColor::from_rgb(0, 255, 0);
        assert_close(hsv.hue, 120.0);
        assert_close(hsv.saturation, 100.0);
        assert_close(hsv.value, 100.0);
    }

    #[test]
    fn pure_yellow_has_hue_60() {
        let hsv = HsvColor::from_rgb(255, 255, 0);
        assert_close(hsv.hue, 60.0);
        assert_close(hsv.saturation, 100.0);
        assert_close(hsv.value, 100.0);
    }

    #[test]
    fn black_is_achromatic() {
        let hsv = HsvColor::from_rgb(0, 0, 0);
        assert_close(hsv.hue, 0.0);
        assert_close(hsv.saturation, 0.0);
        assert_close(hsv.value, 0.0);
    }

    #[test]
    fn gray_has_zero_saturation_and_hue() {
        let hsv = HsvColor::from_rgb(128, 128, 128);
        assert_close(hsv.hue, 0.0);
        assert_close(hsv.saturation, 0.0);
    }

    #[test]
    fn blue_dominant_sector() {
        let hsv = HsvColor::from_rgb(0, 0, 255);
        assert_close(hsv.hue, 240.0);
    }

    #[test]
    fn negative_sector_wraps_into_range() {
        // Magenta-ish: red dominant with blue above green lands in [300, 360).
        let hsv = HsvColor::from_rgb(255, 0, 255);
        assert_close(hsv.hue, 300.0);
        assert!(hsv.hue >= 0.0 && hsv.hue < 360.0);
    }
}
