// THEORY:
// The `segmentation` module is the decision core of the pixel layer. Given the
// HSV projection of a single pixel, it assigns exactly one `Category`:
// background, green peel, yellow peel, or brown spot.
//
// Key architectural principles:
// 1.  **Ordered guard chain**: The three color predicates are evaluated in a
//     fixed priority order — brown, then green, then yellow — and the first
//     match wins. The predicates overlap on purpose (a dark reddish hue can
//     satisfy both the brown and green tests), so the ordering is part of the
//     observable contract. Do not reorder or "simplify" these conditions into
//     a logically equivalent form with a different evaluation order.
// 2.  **Exclusive and exhaustive**: Every pixel receives exactly one category;
//     anything that escapes all three color tests is background.
// 3.  **Fixed calibration**: The threshold constants are empirically tuned
//     values carried over from the reference segmentation. They are
//     configuration to reproduce, not parameters to improve; nudging one
//     silently changes verdicts on real photographs.

pub mod segmentation {
    use crate::core_modules::hsv::hsv::HsvColor;

    /// Brown test: reddish hue band (wrapping through 0) or dark value,
    /// gated by minimum saturation and a value ceiling.
    const BROWN_HUE_LOW_MAX: f64 = 30.0;
    const BROWN_HUE_HIGH_MIN: f64 = 340.0;
    const BROWN_DARK_VALUE_MAX: f64 = 40.0;
    const BROWN_MIN_SATURATION: f64 = 20.0;
    const BROWN_MAX_VALUE: f64 = 85.0;

    /// Green test: mid-spectrum hue band with a minimum brightness.
    const GREEN_HUE_MIN: f64 = 75.0;
    const GREEN_HUE_MAX: f64 = 180.0;
    const GREEN_MIN_VALUE: f64 = 25.0;

    /// Yellow test: hue band below green (upper bound exclusive), brighter
    /// and more saturated than the other bands demand.
    const YELLOW_HUE_MIN: f64 = 35.0;
    const YELLOW_HUE_MAX: f64 = 75.0;
    const YELLOW_MIN_VALUE: f64 = 40.0;
    const YELLOW_MIN_SATURATION: f64 = 25.0;

    /// The color category assigned to a single pixel.
    ///
    /// Exactly one category per pixel; `Background` is everything the three
    /// color tests reject.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Category {
        /// Not part of the fruit surface.
        Background,
        /// Unripe green peel.
        Green,
        /// Ripe yellow peel.
        Yellow,
        /// Brown spot or dark bruise.
        Brown,
    }

    impl Category {
        /// True for any category that counts as fruit surface.
        pub fn is_fruit(self) -> bool {
            !matches!(self, Category::Background)
        }
    }

    /// Classifies one HSV pixel into its color category.
    ///
    /// The guard chain runs top to bottom and the first matching rule wins;
    /// see the module THEORY for why the order is load-bearing.
    pub fn classify(hsv: &HsvColor) -> Category {
        let HsvColor {
            hue,
            saturation,
            value,
        } = *hsv;

        let reddish_or_dark =
            hue <= BROWN_HUE_LOW_MAX || hue >= BROWN_HUE_HIGH_MIN || value < BROWN_DARK_VALUE_MAX;
        if reddish_or_dark && saturation > BROWN_MIN_SATURATION && value < BROWN_MAX_VALUE {
            return Category::Brown;
        }

        if hue >= GREEN_HUE_MIN && hue <= GREEN_HUE_MAX && value > GREEN_MIN_VALUE {
            return Category::Green;
        }

        if hue >= YELLOW_HUE_MIN
            && hue < YELLOW_HUE_MAX
            && value > YELLOW_MIN_VALUE
            && saturation > YELLOW_MIN_SATURATION
        {
            return Category::Yellow;
        }

        Category::Background
    }
}

#[cfg(test)]
mod tests {
    use super::segmentation::{Category, classify};
    use crate::core_modules::hsv::hsv::HsvColor;

    fn hsv(hue: f64, saturation: f64, value: f64) -> HsvColor {
        HsvColor {
            hue,
            saturation,
            value,
        }
    }

    #[test]
    fn dark_reddish_pixel_is_brown() {
        assert_eq!(classify(&hsv(20.0, 50.0, 30.0)), Category::Brown);
    }

    #[test]
    fn wrapped_high_hue_is_brown() {
        assert_eq!(classify(&hsv(350.0, 40.0, 50.0)), Category::Brown);
    }

    #[test]
    fn bright_green_peel_is_green() {
        assert_eq!(classify(&hsv(120.0, 100.0, 100.0)), Category::Green);
    }

    #[test]
    fn bright_yellow_peel_is_yellow() {
        assert_eq!(classify(&hsv(60.0, 100.0, 100.0)), Category::Yellow);
    }

    #[test]
    fn blue_sky_is_background() {
        assert_eq!(classify(&hsv(240.0, 100.0, 100.0)), Category::Background);
    }

    #[test]
    fn brown_wins_over_green_on_overlap() {
        // Dark enough for the brown value escape hatch (v < 40) while also
        // sitting inside the green hue band with v > 25. Brown is first in
        // the chain and must win.
        assert_eq!(classify(&hsv(100.0, 50.0, 30.0)), Category::Brown);
    }

    #[test]
    fn brown_wins_over_yellow_on_overlap() {
        // Value under 40 trips the brown dark escape even inside the yellow
        // hue band, and brown is evaluated first.
        assert_eq!(classify(&hsv(50.0, 60.0, 35.0)), Category::Brown);
    }

    #[test]
    fn yellow_band_upper_bound_is_exclusive() {
        // h = 75 belongs to the green band, not yellow.
        assert_eq!(classify(&hsv(75.0, 100.0, 100.0)), Category::Green);
        assert_eq!(classify(&hsv(74.9, 100.0, 100.0)), Category::Yellow);
    }

    #[test]
    fn desaturated_yellow_is_background() {
        // Inside the yellow hue band but below the saturation floor.
        assert_eq!(classify(&hsv(60.0, 20.0, 90.0)), Category::Background);
    }

    #[test]
    fn bright_red_escapes_brown_value_ceiling() {
        // Reddish hue with s > 20 but v >= 85: the ceiling rejects it, and
        // no other band claims it.
        assert_eq!(classify(&hsv(10.0, 80.0, 95.0)), Category::Background);
    }

    #[test]
    fn every_pixel_gets_exactly_one_category() {
        // Coarse sweep over the HSV cube; `classify` returning is itself the
        // exclusivity proof (one enum value out), so just exercise the space.
        for h in (0..360).step_by(5) {
            for s in (0..=100).step_by(10) {
                for v in (0..=100).step_by(10) {
                    let _ = classify(&hsv(h as f64, s as f64, v as f64));
                }
            }
        }
    }
}
