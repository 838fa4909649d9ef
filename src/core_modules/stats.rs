// THEORY:
// The `stats` module aggregates per-pixel categories into the numbers the
// ripeness rule runs on. It has two halves: `CategoryCounts`, the raw tally
// that workers accumulate independently, and `SurfaceStats`, the derived
// percentage view that reports carry.
//
// Key architectural principles:
// 1.  **Commutative accumulation**: Counts are plain additions, and `merge`
//     is a component-wise sum. Partial tallies from disjoint pixel bands can
//     be combined in any order and always reproduce the sequential result,
//     which is what makes the row-banded parallel analyzer safe.
// 2.  **Fruit-surface denominator**: Percentages describe the composition of
//     the detected fruit surface, not of the whole frame, so background is
//     excluded from the denominator. A `max(1, total)` floor keeps the
//     division defined when nothing was detected — all percentages come out
//     zero rather than NaN.
// 3.  **Raw for decisions, rounded for display**: The ripeness rule compares
//     the unrounded percentages; `SurfaceStats` rounds to one decimal only
//     for reporting. Keeping both prevents a 35.04% green reading from
//     flipping a verdict after display rounding.

pub mod stats {
    use crate::core_modules::segmentation::segmentation::Category;
    use serde::Serialize;

    pub type PixelCount = u64;
    pub type Percentage = f64;

    /// Raw per-category pixel tallies for one image (or one worker's band).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CategoryCounts {
        pub green: PixelCount,
        pub yellow: PixelCount,
        pub brown: PixelCount,
        pub background: PixelCount,
    }

    impl CategoryCounts {
        /// Tallies one classified pixel.
        pub fn record(&mut self, category: Category) {
            match category {
                Category::Green => self.green += 1,
                Category::Yellow => self.yellow += 1,
                Category::Brown => self.brown += 1,
                Category::Background => self.background += 1,
            }
        }

        /// Component-wise sum; commutative and associative, so partial
        /// tallies can merge in any order.
        pub fn merge(&mut self, other: &CategoryCounts) {
            self.green += other.green;
            self.yellow += other.yellow;
            self.brown += other.brown;
            self.background += other.background;
        }

        /// Total fruit-surface pixels (everything except background).
        pub fn fruit_total(&self) -> PixelCount {
            self.green + self.yellow + self.brown
        }

        /// Unrounded percentage of the fruit surface in each category, in
        /// (green, yellow, brown) order. Denominator is floored at 1 so an
        /// empty detection yields zeros.
        pub fn raw_percentages(&self) -> (Percentage, Percentage, Percentage) {
            let denominator = self.fruit_total().max(1) as f64;
            (
                self.green as f64 / denominator * 100.0,
                self.yellow as f64 / denominator * 100.0,
                self.brown as f64 / denominator * 100.0,
            )
        }
    }

    /// The percentage composition of the detected fruit surface, rounded to
    /// one decimal for reporting.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct SurfaceStats {
        pub green_pct: Percentage,
        pub yellow_pct: Percentage,
        pub brown_pct: Percentage,
    }

    impl SurfaceStats {
        pub fn from_counts(counts: &CategoryCounts) -> Self {
            let (green, yellow, brown) = counts.raw_percentages();
            Self {
                green_pct: round_one_decimal(green),
                yellow_pct: round_one_decimal(yellow),
                brown_pct: round_one_decimal(brown),
            }
        }
    }

    fn round_one_decimal(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::stats::{CategoryCounts, SurfaceStats};
    use crate::core_modules::segmentation::segmentation::Category;

    #[test]
    fn record_and_fruit_total() {
        let mut counts = CategoryCounts::default();
        counts.record(Category::Green);
        counts.record(Category::Green);
        counts.record(Category::Brown);
        counts.record(Category::Background);

        assert_eq!(counts.green, 2);
        assert_eq!(counts.brown, 1);
        assert_eq!(counts.background, 1);
        assert_eq!(counts.fruit_total(), 3);
    }

    #[test]
    fn merge_matches_sequential_tally() {
        let mut a = CategoryCounts {
            green: 10,
            yellow: 5,
            brown: 1,
            background: 100,
        };
        let b = CategoryCounts {
            green: 3,
            yellow: 7,
            brown: 9,
            background: 50,
        };
        let mut c = b;
        c.merge(&a);
        a.merge(&b);

        // Commutative: a+b == b+a.
        assert_eq!(a, c);
        assert_eq!(a.green, 13);
        assert_eq!(a.fruit_total(), 35);
    }

    #[test]
    fn empty_detection_yields_zero_percentages() {
        let counts = CategoryCounts {
            background: 4000,
            ..Default::default()
        };
        let stats = SurfaceStats::from_counts(&counts);
        assert_eq!(stats.green_pct, 0.0);
        assert_eq!(stats.yellow_pct, 0.0);
        assert_eq!(stats.brown_pct, 0.0);
    }

    #[test]
    fn percentages_close_to_one_hundred() {
        let counts = CategoryCounts {
            green: 333,
            yellow: 333,
            brown: 334,
            background: 0,
        };
        let stats = SurfaceStats::from_counts(&counts);
        let sum = stats.green_pct + stats.yellow_pct + stats.brown_pct;
        assert!((sum - 100.0).abs() <= 0.1, "closure violated: {sum}");
    }

    #[test]
    fn rounding_is_one_decimal() {
        let counts = CategoryCounts {
            green: 1,
            yellow: 2,
            brown: 0,
            background: 0,
        };
        let stats = SurfaceStats::from_counts(&counts);
        // 1/3 of the surface: 33.333...% rounds to 33.3.
        assert_eq!(stats.green_pct, 33.3);
        assert_eq!(stats.yellow_pct, 66.7);
    }
}
