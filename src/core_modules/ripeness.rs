// THEORY:
// The `ripeness` module is the verdict layer: a single-step decision over the
// aggregated surface percentages, plus the detection guard that decides
// whether the percentages can be trusted at all.
//
// Key architectural principles:
// 1.  **Guard before decision**: An image with fewer than 1000 fruit pixels
//     is treated as "no banana found" — the analysis still completes, masks
//     and statistics included, but the verdict stays at the default (`Ripe`)
//     and the report carries an advisory message. The guard never aborts the
//     call; the caller decides whether to discard the result.
// 2.  **Ordered rules, strict inequalities**: Green is tested before brown,
//     so a surface exceeding both the green and brown thresholds reads as
//     unripe, never overripe. The comparisons are strict: a 50/50
//     green/yellow split fails `pGreen > pYellow` and falls through to ripe.
// 3.  **Unrounded inputs**: The rule runs on raw percentages, before the
//     one-decimal display rounding.

pub mod ripeness {
    use crate::core_modules::stats::stats::{CategoryCounts, Percentage, PixelCount};
    use serde::Serialize;

    /// Minimum fruit-surface pixels for the verdict to be meaningful.
    pub const MIN_FRUIT_PIXELS: PixelCount = 1000;

    /// Green share must beat yellow and exceed this floor for `Unripe`.
    const UNRIPE_MIN_GREEN_PCT: Percentage = 35.0;
    /// Brown share above this reads as `Overripe` (when not unripe).
    const OVERRIPE_MIN_BROWN_PCT: Percentage = 15.0;

    /// The categorical ripeness verdict.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Ripeness {
        /// Dominantly green peel; still hard and starchy.
        Unripe,
        /// Yellow peel; ready to eat. Also the fallback verdict.
        Ripe,
        /// Heavy brown spotting; soft and very sweet.
        Overripe,
    }

    impl Ripeness {
        /// The verdict reported when the decision rule is skipped or nothing
        /// matches.
        pub const DEFAULT: Ripeness = Ripeness::Ripe;
    }

    /// Outcome of the detection guard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Detection {
        /// Enough fruit pixels; the decision rule applies.
        Clear,
        /// Too few fruit pixels; verdict stays at the default.
        Insufficient,
    }

    /// Checks whether enough of the frame segmented as fruit surface for the
    /// verdict to mean anything.
    pub fn detection_guard(counts: &CategoryCounts) -> Detection {
        if counts.fruit_total() < MIN_FRUIT_PIXELS {
            Detection::Insufficient
        } else {
            Detection::Clear
        }
    }

    /// Applies the ripeness rule to one image's tallies.
    ///
    /// When the guard trips, the decision tree is skipped entirely and the
    /// default verdict is returned, mirroring `detection_guard` callers that
    /// surface the advisory separately.
    pub fn classify(counts: &CategoryCounts) -> Ripeness {
        if detection_guard(counts) == Detection::Insufficient {
            return Ripeness::DEFAULT;
        }

        let (green_pct, yellow_pct, brown_pct) = counts.raw_percentages();
        decide(green_pct, yellow_pct, brown_pct)
    }

    /// The bare decision rule over (unrounded) surface percentages.
    /// Order matters: the green test shadows the brown test on overlap.
    pub fn decide(green_pct: Percentage, yellow_pct: Percentage, brown_pct: Percentage) -> Ripeness {
        if green_pct > yellow_pct && green_pct > UNRIPE_MIN_GREEN_PCT {
            Ripeness::Unripe
        } else if brown_pct > OVERRIPE_MIN_BROWN_PCT {
            Ripeness::Overripe
        } else {
            Ripeness::DEFAULT
        }
    }
}
