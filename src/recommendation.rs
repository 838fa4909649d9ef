// THEORY:
// The `recommendation` module is the static lookup table that turns a
// ripeness verdict into human-facing guidance: a status label, a description
// of the fruit at that stage, the recommended handling, food suggestions, and
// styling hints for a UI. It is pure reference data — the analysis pipeline
// never reads it, it only returns the `Ripeness` key a caller uses to index
// this table. Keeping the table out of the core means the guidance copy can
// change without touching (or re-validating) the classifier.

use crate::core_modules::ripeness::ripeness::Ripeness;
use serde::Serialize;

/// Display guidance for one ripeness stage. All fields are static reference
/// data; the styling hints are CSS-class-shaped for web front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Short status label, e.g. "RIPE".
    pub status: &'static str,
    /// What the fruit looks and tastes like at this stage.
    pub description: &'static str,
    /// Recommended handling or storage action.
    pub action: &'static str,
    /// Food uses that suit this stage best.
    pub food: &'static [&'static str],
    /// Text color styling hint.
    pub color: &'static str,
    /// Background color styling hint.
    pub bg_color: &'static str,
    /// Border color styling hint.
    pub border_color: &'static str,
}

const UNRIPE: Recommendation = Recommendation {
    status: "UNRIPE",
    description: "Still firm, peel dominantly green, astringent and not yet sweet.",
    action: "Ripen at room temperature for 2-3 days.",
    food: &[
        "Banana chips",
        "Boiled green banana",
        "Savory banana curry",
    ],
    color: "text-green-600",
    bg_color: "bg-green-100",
    border_color: "border-green-500",
};

const RIPE: Recommendation = Recommendation {
    status: "RIPE",
    description: "Bright yellow peel, firm-tender texture, sweetness at its peak.",
    action: "Ready to eat as-is (table banana).",
    food: &[
        "Eaten fresh",
        "Crispy fried banana",
        "Banana spring rolls",
        "Fresh banana smoothie",
    ],
    color: "text-yellow-600",
    bg_color: "bg-yellow-100",
    border_color: "border-yellow-500",
};

const OVERRIPE: Recommendation = Recommendation {
    status: "OVERRIPE",
    description: "Peel covered in brown/black spots, soft flesh, strong aroma, very sweet.",
    action: "Don't throw it away! This is the best natural sweetener.",
    food: &[
        "Banana bread (best!)",
        "Banana pancakes (no added sugar)",
        "Banana nice cream",
        "Banana nuggets",
    ],
    color: "text-amber-700",
    bg_color: "bg-amber-100",
    border_color: "border-amber-600",
};

/// Looks up the guidance for a verdict. Total over `Ripeness`, so callers
/// never handle a missing entry.
pub fn for_ripeness(key: Ripeness) -> &'static Recommendation {
    match key {
        Ripeness::Unripe => &UNRIPE,
        Ripeness::Ripe => &RIPE,
        Ripeness::Overripe => &OVERRIPE,
    }
}

#[cfg(test)]
mod tests {
    use super::for_ripeness;
    use crate::core_modules::ripeness::ripeness::Ripeness;

    #[test]
    fn every_key_has_an_entry() {
        for key in [Ripeness::Unripe, Ripeness::Ripe, Ripeness::Overripe] {
            let rec = for_ripeness(key);
            assert!(!rec.status.is_empty());
            assert!(!rec.food.is_empty());
        }
    }

    #[test]
    fn overripe_steers_toward_baking() {
        let rec = for_ripeness(Ripeness::Overripe);
        assert_eq!(rec.status, "OVERRIPE");
        assert!(rec.food.iter().any(|f| f.contains("bread")));
    }
}
