// src/domain/logic.rs

use crate::domain::record::Category;

/// Determines the pricing category of a unit type from its label.
/// The order of checks determines precedence.
///
/// For example, a label can mention both "social" and "market", but 'social'
/// takes precedence in our classification.
pub fn classify_category(unit_type: &str) -> Category {
    let label = unit_type.to_lowercase();

    if label.contains("social") {
        return Category::Social;
    }
    if label.contains("market") {
        return Category::Market;
    }
    if label.contains("affordable") {
        return Category::Affordable;
    }
    Category::Other
}

// First matching rule wins, so "1 room" is tried before "2 room" etc.
const BEDROOM_RULES: [(&[&str], u8); 5] = [
    (&["studio", "bedsitter"], 0),
    (&["1 room", "1 bedroom"], 1),
    (&["2 room", "2 bedroom"], 2),
    (&["3 room", "3 bedroom"], 3),
    (&["4 room", "4 bedroom"], 4),
];

/// Extracts the bedroom count from a unit type label (0 for studios).
///
/// Labels matching none of the known patterns ("Duplex", "Kings Boma ...")
/// are left unclassified rather than guessed.
pub fn classify_bedrooms(unit_type: &str) -> Option<u8> {
    let label = unit_type.to_lowercase();

    BEDROOM_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| label.contains(n)))
        .map(|(_, count)| *count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_precedence() {
        assert_eq!(classify_category("1 Room Social"), Category::Social);
        assert_eq!(classify_category("2 Bedroom Unit Market"), Category::Market);
        assert_eq!(classify_category("Studio Unit Affordable"), Category::Affordable);
        assert_eq!(classify_category("Duplex"), Category::Other);

        // Social beats market, market beats affordable.
        assert_eq!(classify_category("Social / Market mix"), Category::Social);
        assert_eq!(classify_category("affordable MARKET"), Category::Market);
    }

    #[test]
    fn category_is_case_insensitive() {
        assert_eq!(classify_category("SOCIAL"), Category::Social);
        assert_eq!(classify_category("sOcIaL housing"), Category::Social);
    }

    #[test]
    fn bedroom_patterns() {
        assert_eq!(classify_bedrooms("Studio Unit Affordable"), Some(0));
        assert_eq!(classify_bedrooms("Bedsitter"), Some(0));
        assert_eq!(classify_bedrooms("1 Room Unit"), Some(1));
        assert_eq!(classify_bedrooms("1 Bedroom Unit Social"), Some(1));
        assert_eq!(classify_bedrooms("2 Bedroom Unit Market"), Some(2));
        assert_eq!(classify_bedrooms("3 Room Social"), Some(3));
        assert_eq!(classify_bedrooms("4 Bedroom Villa"), Some(4));
        assert_eq!(classify_bedrooms("Duplex"), None);
        assert_eq!(classify_bedrooms(""), None);
    }

    #[test]
    fn studio_wins_over_room_count() {
        assert_eq!(classify_bedrooms("Studio with 2 bedroom loft"), Some(0));
    }

    #[test]
    fn classification_is_repeatable() {
        let labels = [
            "1 Room Social",
            "2 Bedroom Unit Affordable",
            "3 Bedroom Unit Market",
            "Kings Boma Maisonette",
            "",
        ];
        for label in labels {
            assert_eq!(classify_category(label), classify_category(label));
            assert_eq!(classify_bedrooms(label), classify_bedrooms(label));
            assert!(matches!(
                classify_category(label),
                Category::Social | Category::Affordable | Category::Market | Category::Other
            ));
        }
    }
}
