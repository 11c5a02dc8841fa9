//! Quantity units and conversion constants
//!
//! Units a recipe ingredient or a scaling request may be expressed in.

/// Grams per ounce used when scaling
pub const G_PER_OZ: f64 = 28.35;

/// Grams per cup. Fixed density approximation, only accurate for
/// water-like liquids.
pub const G_PER_CUP: f64 = 240.0;

/// Recognized quantity unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityUnit {
    Grams,
    Ounces,
    Cups,
    /// One piece is one declared serving
    Piece,
    /// Anything else; scaled like grams
    Other(String),
}

impl QuantityUnit {
    /// Parse a unit string, case-insensitive and trimmed
    pub fn parse(unit: &str) -> Self {
        let lower = unit.trim().to_lowercase();

        match lower.as_str() {
            "g" | "gram" | "grams" => QuantityUnit::Grams,
            "oz" | "ounce" | "ounces" => QuantityUnit::Ounces,
            "cup" | "cups" => QuantityUnit::Cups,
            "piece" | "pieces" | "item" | "items" => QuantityUnit::Piece,
            _ => QuantityUnit::Other(lower),
        }
    }

    /// Grams represented by one of this unit, for units that divide by
    /// the food's serving size
    pub fn grams_per_unit(&self) -> Option<f64> {
        match self {
            QuantityUnit::Grams | QuantityUnit::Other(_) => Some(1.0),
            QuantityUnit::Ounces => Some(G_PER_OZ),
            QuantityUnit::Cups => Some(G_PER_CUP),
            QuantityUnit::Piece => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_units() {
        assert_eq!(QuantityUnit::parse("g"), QuantityUnit::Grams);
        assert_eq!(QuantityUnit::parse("Grams"), QuantityUnit::Grams);
        assert_eq!(QuantityUnit::parse(" OZ "), QuantityUnit::Ounces);
        assert_eq!(QuantityUnit::parse("ounce"), QuantityUnit::Ounces);
    }

    #[test]
    fn test_parse_cup_and_piece() {
        assert_eq!(QuantityUnit::parse("Cups"), QuantityUnit::Cups);
        assert_eq!(QuantityUnit::parse("ITEMS"), QuantityUnit::Piece);
        assert_eq!(QuantityUnit::parse("piece"), QuantityUnit::Piece);
    }

    #[test]
    fn test_parse_other() {
        assert_eq!(
            QuantityUnit::parse("Tbsp"),
            QuantityUnit::Other("tbsp".to_string())
        );
        // "each" is not one of the piece aliases
        assert_eq!(
            QuantityUnit::parse("each"),
            QuantityUnit::Other("each".to_string())
        );
    }

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(QuantityUnit::Grams.grams_per_unit(), Some(1.0));
        assert_eq!(QuantityUnit::Ounces.grams_per_unit(), Some(G_PER_OZ));
        assert_eq!(QuantityUnit::Cups.grams_per_unit(), Some(G_PER_CUP));
        assert_eq!(QuantityUnit::Piece.grams_per_unit(), None);
        assert_eq!(QuantityUnit::parse("ml").grams_per_unit(), Some(1.0));
    }
}
