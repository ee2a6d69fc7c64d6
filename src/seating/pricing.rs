use serde::{Deserialize, Serialize};

use crate::error::SeatingError;

/// Ценовая категория места.
///
/// `Mixed` - синтетическая категория "любая цена": ни одно место к ней не относится,
/// но при поиске она совпадает с любым местом. Стоит последней, чтобы конкретные
/// категории перебирались раньше.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PricingCategory {
    First = 1,
    Second = 2,
    Third = 3,
    Mixed = 4,
}

impl PricingCategory {
    /// Фиксированный порядок перебора категорий при подборе предложений.
    pub const ALL: [PricingCategory; 4] = [
        PricingCategory::First,
        PricingCategory::Second,
        PricingCategory::Third,
        PricingCategory::Mixed,
    ];

    /// Категория места по числовому коду из схемы зала (1..=3).
    pub fn from_code(code: i32) -> Result<Self, SeatingError> {
        match code {
            1 => Ok(PricingCategory::First),
            2 => Ok(PricingCategory::Second),
            3 => Ok(PricingCategory::Third),
            other => Err(SeatingError::UnknownPricingCategory(other)),
        }
    }

    /// Подходит ли место категории `seat_category` под запрошенную категорию.
    pub fn matches(self, seat_category: PricingCategory) -> bool {
        self == PricingCategory::Mixed || self == seat_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_categories_match_only_themselves() {
        assert!(PricingCategory::First.matches(PricingCategory::First));
        assert!(!PricingCategory::First.matches(PricingCategory::Second));
        assert!(!PricingCategory::Third.matches(PricingCategory::Second));
    }

    #[test]
    fn mixed_matches_every_category() {
        for category in [PricingCategory::First, PricingCategory::Second, PricingCategory::Third] {
            assert!(PricingCategory::Mixed.matches(category));
        }
    }

    #[test]
    fn mixed_is_enumerated_last() {
        assert_eq!(PricingCategory::ALL.last(), Some(&PricingCategory::Mixed));
    }

    #[test]
    fn from_code_rejects_unknown_and_synthetic_codes() {
        assert_eq!(PricingCategory::from_code(2).unwrap(), PricingCategory::Second);
        assert!(matches!(
            PricingCategory::from_code(4),
            Err(SeatingError::UnknownPricingCategory(4))
        ));
        assert!(PricingCategory::from_code(0).is_err());
    }

    #[test]
    fn serializes_as_uppercase_name() {
        let json = serde_json::to_string(&PricingCategory::Mixed).unwrap();
        assert_eq!(json, "\"MIXED\"");
    }
}
