use std::fmt;

use super::pricing::PricingCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatingPlaceAvailability {
    Available,
    Reserved,
    Allocated,
}

/// Место в зале. Значение без собственной идентичности: два места равны,
/// если совпадают все четыре атрибута.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatingPlace {
    row_name: String,
    number: u32,
    pricing_category: PricingCategory,
    availability: SeatingPlaceAvailability,
}

impl SeatingPlace {
    pub fn new(
        row_name: impl Into<String>,
        number: u32,
        pricing_category: PricingCategory,
        availability: SeatingPlaceAvailability,
    ) -> Self {
        Self {
            row_name: row_name.into(),
            number,
            pricing_category,
            availability,
        }
    }

    pub fn row_name(&self) -> &str {
        &self.row_name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn pricing_category(&self) -> PricingCategory {
        self.pricing_category
    }

    pub fn availability(&self) -> SeatingPlaceAvailability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability == SeatingPlaceAvailability::Available
    }

    pub fn match_category(&self, pricing_category: PricingCategory) -> bool {
        pricing_category.matches(self.pricing_category)
    }

    /// Имя места: ряд + номер, например "A3".
    pub fn name(&self) -> String {
        format!("{}{}", self.row_name, self.number)
    }

    /// Копия места в статусе `Allocated`. Занятые и уже выделенные места не меняются.
    pub fn allocate(&self) -> Self {
        match self.availability {
            SeatingPlaceAvailability::Available => Self {
                availability: SeatingPlaceAvailability::Allocated,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for SeatingPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_name, self.number)
    }
}
