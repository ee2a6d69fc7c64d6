use super::pricing::PricingCategory;
use super::seat::SeatingPlace;

/// Найденный вариант: ровно `party_requested` мест.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingOptionIsSuggested {
    party_requested: usize,
    pricing_category: PricingCategory,
    seats: Vec<SeatingPlace>,
}

impl SeatingOptionIsSuggested {
    pub fn party_requested(&self) -> usize {
        self.party_requested
    }

    pub fn pricing_category(&self) -> PricingCategory {
        self.pricing_category
    }

    pub fn seats(&self) -> &[SeatingPlace] {
        &self.seats
    }

    pub fn seat_names(&self) -> Vec<String> {
        self.seats.iter().map(SeatingPlace::name).collect()
    }
}

/// Результат одного поиска в ряду или в зале.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatingOption {
    Suggested(SeatingOptionIsSuggested),
    NotAvailable {
        party_requested: usize,
        pricing_category: PricingCategory,
    },
}

impl SeatingOption {
    /// Вариант считается найденным, только если мест ровно столько, сколько просили.
    /// Иначе - `NotAvailable`, даже если часть мест нашлась.
    pub fn suggested(
        party_requested: usize,
        pricing_category: PricingCategory,
        seats: Vec<SeatingPlace>,
    ) -> Self {
        if party_requested == 0 || seats.len() != party_requested {
            return Self::not_available(party_requested, pricing_category);
        }
        Self::Suggested(SeatingOptionIsSuggested {
            party_requested,
            pricing_category,
            seats,
        })
    }

    pub fn not_available(party_requested: usize, pricing_category: PricingCategory) -> Self {
        Self::NotAvailable {
            party_requested,
            pricing_category,
        }
    }

    pub fn match_expectation(&self) -> bool {
        matches!(self, Self::Suggested(_))
    }

    pub fn party_requested(&self) -> usize {
        match self {
            Self::Suggested(suggested) => suggested.party_requested,
            Self::NotAvailable { party_requested, .. } => *party_requested,
        }
    }

    pub fn pricing_category(&self) -> PricingCategory {
        match self {
            Self::Suggested(suggested) => suggested.pricing_category,
            Self::NotAvailable { pricing_category, .. } => *pricing_category,
        }
    }

    pub fn seats(&self) -> &[SeatingPlace] {
        match self {
            Self::Suggested(suggested) => &suggested.seats,
            Self::NotAvailable { .. } => &[],
        }
    }
}
