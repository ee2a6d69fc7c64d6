use std::collections::BTreeMap;

use serde::Serialize;

use super::option::SeatingOptionIsSuggested;
use super::pricing::PricingCategory;

/// Разделитель имён мест внутри одной группы: "A5-A6".
pub const SEAT_NAMES_SEPARATOR: &str = "-";

/// Принятое предложение: группа мест, которую можно показать зрителю.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionIsMade {
    seat_names: Vec<String>,
    party_requested: usize,
    pricing_category: PricingCategory,
}

impl SuggestionIsMade {
    pub fn seat_names(&self) -> &[String] {
        &self.seat_names
    }

    pub fn pricing_category(&self) -> PricingCategory {
        self.pricing_category
    }

    pub fn party_requested(&self) -> usize {
        self.party_requested
    }

    pub fn match_expectation(&self) -> bool {
        self.seat_names.len() == self.party_requested
    }

    /// Имена мест группы через дефис.
    pub fn group_name(&self) -> String {
        self.seat_names.join(SEAT_NAMES_SEPARATOR)
    }
}

impl From<&SeatingOptionIsSuggested> for SuggestionIsMade {
    fn from(option: &SeatingOptionIsSuggested) -> Self {
        Self {
            seat_names: option.seat_names(),
            party_requested: option.party_requested(),
            pricing_category: option.pricing_category(),
        }
    }
}

/// Предложения по всем категориям для одного запроса.
/// Список есть для каждой категории, в том числе пустой.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionsAreMade {
    show_id: String,
    party_requested: usize,
    for_category: BTreeMap<PricingCategory, Vec<SuggestionIsMade>>,
}

impl SuggestionsAreMade {
    pub fn new(
        show_id: impl Into<String>,
        party_requested: usize,
        suggestions: impl IntoIterator<Item = SuggestionIsMade>,
    ) -> Self {
        let mut for_category: BTreeMap<PricingCategory, Vec<SuggestionIsMade>> = PricingCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for suggestion in suggestions {
            for_category
                .entry(suggestion.pricing_category())
                .or_default()
                .push(suggestion);
        }

        Self {
            show_id: show_id.into(),
            party_requested,
            for_category,
        }
    }

    pub fn show_id(&self) -> &str {
        &self.show_id
    }

    pub fn party_requested(&self) -> usize {
        self.party_requested
    }

    pub fn suggestions(&self, pricing_category: PricingCategory) -> &[SuggestionIsMade] {
        self.for_category
            .get(&pricing_category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Группы мест категории в порядке, в котором они были найдены.
    pub fn seat_names(&self, pricing_category: PricingCategory) -> Vec<String> {
        self.suggestions(pricing_category)
            .iter()
            .map(SuggestionIsMade::group_name)
            .collect()
    }

    pub fn match_expectations(&self) -> bool {
        self.for_category
            .values()
            .flatten()
            .any(SuggestionIsMade::match_expectation)
    }
}

/// Итог подбора: либо предложения есть хотя бы в одной категории, либо их нет совсем.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    AreMade(SuggestionsAreMade),
    AreNotAvailable {
        show_id: String,
        party_requested: usize,
    },
}

impl Suggestions {
    pub fn show_id(&self) -> &str {
        match self {
            Suggestions::AreMade(made) => made.show_id(),
            Suggestions::AreNotAvailable { show_id, .. } => show_id,
        }
    }

    pub fn party_requested(&self) -> usize {
        match self {
            Suggestions::AreMade(made) => made.party_requested(),
            Suggestions::AreNotAvailable { party_requested, .. } => *party_requested,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Suggestions::AreMade(_))
    }

    pub fn seat_names(&self, pricing_category: PricingCategory) -> Vec<String> {
        match self {
            Suggestions::AreMade(made) => made.seat_names(pricing_category),
            Suggestions::AreNotAvailable { .. } => Vec::new(),
        }
    }

    /// Форма ответа наружу: все четыре категории присутствуют всегда.
    pub fn to_batch(&self) -> SuggestionBatch {
        SuggestionBatch {
            show_id: self.show_id().to_string(),
            party_size: self.party_requested(),
            suggestions: PricingCategory::ALL
                .iter()
                .map(|category| (*category, self.seat_names(*category)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBatch {
    pub show_id: String,
    pub party_size: usize,
    pub suggestions: BTreeMap<PricingCategory, Vec<String>>,
}
