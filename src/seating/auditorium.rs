use std::collections::HashSet;

use super::option::SeatingOption;
use super::pricing::PricingCategory;
use super::row::Row;
use super::seat::SeatingPlace;

/// Снимок зала на конкретный сеанс: ряды в порядке схемы.
///
/// Порядок рядов значим - поиск идёт по нему, и он сохраняется при `allocate`.
/// Ряды ищутся по имени; повторное имя заменяет ранее добавленный ряд на его же месте.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditoriumSeatingArrangement {
    rows: Vec<Row>,
}

impl AuditoriumSeatingArrangement {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut ordered: Vec<Row> = Vec::new();
        for row in rows {
            match ordered.iter_mut().find(|existing| existing.name() == row.name()) {
                Some(existing) => *existing = row,
                None => ordered.push(row),
            }
        }
        Self { rows: ordered }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Первый ряд (в порядке схемы), в котором нашёлся вариант.
    ///
    /// Ряды между собой не ранжируются: лучший по центру вариант в дальнем ряду
    /// проиграет любому варианту в более раннем.
    pub fn suggest_seating_option_for(
        &self,
        party_requested: usize,
        pricing_category: PricingCategory,
    ) -> SeatingOption {
        self.rows
            .iter()
            .map(|row| row.suggest_seating_option(party_requested, pricing_category))
            .find(SeatingOption::match_expectation)
            .unwrap_or_else(|| SeatingOption::not_available(party_requested, pricing_category))
    }

    /// Новый снимок, где переданные места выделены. Исходный снимок не меняется.
    pub fn allocate(&self, seats: &[SeatingPlace]) -> Self {
        let names: HashSet<String> = seats.iter().map(SeatingPlace::name).collect();
        Self {
            rows: self.rows.iter().map(|row| row.allocate_names(&names)).collect(),
        }
    }
}
