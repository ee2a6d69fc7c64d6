use tracing::debug;

use super::auditorium::AuditoriumSeatingArrangement;
use super::option::SeatingOption;
use super::pricing::PricingCategory;
use super::suggestions::{SuggestionIsMade, Suggestions, SuggestionsAreMade};
use crate::error::RepositoryError;
use crate::repository::AuditoriumSeatingArrangements;

/// Сколько предложений максимум отдаём на одну категорию.
pub const NUMBER_OF_SUGGESTIONS: usize = 3;

/// Подбирает до трёх непересекающихся вариантов рассадки на каждую ценовую категорию.
#[derive(Debug, Clone)]
pub struct SeatingArrangementRecommender<A> {
    auditorium_seating_arrangements: A,
}

impl<A: AuditoriumSeatingArrangements> SeatingArrangementRecommender<A> {
    pub fn new(auditorium_seating_arrangements: A) -> Self {
        Self {
            auditorium_seating_arrangements,
        }
    }

    /// Снимок зала берётся один раз, дальше подбор идёт без обращений наружу.
    pub async fn make_suggestions(
        &self,
        show_id: &str,
        party_requested: usize,
    ) -> Result<Suggestions, RepositoryError> {
        let auditorium = self
            .auditorium_seating_arrangements
            .find_by_show_id(show_id)
            .await?;

        Ok(Self::suggestions_for(&auditorium, show_id, party_requested))
    }
}

impl<A> SeatingArrangementRecommender<A> {
    /// Чистая часть подбора над готовым снимком зала.
    ///
    /// Каждое найденное предложение выделяется в новом снимке, и следующие
    /// итерации (этой и последующих категорий) работают уже с ним.
    pub fn suggestions_for(
        auditorium: &AuditoriumSeatingArrangement,
        show_id: &str,
        party_requested: usize,
    ) -> Suggestions {
        let mut current = auditorium.clone();
        let mut found: Vec<SuggestionIsMade> = Vec::new();

        for pricing_category in PricingCategory::ALL {
            let (suggestions, next) =
                give_me_suggestions_for(current, party_requested, pricing_category);
            found.extend(suggestions);
            current = next;
        }

        let made = SuggestionsAreMade::new(show_id, party_requested, found);

        debug!(
            "Suggestions for show {} (party of {}): first={:?} second={:?} third={:?} mixed={:?}",
            show_id,
            party_requested,
            made.seat_names(PricingCategory::First),
            made.seat_names(PricingCategory::Second),
            made.seat_names(PricingCategory::Third),
            made.seat_names(PricingCategory::Mixed),
        );

        if made.match_expectations() {
            Suggestions::AreMade(made)
        } else {
            Suggestions::AreNotAvailable {
                show_id: show_id.to_string(),
                party_requested,
            }
        }
    }
}

/// До `NUMBER_OF_SUGGESTIONS` предложений одной категории.
/// Первый промах прекращает поиск в этой категории.
fn give_me_suggestions_for(
    auditorium: AuditoriumSeatingArrangement,
    party_requested: usize,
    pricing_category: PricingCategory,
) -> (Vec<SuggestionIsMade>, AuditoriumSeatingArrangement) {
    let mut current = auditorium;
    let mut suggestions = Vec::with_capacity(NUMBER_OF_SUGGESTIONS);

    while suggestions.len() < NUMBER_OF_SUGGESTIONS {
        match current.suggest_seating_option_for(party_requested, pricing_category) {
            SeatingOption::Suggested(suggested) => {
                current = current.allocate(suggested.seats());
                suggestions.push(SuggestionIsMade::from(&suggested));
            }
            SeatingOption::NotAvailable { .. } => break,
        }
    }

    (suggestions, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::{Row, SeatingPlace, SeatingPlaceAvailability};

    type Recommender = SeatingArrangementRecommender<()>;

    fn row(name: &str, categories: &[PricingCategory], reserved: &[u32]) -> Row {
        let seats = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let number = i as u32 + 1;
                let availability = if reserved.contains(&number) {
                    SeatingPlaceAvailability::Reserved
                } else {
                    SeatingPlaceAvailability::Available
                };
                SeatingPlace::new(name, number, *category, availability)
            })
            .collect();
        Row::new(name, seats)
    }

    fn uniform(name: &str, category: PricingCategory) -> Row {
        row(name, &[category; 10], &[])
    }

    #[test]
    fn caps_offers_at_three_per_category() {
        let auditorium = AuditoriumSeatingArrangement::new(
            ["A", "B", "C", "D"].map(|name| uniform(name, PricingCategory::First)),
        );

        let suggestions = Recommender::suggestions_for(&auditorium, "42", 1);

        assert_eq!(suggestions.seat_names(PricingCategory::First), vec!["A5", "A6", "A4"]);
    }

    #[test]
    fn seats_are_never_offered_twice_across_categories() {
        let auditorium = AuditoriumSeatingArrangement::new(vec![
            uniform("A", PricingCategory::First),
            uniform("B", PricingCategory::Second),
        ]);

        let suggestions = Recommender::suggestions_for(&auditorium, "42", 2);

        assert_eq!(
            suggestions.seat_names(PricingCategory::First),
            vec!["A5-A6", "A3-A4", "A7-A8"]
        );
        assert_eq!(
            suggestions.seat_names(PricingCategory::Second),
            vec!["B5-B6", "B3-B4", "B7-B8"]
        );
        assert_eq!(
            suggestions.seat_names(PricingCategory::Mixed),
            vec!["A1-A2", "A9-A10", "B1-B2"]
        );
    }

    #[test]
    fn category_stops_at_first_miss() {
        //      1   2   3   4   5   6   7   8   9  10
        //  A:  2   2   1   1   1   1   2   2   2   2
        let categories = [
            PricingCategory::Second,
            PricingCategory::Second,
            PricingCategory::First,
            PricingCategory::First,
            PricingCategory::First,
            PricingCategory::First,
            PricingCategory::Second,
            PricingCategory::Second,
            PricingCategory::Second,
            PricingCategory::Second,
        ];
        let auditorium = AuditoriumSeatingArrangement::new(vec![row("A", &categories, &[])]);

        let suggestions = Recommender::suggestions_for(&auditorium, "7", 2);

        assert_eq!(suggestions.seat_names(PricingCategory::First), vec!["A5-A6", "A3-A4"]);
        assert_eq!(
            suggestions.seat_names(PricingCategory::Second),
            vec!["A7-A8", "A1-A2", "A9-A10"]
        );
        assert!(suggestions.seat_names(PricingCategory::Third).is_empty());
        assert!(suggestions.seat_names(PricingCategory::Mixed).is_empty());
    }

    #[test]
    fn fully_reserved_auditorium_yields_no_suggestions() {
        let auditorium = AuditoriumSeatingArrangement::new(vec![row(
            "A",
            &[PricingCategory::First; 10],
            &(1..=10).collect::<Vec<u32>>(),
        )]);

        let suggestions = Recommender::suggestions_for(&auditorium, "5", 1);

        assert_eq!(
            suggestions,
            Suggestions::AreNotAvailable {
                show_id: "5".to_string(),
                party_requested: 1,
            }
        );
        assert!(!suggestions.is_available());
        assert!(suggestions.seat_names(PricingCategory::Mixed).is_empty());
    }

    #[test]
    fn original_snapshot_is_untouched() {
        let auditorium = AuditoriumSeatingArrangement::new(vec![uniform("A", PricingCategory::First)]);
        let before = auditorium.clone();

        let _ = Recommender::suggestions_for(&auditorium, "1", 3);

        assert_eq!(auditorium, before);
    }
}
