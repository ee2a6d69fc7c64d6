use std::collections::HashSet;

use super::adjacent::AdjacentSeats;
use super::distance::DistanceFromRowCenter;
use super::option::SeatingOption;
use super::pricing::PricingCategory;
use super::seat::SeatingPlace;

/// Ряд зала: упорядоченные места в порядке нумерации схемы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    name: String,
    seating_places: Vec<SeatingPlace>,
}

impl Row {
    pub fn new(name: impl Into<String>, seating_places: Vec<SeatingPlace>) -> Self {
        Self {
            name: name.into(),
            seating_places,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seating_places(&self) -> &[SeatingPlace] {
        &self.seating_places
    }

    pub fn size(&self) -> usize {
        self.seating_places.len()
    }

    /// Лучший вариант на `party_requested` мест категории `pricing_category` в этом ряду.
    pub fn suggest_seating_option(
        &self,
        party_requested: usize,
        pricing_category: PricingCategory,
    ) -> SeatingOption {
        if party_requested == 0 {
            return SeatingOption::not_available(party_requested, pricing_category);
        }

        let available: Vec<&SeatingPlace> = self
            .seating_places
            .iter()
            .filter(|seat| seat.is_available() && seat.match_category(pricing_category))
            .collect();

        if available.len() < party_requested {
            return SeatingOption::not_available(party_requested, pricing_category);
        }

        let seats = if party_requested == 1 {
            self.nearest_single_seat(&available)
        } else {
            self.nearest_adjacent_seats(&available, party_requested)
        };

        match seats {
            Some(seats) => SeatingOption::suggested(party_requested, pricing_category, seats),
            None => SeatingOption::not_available(party_requested, pricing_category),
        }
    }

    fn nearest_single_seat(&self, available: &[&SeatingPlace]) -> Option<Vec<SeatingPlace>> {
        let row_size = self.size();
        available
            .iter()
            .min_by_key(|seat| {
                (
                    DistanceFromRowCenter::of_seat(seat.number(), row_size),
                    seat.number(),
                )
            })
            .map(|seat| vec![(*seat).clone()])
    }

    fn nearest_adjacent_seats(
        &self,
        available: &[&SeatingPlace],
        party_requested: usize,
    ) -> Option<Vec<SeatingPlace>> {
        let row_size = self.size();

        contiguous_blocks(available)
            .into_iter()
            .filter(|block| block.len() >= party_requested)
            .flat_map(|block| {
                block
                    .windows(party_requested)
                    .filter_map(|window| AdjacentSeats::of(window, row_size))
                    .collect::<Vec<_>>()
            })
            .min()
            .map(AdjacentSeats::into_seats)
    }

    /// Новый ряд, в котором места с теми же именами, что и в `seats`, выделены.
    pub fn allocate(&self, seats: &[SeatingPlace]) -> Row {
        let names: HashSet<String> = seats.iter().map(SeatingPlace::name).collect();
        self.allocate_names(&names)
    }

    pub(crate) fn allocate_names(&self, names: &HashSet<String>) -> Row {
        let seating_places = self
            .seating_places
            .iter()
            .map(|seat| {
                if names.contains(&seat.name()) {
                    seat.allocate()
                } else {
                    seat.clone()
                }
            })
            .collect();

        Row {
            name: self.name.clone(),
            seating_places,
        }
    }
}

/// Разбивает подходящие места на максимальные непрерывные блоки по номерам.
fn contiguous_blocks(available: &[&SeatingPlace]) -> Vec<Vec<SeatingPlace>> {
    let mut blocks: Vec<Vec<SeatingPlace>> = Vec::new();

    for seat in available {
        let extends_current = blocks
            .last()
            .and_then(|block| block.last())
            .is_some_and(|previous| previous.number().checked_add(1) == Some(seat.number()));

        match blocks.last_mut() {
            Some(block) if extends_current => block.push((*seat).clone()),
            _ => blocks.push(vec![(*seat).clone()]),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::SeatingPlaceAvailability::{self, Available, Reserved};
    use crate::seating::PricingCategory::{First, Second};

    fn row(layout: &[(PricingCategory, SeatingPlaceAvailability)]) -> Row {
        let seats = layout
            .iter()
            .enumerate()
            .map(|(i, (category, availability))| {
                SeatingPlace::new("A", i as u32 + 1, *category, *availability)
            })
            .collect();
        Row::new("A", seats)
    }

    fn names(option: &SeatingOption) -> Vec<String> {
        option.seats().iter().map(SeatingPlace::name).collect()
    }

    //      1   2   3   4   5   6   7   8   9  10
    //  A:  2   2   1  (1)  1   1   1  (1)  2   2
    fn row_with_gaps() -> Row {
        row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Reserved),
            (Second, Available),
            (Second, Available),
        ])
    }

    #[test]
    fn single_seat_nearest_the_middle_of_an_even_row() {
        let option = row_with_gaps().suggest_seating_option(1, First);
        assert_eq!(names(&option), vec!["A5"]);
    }

    #[test]
    fn single_seat_nearest_the_middle_of_an_odd_row() {
        //      1   2   3   4   5   6   7   8   9  10  11
        //  A:  2   2   1  (1)  1   1   1   1  (1)  2   2
        let row = row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Reserved),
            (Second, Available),
            (Second, Available),
        ]);
        let option = row.suggest_seating_option(1, First);
        assert_eq!(names(&option), vec!["A6"]);
    }

    #[test]
    fn only_available_seat_of_the_category_is_suggested() {
        //  A: (2) (2)  1  (1) (1) (1) (1) (1) (2) (2)
        let mut layout = vec![(First, Reserved); 10];
        layout[0] = (Second, Reserved);
        layout[1] = (Second, Reserved);
        layout[2] = (First, Available);
        layout[8] = (Second, Reserved);
        layout[9] = (Second, Reserved);
        let option = row(&layout).suggest_seating_option(1, First);
        assert_eq!(names(&option), vec!["A3"]);
    }

    #[test]
    fn adjacent_seats_skip_reserved_gaps() {
        // блоки первой категории: [3], [5, 6, 7]
        let option = row_with_gaps().suggest_seating_option(3, First);
        assert_eq!(names(&option), vec!["A5", "A6", "A7"]);
    }

    #[test]
    fn adjacent_seats_closest_to_the_middle_when_many_windows_fit() {
        let option = row(&[(First, Available); 10]).suggest_seating_option(3, First);
        assert_eq!(names(&option), vec!["A4", "A5", "A6"]);
    }

    #[test]
    fn equidistant_windows_prefer_the_lowest_seat_number() {
        let option = row_with_gaps().suggest_seating_option(2, Second);
        assert_eq!(names(&option), vec!["A1", "A2"]);
    }

    #[test]
    fn mixed_category_spans_several_price_categories() {
        let option = row_with_gaps().suggest_seating_option(4, PricingCategory::Mixed);
        // непрерывные блоки: [1, 2, 3], [5, 6, 7], [9, 10] - четырёх подряд нет
        assert!(!option.match_expectation());

        let option = row_with_gaps().suggest_seating_option(3, PricingCategory::Mixed);
        assert_eq!(names(&option), vec!["A5", "A6", "A7"]);
    }

    #[test]
    fn not_enough_adjacent_seats_is_not_available() {
        // 4 свободных места первой категории, но не подряд
        let option = row_with_gaps().suggest_seating_option(4, First);
        assert!(!option.match_expectation());
        assert_eq!(option.party_requested(), 4);
        assert_eq!(option.pricing_category(), First);
    }

    #[test]
    fn row_shorter_than_party_is_not_available() {
        let option = row(&[(First, Available); 3]).suggest_seating_option(4, First);
        assert!(!option.match_expectation());
    }

    #[test]
    fn exact_contiguous_match_is_taken_wherever_it_is() {
        let mut layout = vec![(First, Reserved); 10];
        layout[7] = (First, Available);
        layout[8] = (First, Available);
        let option = row(&layout).suggest_seating_option(2, First);
        assert_eq!(names(&option), vec!["A8", "A9"]);
    }

    #[test]
    fn fully_reserved_row_is_not_available() {
        let option = row(&[(First, Reserved); 10]).suggest_seating_option(1, First);
        assert!(!option.match_expectation());
    }

    #[test]
    fn empty_party_is_not_available() {
        let option = row(&[(First, Available); 10]).suggest_seating_option(0, First);
        assert!(!option.match_expectation());
    }

    #[test]
    fn allocate_returns_new_row_and_keeps_original() {
        let original = row(&[(First, Available), (First, Available)]);
        let first_seat = original.seating_places()[0].clone();

        let allocated = original.allocate(&[first_seat]);

        assert_ne!(allocated, original);
        assert!(original.seating_places()[0].is_available());
        assert!(!allocated.seating_places()[0].is_available());
        assert!(allocated.seating_places()[1].is_available());
    }

    #[test]
    fn allocated_seats_are_not_suggested_again() {
        let original = row(&[(First, Available); 10]);
        let first = original.suggest_seating_option(1, First);
        let next = original.allocate(first.seats()).suggest_seating_option(1, First);

        assert_eq!(names(&first), vec!["A5"]);
        assert_eq!(names(&next), vec!["A6"]);
    }

    #[test]
    fn rows_with_same_values_are_equal() {
        let seat = SeatingPlace::new("A", 1, First, Available);
        assert_eq!(Row::new("A", vec![seat.clone()]), Row::new("A", vec![seat]));
    }

    #[test]
    fn largest_seat_number_ends_its_block() {
        let row = Row::new(
            "A",
            vec![
                SeatingPlace::new("A", u32::MAX, First, Available),
                SeatingPlace::new("A", 1, First, Available),
            ],
        );

        let option = row.suggest_seating_option(2, First);

        assert!(!option.match_expectation());
    }

    #[test]
    fn far_numbered_pair_does_not_beat_the_pair_near_the_middle() {
        let row = Row::new(
            "A",
            [1, 2, 2_147_483_650, 2_147_483_651]
                .into_iter()
                .map(|n| SeatingPlace::new("A", n, First, Available))
                .collect(),
        );

        let option = row.suggest_seating_option(2, First);

        assert_eq!(names(&option), vec!["A1", "A2"]);
    }
}
