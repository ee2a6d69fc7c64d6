use std::cmp::Ordering;

use super::distance::DistanceFromRowCenter;
use super::seat::SeatingPlace;

/// Кандидат: непрерывное окно мест нужной длины и его удалённость от центра ряда.
///
/// Сравнение - сначала по расстоянию, затем по номеру первого места окна.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentSeats {
    seats: Vec<SeatingPlace>,
    distance_from_row_center: DistanceFromRowCenter,
}

impl AdjacentSeats {
    /// `window` не может быть пустым.
    pub fn of(window: &[SeatingPlace], row_size: usize) -> Option<Self> {
        let first = window.first()?.number();
        let last = window.last()?.number();
        Some(Self {
            seats: window.to_vec(),
            distance_from_row_center: DistanceFromRowCenter::of_window(first, last, row_size),
        })
    }

    pub fn into_seats(self) -> Vec<SeatingPlace> {
        self.seats
    }

    pub fn distance_from_row_center(&self) -> DistanceFromRowCenter {
        self.distance_from_row_center
    }

    fn first_number(&self) -> u32 {
        self.seats.first().map(SeatingPlace::number).unwrap_or_default()
    }
}

impl Ord for AdjacentSeats {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_from_row_center
            .cmp(&other.distance_from_row_center)
            .then_with(|| self.first_number().cmp(&other.first_number()))
            .then_with(|| self.seats.len().cmp(&other.seats.len()))
    }
}

impl PartialOrd for AdjacentSeats {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
