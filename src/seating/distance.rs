use std::fmt;

/// Насколько место (или группа мест) удалено от центра ряда.
///
/// Центр ряда длины `L` равен `(L + 1) / 2`. Значение хранится в половинах места,
/// чтобы чётные и нечётные ряды сравнивались точно, без плавающей точки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistanceFromRowCenter {
    half_seats: u64,
}

impl DistanceFromRowCenter {
    /// Расстояние одного места `seat_number` в ряду из `row_size` мест.
    pub fn of_seat(seat_number: u32, row_size: usize) -> Self {
        Self::of_window(seat_number, seat_number, row_size)
    }

    /// Расстояние от середины окна `[first..=last]` до центра ряда.
    pub fn of_window(first: u32, last: u32, row_size: usize) -> Self {
        // |(first + last) / 2 - (L + 1) / 2| * 2
        let window = i64::from(first) + i64::from(last);
        let row = row_size as i64 + 1;
        Self {
            half_seats: (window - row).unsigned_abs(),
        }
    }

    pub fn value(self) -> f64 {
        self.half_seats as f64 / 2.0
    }
}

impl fmt::Display for DistanceFromRowCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
