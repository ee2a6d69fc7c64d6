//! repository
//!
//! Источники снимков зала для движка подбора. Движку нужен один вызов -
//! `find_by_show_id`; откуда берутся схема и брони (файлы-заглушки или Postgres
//! с кешем в Redis), решает конфигурация.

pub mod files;
pub mod postgres;

use std::collections::HashSet;
use std::future::Future;

use crate::error::{RepositoryError, SeatingError};
use crate::models::{AuditoriumDto, ReservedSeatsDto, SeatDto};
use crate::seating::{
    AuditoriumSeatingArrangement, PricingCategory, Row, SeatingPlace, SeatingPlaceAvailability,
};

pub use files::FileAuditoriumSeatingArrangements;
pub use postgres::PgAuditoriumSeatingArrangements;

/// Снимок зала по идентификатору сеанса.
pub trait AuditoriumSeatingArrangements {
    fn find_by_show_id(
        &self,
        show_id: &str,
    ) -> impl Future<Output = Result<AuditoriumSeatingArrangement, RepositoryError>> + Send;
}

/// Источник, выбранный конфигурацией.
#[derive(Clone)]
pub enum Arrangements {
    Files(FileAuditoriumSeatingArrangements),
    Postgres(PgAuditoriumSeatingArrangements),
}

impl AuditoriumSeatingArrangements for Arrangements {
    async fn find_by_show_id(
        &self,
        show_id: &str,
    ) -> Result<AuditoriumSeatingArrangement, RepositoryError> {
        match self {
            Arrangements::Files(files) => files.find_by_show_id(show_id).await,
            Arrangements::Postgres(postgres) => postgres.find_by_show_id(show_id).await,
        }
    }
}

/// Собирает снимок зала из схемы и списка броней.
/// Забронированные места - `Reserved`, все остальные - `Available`.
pub fn adapt(
    show_id: &str,
    auditorium: &AuditoriumDto,
    reserved: &ReservedSeatsDto,
) -> Result<AuditoriumSeatingArrangement, RepositoryError> {
    let reserved: HashSet<&str> = reserved.reserved_seats.iter().map(String::as_str).collect();

    let rows = auditorium
        .rows
        .iter()
        .map(|(row_name, seats)| adapt_row(row_name, seats, &reserved))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RepositoryError::Layout {
            show_id: show_id.to_string(),
            source,
        })?;

    Ok(AuditoriumSeatingArrangement::new(rows))
}

fn adapt_row(row_name: &str, seats: &[SeatDto], reserved: &HashSet<&str>) -> Result<Row, SeatingError> {
    let seating_places = seats
        .iter()
        .map(|seat| {
            let number = extract_number(row_name, &seat.name)?;
            let pricing_category = PricingCategory::from_code(seat.category)?;
            let availability = if reserved.contains(seat.name.as_str()) {
                SeatingPlaceAvailability::Reserved
            } else {
                SeatingPlaceAvailability::Available
            };
            Ok(SeatingPlace::new(row_name, number, pricing_category, availability))
        })
        .collect::<Result<Vec<_>, SeatingError>>()?;

    Ok(Row::new(row_name, seating_places))
}

// "A10" в ряду "A" -> 10
fn extract_number(row_name: &str, seat_name: &str) -> Result<u32, SeatingError> {
    seat_name
        .strip_prefix(row_name)
        .and_then(|number| number.parse::<u32>().ok())
        .filter(|number| *number > 0)
        .ok_or_else(|| SeatingError::InvalidSeatName {
            row_name: row_name.to_string(),
            seat_name: seat_name.to_string(),
        })
}
