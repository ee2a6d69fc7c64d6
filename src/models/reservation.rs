use serde::{Deserialize, Serialize};

/// Уже забронированные места сеанса.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedSeatsDto {
    #[serde(rename = "ReservedSeats", default)]
    pub reserved_seats: Vec<String>,
}
