use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Строка таблицы `auditorium_seats`: одно место в схеме зала сеанса.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SeatLayoutRecord {
    pub row_name: String,
    pub row_position: i32,
    pub seat_name: String,
    pub seat_position: i32,
    pub category: i32,
}
