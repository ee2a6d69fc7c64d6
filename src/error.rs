use thiserror::Error;

/// Ошибки построения снимка зала из схемы.
/// Сам движок подбора не ошибается - "нет мест" это обычный результат.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatingError {
    #[error("unknown pricing category code {0}")]
    UnknownPricingCategory(i32),

    #[error("seat name {seat_name:?} does not belong to row {row_name:?}")]
    InvalidSeatName { row_name: String, seat_name: String },
}

/// Ошибки источника схем залов и бронирований.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read layouts from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed layout file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid layout for show {show_id}: {source}")]
    Layout {
        show_id: String,
        #[source]
        source: SeatingError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("LAYOUT_SOURCE must be `files` or `postgres`, got {0:?}")]
    UnknownLayoutSource(String),

    #[error("{0} must be set")]
    Missing(&'static str),
}
