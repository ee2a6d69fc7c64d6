use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::{adapt, AuditoriumSeatingArrangements};
use crate::error::RepositoryError;
use crate::models::{AuditoriumDto, ReservedSeatsDto};
use crate::seating::AuditoriumSeatingArrangement;

const THEATER_SUFFIX: &str = "_theater.json";
const BOOKED_SEATS_SUFFIX: &str = "_booked_seats.json";

/// Схемы залов и брони из каталога JSON-заглушек.
///
/// Файлы называются `<showId>-<название зала>_theater.json` и
/// `<showId>-<название зала>_booked_seats.json`. Каталог читается один раз при старте.
#[derive(Debug, Clone, Default)]
pub struct FileAuditoriumSeatingArrangements {
    layouts: Arc<HashMap<String, AuditoriumDto>>,
    reservations: Arc<HashMap<String, ReservedSeatsDto>>,
}

impl FileAuditoriumSeatingArrangements {
    pub fn load(directory: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let directory = directory.as_ref();
        let io_error = |source| RepositoryError::Io {
            path: directory.display().to_string(),
            source,
        };

        let mut layouts = HashMap::new();
        let mut reservations = HashMap::new();

        for entry in fs::read_dir(directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(show_id) = show_id_of(file_name) else {
                continue;
            };

            if file_name.ends_with(THEATER_SUFFIX) {
                layouts.insert(show_id.to_string(), read_json::<AuditoriumDto>(&path)?);
            } else if file_name.ends_with(BOOKED_SEATS_SUFFIX) {
                reservations.insert(show_id.to_string(), read_json::<ReservedSeatsDto>(&path)?);
            }
        }

        info!(
            "Loaded {} auditorium layouts and {} reservation lists from {}",
            layouts.len(),
            reservations.len(),
            directory.display()
        );

        Ok(Self::from_parts(layouts, reservations))
    }

    pub fn from_parts(
        layouts: HashMap<String, AuditoriumDto>,
        reservations: HashMap<String, ReservedSeatsDto>,
    ) -> Self {
        Self {
            layouts: Arc::new(layouts),
            reservations: Arc::new(reservations),
        }
    }

    /// Схема зала; для неизвестного сеанса - пустая.
    pub fn layout(&self, show_id: &str) -> AuditoriumDto {
        self.layouts.get(show_id).cloned().unwrap_or_default()
    }

    /// Брони сеанса; для неизвестного сеанса - пустой список.
    pub fn reserved_seats(&self, show_id: &str) -> ReservedSeatsDto {
        self.reservations.get(show_id).cloned().unwrap_or_default()
    }

    pub fn show_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl AuditoriumSeatingArrangements for FileAuditoriumSeatingArrangements {
    async fn find_by_show_id(
        &self,
        show_id: &str,
    ) -> Result<AuditoriumSeatingArrangement, RepositoryError> {
        if !self.layouts.contains_key(show_id) {
            warn!("No auditorium layout for show {}", show_id);
        }
        adapt(show_id, &self.layout(show_id), &self.reserved_seats(show_id))
    }
}

// "18-New Amsterdam_theater.json" -> "18"
fn show_id_of(file_name: &str) -> Option<&str> {
    file_name
        .split_once('-')
        .map(|(show_id, _)| show_id)
        .filter(|show_id| !show_id.is_empty())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RepositoryError> {
    let content = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RepositoryError::Json {
        path: path.display().to_string(),
        source,
    })
}
