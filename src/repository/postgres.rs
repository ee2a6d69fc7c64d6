use tracing::{debug, info, warn};

use super::{adapt, AuditoriumSeatingArrangements};
use crate::cache::CacheService;
use crate::database::Database;
use crate::error::RepositoryError;
use crate::models::{AuditoriumDto, ReservedSeatsDto, SeatDto, SeatLayoutRecord};
use crate::seating::AuditoriumSeatingArrangement;

/// Схемы залов и брони из Postgres. Схема кешируется в Redis, если он настроен.
#[derive(Clone)]
pub struct PgAuditoriumSeatingArrangements {
    db: Database,
    cache: Option<CacheService>,
}

impl PgAuditoriumSeatingArrangements {
    pub fn new(db: Database, cache: Option<CacheService>) -> Self {
        Self { db, cache }
    }

    // Прогрев кеша схем при старте
    pub async fn warmup_cache(&self) {
        let Some(cache) = &self.cache else {
            return;
        };
        info!("Starting layout cache warmup...");

        let show_ids = match self.load_show_ids().await {
            Ok(show_ids) => show_ids,
            Err(e) => {
                warn!("Layout cache warmup skipped: {}", e);
                return;
            }
        };

        let mut cached = 0;
        for show_id in &show_ids {
            match self.load_layout_from_db(show_id).await {
                Ok(records) => {
                    if layout_saved(show_id, cache.save_layout(show_id, &records).await) {
                        cached += 1;
                    }
                }
                Err(e) => warn!("Layout for show {} not loaded: {}", show_id, e),
            }
        }

        info!("Layout cache warmed up for {} of {} shows", cached, show_ids.len());
    }

    async fn layout(&self, show_id: &str) -> Result<Vec<SeatLayoutRecord>, RepositoryError> {
        // Сначала пробуем кеш
        if let Some(cache) = &self.cache {
            match cache.get_layout(show_id).await {
                Ok(Some(records)) => {
                    debug!("Layout cache hit for show {}", show_id);
                    return Ok(records);
                }
                Ok(None) => debug!("Layout cache miss for show {}", show_id),
                Err(e) => warn!("Layout cache unavailable: {}", e),
            }
        }

        // Если в кеше нет - идем в БД
        let records = self.load_layout_from_db(show_id).await?;
        if let Some(cache) = &self.cache {
            if !records.is_empty() {
                layout_saved(show_id, cache.save_layout(show_id, &records).await);
            }
        }
        Ok(records)
    }

    async fn load_layout_from_db(
        &self,
        show_id: &str,
    ) -> Result<Vec<SeatLayoutRecord>, sqlx::Error> {
        sqlx::query_as::<_, SeatLayoutRecord>(
            "SELECT row_name, row_position, seat_name, seat_position, category
             FROM auditorium_seats
             WHERE show_id = $1
             ORDER BY row_position, seat_position",
        )
        .bind(show_id)
        .fetch_all(&self.db.pool)
        .await
    }

    async fn load_reserved_seats(&self, show_id: &str) -> Result<ReservedSeatsDto, sqlx::Error> {
        let reserved_seats = sqlx::query_scalar::<_, String>(
            "SELECT seat_name FROM reserved_seats WHERE show_id = $1",
        )
        .bind(show_id)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(ReservedSeatsDto { reserved_seats })
    }

    async fn load_show_ids(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT show_id FROM auditorium_seats")
            .fetch_all(&self.db.pool)
            .await
    }
}

impl AuditoriumSeatingArrangements for PgAuditoriumSeatingArrangements {
    async fn find_by_show_id(
        &self,
        show_id: &str,
    ) -> Result<AuditoriumSeatingArrangement, RepositoryError> {
        let records = self.layout(show_id).await?;
        if records.is_empty() {
            warn!("No auditorium layout for show {}", show_id);
        }
        let reserved = self.load_reserved_seats(show_id).await?;

        adapt(show_id, &group_rows(records), &reserved)
    }
}

fn layout_saved(show_id: &str, result: Result<(), redis::RedisError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Layout for show {} not cached: {}", show_id, e);
            false
        }
    }
}

/// Собирает строки таблицы (уже упорядоченные по ряду и месту) в схему зала.
pub(crate) fn group_rows(records: Vec<SeatLayoutRecord>) -> AuditoriumDto {
    let mut rows: Vec<(String, Vec<SeatDto>)> = Vec::new();

    for record in records {
        let seat = SeatDto {
            name: record.seat_name,
            category: record.category,
        };
        match rows.last_mut() {
            Some((row_name, seats)) if *row_name == record.row_name => seats.push(seat),
            _ => rows.push((record.row_name, vec![seat])),
        }
    }

    AuditoriumDto {
        rows,
        corridors: Vec::new(),
    }
}
