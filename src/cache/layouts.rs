use crate::cache::CacheService;
use crate::models::SeatLayoutRecord;
use redis::AsyncCommands;

/// Ключ схемы зала сеанса в Redis.
pub fn layout_key(show_id: &str) -> String {
    format!("auditorium:{}", show_id)
}

impl CacheService {
    /// Схема зала из кеша. `None` - промах.
    pub async fn get_layout(
        &self,
        show_id: &str,
    ) -> Result<Option<Vec<SeatLayoutRecord>>, redis::RedisError> {
        let mut conn = self.redis.conn.clone();
        let data: Option<String> = conn.get(layout_key(show_id)).await?;

        match data {
            Some(data) => {
                let records = serde_json::from_str(&data).map_err(|_| {
                    redis::RedisError::from((redis::ErrorKind::TypeError, "Parse error"))
                })?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    pub async fn save_layout(
        &self,
        show_id: &str,
        records: &[SeatLayoutRecord],
    ) -> Result<(), redis::RedisError> {
        let data = serde_json::to_string(records).map_err(|_| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialize error"))
        })?;
        let mut conn = self.redis.conn.clone();
        conn.set_ex(layout_key(show_id), data, self.layout_ttl_seconds()).await
    }
}
