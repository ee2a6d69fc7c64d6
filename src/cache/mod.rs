use crate::redis_client::RedisClient;

pub mod layouts;

/// Кеш схем залов в Redis.
///
/// Кешируется только схема (она меняется редко). Брони всегда читаются из БД.
#[derive(Clone)]
pub struct CacheService {
    redis: RedisClient,
    layout_ttl_seconds: u64,
}

impl CacheService {
    pub fn new(redis: RedisClient, layout_ttl_seconds: u64) -> Self {
        Self {
            redis,
            layout_ttl_seconds,
        }
    }

    pub fn layout_ttl_seconds(&self) -> u64 {
        self.layout_ttl_seconds
    }
}
