use redis::{aio::MultiplexedConnection, Client};

use crate::config::RedisConfig;

/// Одно мультиплексированное соединение на всё приложение; клоны дешёвые.
#[derive(Clone)]
pub struct RedisClient {
    pub conn: MultiplexedConnection,
}

impl RedisClient {
    pub async fn connect(config: &RedisConfig) -> redis::RedisResult<Self> {
        let conn = Client::open(config.url.as_str())?
            .get_multiplexed_tokio_connection()
            .await?;
        Ok(RedisClient { conn })
    }
}
