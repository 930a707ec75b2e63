use crate::config::DatabaseConfig;
use crate::models::Article;
use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use log::info;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Builds the pool and waits for its first connection, so an unreachable
/// database fails here rather than on the first request.
pub fn create_connection_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(config.connect_timeout)
        .build(manager)
        .with_context(|| {
            format!(
                "failed to connect to database {} on {}:{}",
                config.name, config.host, config.port
            )
        })?;
    Ok(pool)
}

#[cfg(test)]
pub(crate) fn create_connection(config: &DatabaseConfig) -> Result<PgConnection> {
    use diesel::Connection;
    Ok(PgConnection::establish(&config.database_url())?)
}

/// Article storage. Each call checks one connection out of the pool for a
/// single statement; the connection goes back when it drops.
#[derive(Clone)]
pub struct ArticleRepository {
    pool: DbPool,
}

impl ArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn initialize_schema(&self) -> Result<()> {
        let conn = self.pool.get()?;
        Article::create_table(&conn).context("failed to create the articles table")?;
        info!("articles table is ready");
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Article>> {
        let conn = self.pool.get()?;
        Ok(Article::list_all(&conn)?)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<Article>> {
        let conn = self.pool.get()?;
        Ok(Article::find_by_id(&conn, id)?)
    }

    pub fn create(&self, title: &str, content: &str) -> Result<Article> {
        let conn = self.pool.get()?;
        Ok(Article::create(&conn, title, content)?)
    }

    pub fn update(&self, id: i32, title: &str, content: &str) -> Result<Option<Article>> {
        let conn = self.pool.get()?;
        Ok(Article::update(&conn, id, title, content)?)
    }

    pub fn delete(&self, id: i32) -> Result<Option<i32>> {
        let conn = self.pool.get()?;
        Ok(Article::delete(&conn, id)?)
    }
}
