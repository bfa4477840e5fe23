use crate::{MAX_LIMIT, error::Result};
use futures::{StreamExt as _, TryStreamExt as _};
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::Pool;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateGame {
    // Accepted on update payloads, never read back - the store owns ids.
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(range(min = 1))]
    pub price: i64,
    #[garde(length(min = 1, max = 255))]
    pub developer: String,
    #[garde(length(min = 1, max = 255))]
    pub platform: String,
    #[garde(range(min = 1))]
    pub year_of_publication: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub developer: String,
    pub platform: String,
    pub year_of_publication: i64,
}

pub type GameRepository = GameRepositoryImpl<Pool<crate::ChosenDB>>;

pub struct GameRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> GameRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateGame) -> Result<Game> {
        let result = sqlx::query(
            "INSERT INTO games (name, price, developer, platform, year_of_publication) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.developer)
        .bind(&payload.platform)
        .bind(payload.year_of_publication)
        .execute(&self.executor)
        .await?;

        let id = result.last_insert_rowid();
        self.get(id).await
    }

    pub async fn update(&self, id: i64, payload: CreateGame) -> Result<Game> {
        let result = sqlx::query(
            "UPDATE games SET name = ?, price = ?, developer = ?, platform = ?, \
             year_of_publication = ? WHERE id = ?",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.developer)
        .bind(&payload.platform)
        .bind(payload.year_of_publication)
        .bind(id)
        .execute(&self.executor)
        .await?;

        if result.rows_affected() == 0 {
            Err(crate::Error::RecordNotFound(format!("Game {id}")))
        } else {
            self.get(id).await
        }
    }

    pub async fn get(&self, id: i64) -> Result<Game> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| crate::Error::RecordNotFound(format!("Game {id}")))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(
            "SELECT id, name, price, developer, platform, year_of_publication \
             FROM games WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.executor)
        .await?;
        Ok(game)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(&self.executor)
            .await?;

        if res.rows_affected() == 0 {
            debug!("Delete of game {id} matched no row");
            Err(crate::Error::RecordNotFound(format!("Game {id}")))
        } else {
            Ok(())
        }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Game>> {
        let games = sqlx::query_as::<_, Game>(
            "SELECT id, name, price, developer, platform, year_of_publication \
             FROM games WHERE name = ?",
        )
        .bind(name)
        .fetch(&self.executor)
        .take(MAX_LIMIT)
        .try_collect::<Vec<_>>()
        .await?;
        Ok(games)
    }

    pub async fn find_by_developer(&self, developer: &str) -> Result<Vec<Game>> {
        let games = sqlx::query_as::<_, Game>(
            "SELECT id, name, price, developer, platform, year_of_publication \
             FROM games WHERE developer = ?",
        )
        .bind(developer)
        .fetch(&self.executor)
        .take(MAX_LIMIT)
        .try_collect::<Vec<_>>()
        .await?;
        Ok(games)
    }

    pub async fn find_by_platform(&self, platform: &str) -> Result<Vec<Game>> {
        let games = sqlx::query_as::<_, Game>(
            "SELECT id, name, price, developer, platform, year_of_publication \
             FROM games WHERE platform = ?",
        )
        .bind(platform)
        .fetch(&self.executor)
        .take(MAX_LIMIT)
        .try_collect::<Vec<_>>()
        .await?;
        Ok(games)
    }
}
