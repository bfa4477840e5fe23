use gamedex_dal::Pool;
use gamedex_dal::game::{CreateGame, Game, GameRepository};

use crate::error::{ApiError, ApiResult};

pub struct GameService {
    repository: GameRepository,
}

impl GameService {
    pub fn new(pool: Pool) -> Self {
        Self {
            repository: GameRepository::new(pool),
        }
    }

    pub async fn save_game(&self, dto: CreateGame) -> ApiResult<Game> {
        let game = self.repository.create(dto).await?;
        Ok(game)
    }

    pub async fn get_game_by_id(&self, id: i64) -> ApiResult<Game> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::GameNotFound)
    }

    pub async fn update_game(&self, id: i64, dto: CreateGame) -> ApiResult<Game> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ApiError::GameNotFound);
        }
        let game = self.repository.update(id, dto).await?;
        Ok(game)
    }

    pub async fn delete_game_by_id(&self, id: i64) -> ApiResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    pub async fn find_all_by_name(&self, name: &str) -> ApiResult<Vec<Game>> {
        Ok(self.repository.find_by_name(name).await?)
    }

    pub async fn find_all_by_developer(&self, developer: &str) -> ApiResult<Vec<Game>> {
        Ok(self.repository.find_by_developer(developer).await?)
    }

    pub async fn find_all_by_platform(&self, platform: &str) -> ApiResult<Vec<Game>> {
        Ok(self.repository.find_by_platform(platform).await?)
    }
}
