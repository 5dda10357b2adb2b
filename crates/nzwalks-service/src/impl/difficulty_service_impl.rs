//! Difficulty service implementation.

use crate::difficulty_service::DifficultyService;
use crate::dto::DifficultyDto;
use async_trait::async_trait;
use nzwalks_core::{DifficultyId, NzWalksResult};
use nzwalks_repository::DifficultyRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Difficulty service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = DifficultyService)]
pub struct DifficultyServiceComponent {
    #[shaku(inject)]
    difficulty_repository: Arc<dyn DifficultyRepository>,
}

impl DifficultyServiceComponent {
    #[must_use]
    pub fn new(difficulty_repository: Arc<dyn DifficultyRepository>) -> Self {
        Self { difficulty_repository }
    }
}

#[async_trait]
impl DifficultyService for DifficultyServiceComponent {
    async fn list_difficulties(&self) -> NzWalksResult<Vec<DifficultyDto>> {
        debug!("Listing difficulties");

        let difficulties = self.difficulty_repository.get_all().await?;
        Ok(difficulties.into_iter().map(DifficultyDto::from).collect())
    }

    async fn get_difficulty(&self, id: DifficultyId) -> NzWalksResult<Option<DifficultyDto>> {
        debug!("Getting difficulty: {}", id);

        Ok(self.difficulty_repository.get_by_id(id).await?.map(DifficultyDto::from))
    }
}

impl std::fmt::Debug for DifficultyServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DifficultyServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use nzwalks_core::{Difficulty, HARD_DIFFICULTY_ID};

    mock! {
        DifficultyRepo {}

        #[async_trait]
        impl DifficultyRepository for DifficultyRepo {
            async fn get_all(&self) -> NzWalksResult<Vec<Difficulty>>;
            async fn get_by_id(&self, id: DifficultyId) -> NzWalksResult<Option<Difficulty>>;
            async fn count(&self) -> NzWalksResult<u64>;
        }
    }

    #[tokio::test]
    async fn test_list_difficulties() {
        let mut repo = MockDifficultyRepo::new();
        repo.expect_get_all().returning(|| Ok(Difficulty::seeded()));

        let service = DifficultyServiceComponent::new(Arc::new(repo));
        let names: Vec<String> = service
            .list_difficulties()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    }

    #[tokio::test]
    async fn test_get_difficulty() {
        let mut repo = MockDifficultyRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Difficulty::seeded().into_iter().find(|d| d.id == id)));

        let service = DifficultyServiceComponent::new(Arc::new(repo));
        let hard = service.get_difficulty(HARD_DIFFICULTY_ID).await.unwrap();
        assert_eq!(hard.map(|d| d.name), Some("Hard".to_string()));
        assert!(service.get_difficulty(DifficultyId::new()).await.unwrap().is_none());
    }
}
