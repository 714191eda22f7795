use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::taxonomy::PositionCategory;
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Хранилище недоступно. Ошибка пробрасывается вызывающему как есть:
    /// без повторов и без частичных результатов.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Доступ движка к опубликованным записям платформы.
///
/// Контракт реализации: возвращаются только активные опубликованные записи;
/// фильтр по категориям сужает выборку до пересечения с переданным
/// множеством (это ограничение размера пула, а не корректности), None
/// означает выборку без ограничения по категориям.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn find_active_vacancies(
        &self,
        categories: Option<&HashSet<PositionCategory>>,
    ) -> Result<Vec<JobPosting>, RepositoryError>;

    async fn find_active_resumes(
        &self,
        categories: Option<&HashSet<PositionCategory>>,
    ) -> Result<Vec<CandidateProfile>, RepositoryError>;
}
