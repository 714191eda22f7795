use std::cmp::Ordering;

use thiserror::Error;
use tracing::instrument;

use super::scoring::{calculate_match_score, MatchScore};
use crate::repository::{MatchRepository, RepositoryError};
use crate::taxonomy::related_categories;
use crate::{CandidateProfile, JobPosting};

/// Рекомендаций в выдаче по умолчанию.
pub const DEFAULT_LIMIT: usize = 10;
/// Минимальный проходной балл по умолчанию.
pub const DEFAULT_MIN_SCORE: f64 = 40.0;

/// Параметры ранжирования. Движок применяет их как есть; валидация границ
/// (API платформы зажимает limit в 1..=50, min_score в 0..=100) лежит на
/// вызывающей стороне.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationParams {
    pub limit: usize,
    pub min_score: f64,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            limit: env_limit(),
            min_score: env_min_score(),
        }
    }
}

fn env_limit() -> usize {
    std::env::var("CLICK_RECOMMEND_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

fn env_min_score() -> f64 {
    std::env::var("CLICK_MIN_MATCH_SCORE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MIN_SCORE)
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    /// Ошибка хранилища пробрасывается без интерпретации.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Вакансия с результатом скоринга против резюме-якоря.
#[derive(Debug, Clone)]
pub struct VacancyRecommendation {
    pub vacancy: JobPosting,
    pub score: MatchScore,
}

/// Резюме с результатом скоринга против вакансии-якоря.
#[derive(Debug, Clone)]
pub struct ResumeRecommendation {
    pub resume: CandidateProfile,
    pub score: MatchScore,
}

/// Оркестратор рекомендаций: одна выборка пула из хранилища по смежным
/// категориям якоря, скоринг всех записей, отсечение по min_score,
/// устойчивая сортировка по убыванию балла и усечение до limit.
pub struct RecommendationEngine<R> {
    repository: R,
}

impl<R: MatchRepository> RecommendationEngine<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Подбор вакансий для резюме. Якорь без категории ранжируется по
    /// полному пулу и получает 0 по критерию позиции.
    #[instrument(skip(self, resume))]
    pub async fn recommend_vacancies_for_resume(
        &self,
        resume: &CandidateProfile,
        params: RecommendationParams,
    ) -> Result<Vec<VacancyRecommendation>, RecommendationError> {
        let filter = resume.position_category.map(related_categories);
        let pool = self
            .repository
            .find_active_vacancies(filter.as_ref())
            .await?;
        let pool_size = pool.len();

        let mut ranked: Vec<VacancyRecommendation> = pool
            .into_iter()
            .filter_map(|vacancy| {
                let score = calculate_match_score(resume, &vacancy);
                (score.total >= params.min_score)
                    .then_some(VacancyRecommendation { vacancy, score })
            })
            .collect();

        sort_and_truncate(&mut ranked, |r| r.score.total, params.limit);
        tracing::debug!(
            pool_size,
            kept = ranked.len(),
            min_score = params.min_score,
            "vacancies ranked for resume"
        );
        Ok(ranked)
    }

    /// Подбор резюме для вакансии, зеркально подбору вакансий.
    #[instrument(skip(self, vacancy))]
    pub async fn recommend_resumes_for_vacancy(
        &self,
        vacancy: &JobPosting,
        params: RecommendationParams,
    ) -> Result<Vec<ResumeRecommendation>, RecommendationError> {
        let filter = vacancy.position_category.map(related_categories);
        let pool = self.repository.find_active_resumes(filter.as_ref()).await?;
        let pool_size = pool.len();

        let mut ranked: Vec<ResumeRecommendation> = pool
            .into_iter()
            .filter_map(|resume| {
                let score = calculate_match_score(&resume, vacancy);
                (score.total >= params.min_score)
                    .then_some(ResumeRecommendation { resume, score })
            })
            .collect();

        sort_and_truncate(&mut ranked, |r| r.score.total, params.limit);
        tracing::debug!(
            pool_size,
            kept = ranked.len(),
            min_score = params.min_score,
            "resumes ranked for vacancy"
        );
        Ok(ranked)
    }
}

/// Устойчивая сортировка по убыванию: при равном балле сохраняется
/// порядок выборки из хранилища.
fn sort_and_truncate<T>(items: &mut Vec<T>, score_of: impl Fn(&T) -> f64, limit: usize) {
    items.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(Ordering::Equal)
    });
    items.truncate(limit);
}
