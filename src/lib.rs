pub mod experience;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod repository;
pub mod salary;
pub mod taxonomy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taxonomy::PositionCategory;

/// Статус резюме. Фильтрация по статусу выполняется на стороне хранилища,
/// в скоринг неактивные записи не попадают.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

/// Статус вакансии.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum VacancyStatus {
    #[default]
    Active,
    Paused,
    Archived,
    Closed,
}

/// Запись об образовании в резюме.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    /// Уровень свободным текстом: "Высшее", "Среднее специальное" и т.д.
    pub level: Option<String>,
    pub institution: String,
    pub graduation_year: Option<i32>,
}

/// Владение языком: название + уровень (A1..C2, "Носитель языка").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

// Commonly used data models for matching functions. The repository
// collaborator maps its storage documents onto these shapes; the engine
// treats both records as read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub desired_position: Option<String>,
    pub position_category: Option<PositionCategory>,
    pub city: Option<String>,
    pub ready_to_relocate: bool,
    /// Предпочтения по формату работы. None = кандидат не указал.
    pub prefers_remote: Option<bool>,
    pub prefers_office: Option<bool>,
    pub prefers_hybrid: Option<bool>,
    pub desired_salary: Option<u32>,
    pub total_experience_years: Option<i32>,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub work_schedule: Vec<String>,
    pub languages: Vec<LanguageSkill>,
    pub status: ResumeStatus,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    pub position: Option<String>,
    pub position_category: Option<PositionCategory>,
    pub city: Option<String>,
    pub allows_remote_work: bool,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub work_schedule: Vec<String>,
    /// Требование к опыту свободным текстом: "От 3 лет", "Без опыта" и т.д.
    pub required_experience: Option<String>,
    /// Требование к образованию свободным текстом: "Высшее", "Не имеет значения".
    pub required_education: Option<String>,
    pub required_skills: Vec<String>,
    pub status: VacancyStatus,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}
