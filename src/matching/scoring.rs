use serde::{Deserialize, Serialize};

use super::location::evaluate_location;
use super::position::{evaluate_position, PositionMatchType};
use super::round1;
use super::skills::evaluate_skills;
use super::weights::MAX_POINTS;
use crate::experience::{extract_required_years, requirement_waives_experience};
use crate::normalize::{nfkc_lower_trim, normalize_schedule_set};
use crate::salary::estimate_desired_salary;
use crate::taxonomy::LANGUAGE_NAMES;
use crate::{CandidateProfile, JobPosting};

/// Итог сопоставления пары резюме-вакансия: общий балл 0..100 (один знак
/// после запятой), разбивка по критериям и структура объяснения для UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    pub details: MatchDetails,
}

/// Баллы по критериям; максимумы заданы в weights и в сумме дают 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub position_score: f64,
    pub skills_score: f64,
    pub location_score: f64,
    pub salary_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub schedule_score: f64,
    pub language_score: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.position_score
            + self.skills_score
            + self.location_score
            + self.salary_score
            + self.experience_score
            + self.education_score
            + self.schedule_score
            + self.language_score
    }
}

/// Структура объяснения совпадения для карточки рекомендации.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub position_match: bool,
    pub position_match_type: PositionMatchType,
    pub location_match: bool,
    pub salary_compatible: bool,
    /// Подписанное отклонение ожиданий от ближайшей границы вилки, %.
    pub salary_difference_percent: Option<f64>,
    pub salary_estimated_from_experience: bool,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub skills_match_percent: f64,
    pub experience_sufficient: bool,
    pub experience_years_candidate: Option<i32>,
    pub experience_years_required: Option<i32>,
    pub education_match: bool,
    pub schedule_overlap: bool,
    /// None, если вакансия не содержит языковых требований.
    pub language_match: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct SalaryEvaluation {
    pub score: f64,
    pub compatible: bool,
    pub difference_percent: Option<f64>,
    pub estimated_from_experience: bool,
    pub details: String,
}

/// Совместимость зарплатных ожиданий с вилкой вакансии.
/// Без нижней границы у вакансии критерий не оценивается (нейтральные 7.5);
/// без желаемой зарплаты она оценивается по стажу через estimate_desired_salary.
pub fn evaluate_salary(resume: &CandidateProfile, vacancy: &JobPosting) -> SalaryEvaluation {
    let Some(salary_min) = vacancy.salary_min.filter(|v| *v > 0) else {
        return SalaryEvaluation {
            score: MAX_POINTS.salary / 2.0,
            compatible: false,
            difference_percent: None,
            estimated_from_experience: false,
            details: "Вакансия без зарплатной вилки, нейтральный балл".into(),
        };
    };

    let (desired, estimated) = match resume.desired_salary.filter(|v| *v > 0) {
        Some(value) => (value as f64, false),
        None => match resume.total_experience_years {
            Some(years) => (estimate_desired_salary(years) as f64, true),
            None => {
                return SalaryEvaluation {
                    score: MAX_POINTS.salary / 2.0,
                    compatible: false,
                    difference_percent: None,
                    estimated_from_experience: false,
                    details: "Ожидания и стаж не указаны, нейтральный балл".into(),
                };
            }
        },
    };

    let min = salary_min as f64;
    // salary_max ниже минимума считается опечаткой и игнорируется
    match vacancy.salary_max.filter(|v| *v >= salary_min) {
        Some(salary_max) => {
            let max = salary_max as f64;
            if desired >= min && desired <= max {
                return SalaryEvaluation {
                    score: MAX_POINTS.salary,
                    compatible: true,
                    difference_percent: Some(0.0),
                    estimated_from_experience: estimated,
                    details: format!("Ожидания {desired:.0} внутри вилки {min:.0}..{max:.0}"),
                };
            }

            let deviation = if desired > max {
                (desired - max) / max * 100.0
            } else {
                (desired - min) / min * 100.0
            };
            let score = match deviation.abs() {
                d if d <= 10.0 => 12.0,
                d if d <= 20.0 => 8.0,
                d if d <= 30.0 => 4.0,
                _ => 0.0,
            };

            SalaryEvaluation {
                score,
                compatible: false,
                difference_percent: Some(round1(deviation)),
                estimated_from_experience: estimated,
                details: format!(
                    "Ожидания {desired:.0} вне вилки {min:.0}..{max:.0} ({deviation:+.0}%)"
                ),
            }
        }
        None => {
            // Только нижняя граница: допустимая полоса +-20% от минимума
            let lower = min * 0.8;
            let upper = min * 1.2;
            let difference = round1((desired - min) / min * 100.0);

            if desired >= lower && desired <= upper {
                return SalaryEvaluation {
                    score: 12.0,
                    compatible: true,
                    difference_percent: Some(difference),
                    estimated_from_experience: estimated,
                    details: format!(
                        "Ожидания {desired:.0} в пределах 20% от минимума {min:.0}"
                    ),
                };
            }

            let band_deviation = if desired > upper {
                (desired - upper) / upper * 100.0
            } else {
                (lower - desired) / lower * 100.0
            };
            let score = if band_deviation <= 20.0 { 6.0 } else { 0.0 };

            SalaryEvaluation {
                score,
                compatible: false,
                difference_percent: Some(difference),
                estimated_from_experience: estimated,
                details: format!(
                    "Ожидания {desired:.0} за пределами полосы 20% от минимума {min:.0}"
                ),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceEvaluation {
    pub score: f64,
    pub sufficient: bool,
    pub candidate_years: Option<i32>,
    pub required_years: Option<i32>,
    pub details: String,
}

/// Стаж кандидата против требования вакансии. Лестница долей требования:
/// 100% и выше, 75%, 50%, 25%; ниже четверти остаётся минимальный балл 1,
/// чтобы не дисквалифицировать новичков полностью.
pub fn evaluate_experience(resume: &CandidateProfile, vacancy: &JobPosting) -> ExperienceEvaluation {
    let candidate_years = resume.total_experience_years;
    let requirement = vacancy
        .required_experience
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if let Some(requirement) = requirement {
        if requirement_waives_experience(requirement) {
            return ExperienceEvaluation {
                score: MAX_POINTS.experience,
                sufficient: true,
                candidate_years,
                required_years: Some(0),
                details: "Опыт не требуется".into(),
            };
        }

        if let Some(required) = extract_required_years(requirement) {
            let Some(actual) = candidate_years else {
                return ExperienceEvaluation {
                    score: 0.0,
                    sufficient: false,
                    candidate_years: None,
                    required_years: Some(required),
                    details: format!("Стаж кандидата не указан, требуется от {required} лет"),
                };
            };

            let ratio = actual.max(0) as f64 / required as f64;
            let (score, sufficient) = if ratio >= 1.0 {
                (MAX_POINTS.experience, true)
            } else if ratio >= 0.75 {
                (7.5, true)
            } else if ratio >= 0.5 {
                (5.0, false)
            } else if ratio >= 0.25 {
                (2.5, false)
            } else {
                (1.0, false)
            };

            return ExperienceEvaluation {
                score,
                sufficient,
                candidate_years,
                required_years: Some(required),
                details: format!("Стаж {actual} лет при требовании от {required} лет"),
            };
        }
    }

    // Требование отсутствует или не распознано: нейтральный балл
    ExperienceEvaluation {
        score: MAX_POINTS.experience / 2.0,
        sufficient: false,
        candidate_years,
        required_years: None,
        details: "Требование к опыту не распознано, нейтральный балл".into(),
    }
}

#[derive(Debug, Clone)]
pub struct EducationEvaluation {
    pub score: f64,
    pub education_match: bool,
    pub details: String,
}

/// Фразы "образование не важно" в требовании вакансии.
const EDUCATION_IRRELEVANT: &[&str] = &["не имеет значения", "не важно", "неважно", "любое"];

/// Ступень образования по ключевым словам: среднее(1) < среднее
/// специальное(2) < высшее(3) < несколько высших(4). Порядок проверок
/// учитывает вложенность фраз ("неоконченное высшее" раньше "высшее").
fn education_tier(text: &str) -> i32 {
    let text = nfkc_lower_trim(text);
    if text.contains("несколько высших") {
        4
    } else if text.contains("неоконченное высшее") || text.contains("незаконченное высшее") {
        2
    } else if text.contains("высшее") {
        3
    } else if text.contains("среднее специальное")
        || text.contains("среднее профессиональное")
        || text.contains("колледж")
        || text.contains("техникум")
    {
        2
    } else if text.contains("среднее") {
        1
    } else {
        0
    }
}

/// Уровень образования кандидата против требования вакансии.
pub fn evaluate_education(resume: &CandidateProfile, vacancy: &JobPosting) -> EducationEvaluation {
    let requirement = vacancy
        .required_education
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let Some(requirement) = requirement else {
        return EducationEvaluation {
            score: MAX_POINTS.education,
            education_match: true,
            details: "Требований к образованию нет".into(),
        };
    };

    let normalized_requirement = nfkc_lower_trim(requirement);
    if EDUCATION_IRRELEVANT
        .iter()
        .any(|phrase| normalized_requirement.contains(phrase))
    {
        return EducationEvaluation {
            score: MAX_POINTS.education,
            education_match: true,
            details: "Образование не имеет значения".into(),
        };
    }

    if resume.education.is_empty() {
        return EducationEvaluation {
            score: 0.0,
            education_match: false,
            details: format!("Образование не указано, требуется: {requirement}"),
        };
    }

    let required_tier = education_tier(requirement);
    let candidate_tier = resume
        .education
        .iter()
        .filter_map(|entry| entry.level.as_deref())
        .map(education_tier)
        .max()
        .unwrap_or(0);

    if candidate_tier >= required_tier {
        EducationEvaluation {
            score: MAX_POINTS.education,
            education_match: true,
            details: format!("Уровень образования достаточен: {requirement}"),
        }
    } else if candidate_tier == required_tier - 1 {
        EducationEvaluation {
            score: 2.5,
            education_match: false,
            details: format!("Образование на ступень ниже требуемого: {requirement}"),
        }
    } else {
        EducationEvaluation {
            score: 0.0,
            education_match: false,
            details: format!("Уровень образования ниже требуемого: {requirement}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleEvaluation {
    pub score: f64,
    pub overlap: bool,
    pub details: String,
}

/// Пересечение графиков работы. Вакансия без ограничений даёт полный балл,
/// пустой график кандидата оценивается нейтрально.
pub fn evaluate_schedule(resume: &CandidateProfile, vacancy: &JobPosting) -> ScheduleEvaluation {
    let required = normalize_schedule_set(&vacancy.work_schedule);
    if required.is_empty() {
        return ScheduleEvaluation {
            score: MAX_POINTS.schedule,
            overlap: true,
            details: "Ограничений по графику нет".into(),
        };
    }

    let candidate = normalize_schedule_set(&resume.work_schedule);
    if candidate.is_empty() {
        return ScheduleEvaluation {
            score: MAX_POINTS.schedule / 2.0,
            overlap: false,
            details: "График кандидата не указан, нейтральный балл".into(),
        };
    }

    if required.intersection(&candidate).next().is_some() {
        ScheduleEvaluation {
            score: MAX_POINTS.schedule,
            overlap: true,
            details: "Графики пересекаются".into(),
        }
    } else {
        ScheduleEvaluation {
            score: 0.0,
            overlap: false,
            details: "Графики не пересекаются".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageEvaluation {
    pub score: f64,
    pub language_match: Option<bool>,
    pub details: String,
}

/// Языковые требования живут внутри требуемых навыков вакансии
/// ("Английский язык"); ищем известные языки и сверяем с языками кандидата.
pub fn evaluate_language(resume: &CandidateProfile, vacancy: &JobPosting) -> LanguageEvaluation {
    if resume.languages.is_empty() {
        return LanguageEvaluation {
            score: MAX_POINTS.language / 2.0,
            language_match: None,
            details: "Языки кандидата не указаны, нейтральный балл".into(),
        };
    }

    let required_languages: Vec<&str> = LANGUAGE_NAMES
        .iter()
        .copied()
        .filter(|language| {
            vacancy
                .required_skills
                .iter()
                .any(|skill| nfkc_lower_trim(skill).contains(language))
        })
        .collect();

    if required_languages.is_empty() {
        return LanguageEvaluation {
            score: MAX_POINTS.language,
            language_match: None,
            details: "Языковых требований нет".into(),
        };
    }

    let candidate_languages: Vec<String> = resume
        .languages
        .iter()
        .map(|entry| nfkc_lower_trim(&entry.language))
        .collect();
    let overlap = required_languages
        .iter()
        .any(|required| candidate_languages.iter().any(|c| c.contains(required)));

    if overlap {
        LanguageEvaluation {
            score: MAX_POINTS.language,
            language_match: Some(true),
            details: format!("Требуемый язык есть: {}", required_languages.join(", ")),
        }
    } else {
        LanguageEvaluation {
            score: 0.0,
            language_match: Some(false),
            details: format!("Нет требуемых языков: {}", required_languages.join(", ")),
        }
    }
}

/// Итоговый балл пары: восемь критериев, сумма с зажимом в 0..100 и
/// округлением до одного знака. Чистая функция без побочных эффектов,
/// кроме отладочной трассировки; входные записи не изменяются.
pub fn calculate_match_score(resume: &CandidateProfile, vacancy: &JobPosting) -> MatchScore {
    let position = evaluate_position(resume.position_category, vacancy.position_category);
    let skills = evaluate_skills(&vacancy.required_skills, &resume.skills);
    let location = evaluate_location(resume, vacancy);
    let salary = evaluate_salary(resume, vacancy);
    let experience = evaluate_experience(resume, vacancy);
    let education = evaluate_education(resume, vacancy);
    let schedule = evaluate_schedule(resume, vacancy);
    let language = evaluate_language(resume, vacancy);

    let breakdown = ScoreBreakdown {
        position_score: position.score,
        skills_score: skills.score,
        location_score: location.score,
        salary_score: salary.score,
        experience_score: experience.score,
        education_score: education.score,
        schedule_score: schedule.score,
        language_score: language.score,
    };
    let total = round1(breakdown.sum().clamp(0.0, 100.0));

    tracing::debug!(
        total,
        position = %position.details,
        skills = %skills.details,
        location = %location.details,
        salary = %salary.details,
        experience = %experience.details,
        education = %education.details,
        schedule = %schedule.details,
        language = %language.details,
        "match score calculated"
    );

    MatchScore {
        total,
        breakdown,
        details: MatchDetails {
            position_match: position.match_type == PositionMatchType::Exact,
            position_match_type: position.match_type,
            location_match: location.location_match,
            salary_compatible: salary.compatible,
            salary_difference_percent: salary.difference_percent,
            salary_estimated_from_experience: salary.estimated_from_experience,
            skills_matched: skills.matched,
            skills_missing: skills.missing,
            skills_match_percent: skills.match_percent,
            experience_sufficient: experience.sufficient,
            experience_years_candidate: experience.candidate_years,
            experience_years_required: experience.required_years,
            education_match: education.education_match,
            schedule_overlap: schedule.overlap,
            language_match: language.language_match,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::PositionCategory;
    use crate::{Education, LanguageSkill};

    fn base_resume() -> CandidateProfile {
        CandidateProfile {
            desired_position: Some("Бармен".into()),
            position_category: Some(PositionCategory::Barman),
            city: Some("Москва".into()),
            desired_salary: Some(75_000),
            total_experience_years: Some(5),
            skills: vec![
                "Классические коктейли".into(),
                "Авторские коктейли".into(),
                "Флэр".into(),
                "Работа с POS-системой".into(),
            ],
            education: vec![Education {
                level: Some("Высшее".into()),
                institution: "МГУ".into(),
                graduation_year: Some(2018),
            }],
            work_schedule: vec!["Посменный график".into(), "Полный день".into()],
            languages: vec![LanguageSkill {
                language: "Английский".into(),
                level: "B2".into(),
            }],
            is_published: true,
            ..CandidateProfile::default()
        }
    }

    fn base_vacancy() -> JobPosting {
        JobPosting {
            position: Some("Бармен".into()),
            position_category: Some(PositionCategory::Barman),
            city: Some("Москва".into()),
            salary_min: Some(70_000),
            salary_max: Some(80_000),
            work_schedule: vec!["Посменный график".into(), "Полный день".into()],
            required_experience: Some("От 5 лет".into()),
            required_education: Some("Высшее".into()),
            required_skills: vec![
                "Классические коктейли".into(),
                "Авторские коктейли".into(),
                "Флэр".into(),
                "Работа с POS-системой".into(),
            ],
            is_published: true,
            ..JobPosting::default()
        }
    }

    #[test]
    fn perfect_match_scores_at_least_ninety_eight() {
        let score = calculate_match_score(&base_resume(), &base_vacancy());

        assert!(score.total >= 98.0, "total was {}", score.total);
        assert!(score.total <= 100.0);
        assert_eq!(score.breakdown.position_score, 25.0);
        assert_eq!(score.breakdown.skills_score, 25.0);
        assert_eq!(score.breakdown.location_score, 15.0);
        assert_eq!(score.breakdown.salary_score, 15.0);
        assert_eq!(score.breakdown.experience_score, 10.0);
        assert_eq!(score.breakdown.education_score, 5.0);
        assert_eq!(score.breakdown.schedule_score, 3.0);
        assert_eq!(score.breakdown.language_score, 2.0);
        assert_eq!(score.details.skills_matched.len(), 4);
        assert!(score.details.experience_sufficient);
    }

    #[test]
    fn scoring_is_idempotent() {
        let resume = base_resume();
        let vacancy = base_vacancy();
        assert_eq!(
            calculate_match_score(&resume, &vacancy),
            calculate_match_score(&resume, &vacancy)
        );
    }

    #[test]
    fn sub_scores_stay_within_declared_maxima() {
        let resumes = [base_resume(), CandidateProfile::default()];
        let vacancies = [base_vacancy(), JobPosting::default()];

        for resume in &resumes {
            for vacancy in &vacancies {
                let score = calculate_match_score(resume, vacancy);
                let b = &score.breakdown;
                assert!((0.0..=25.0).contains(&b.position_score));
                assert!((0.0..=25.0).contains(&b.skills_score));
                assert!((0.0..=15.0).contains(&b.location_score));
                assert!((0.0..=15.0).contains(&b.salary_score));
                assert!((0.0..=10.0).contains(&b.experience_score));
                assert!((0.0..=5.0).contains(&b.education_score));
                assert!((0.0..=3.0).contains(&b.schedule_score));
                assert!((0.0..=2.0).contains(&b.language_score));
                assert!((0.0..=100.0).contains(&score.total));
            }
        }
    }

    #[test]
    fn zero_overlap_pair_is_capped_at_fifty() {
        let mut resume = base_resume();
        resume.position_category = Some(PositionCategory::Barman);
        resume.skills = vec!["Флэр".into(), "Миксология".into()];

        let mut vacancy = base_vacancy();
        vacancy.position_category = Some(PositionCategory::Cook);
        vacancy.required_skills = vec!["Европейская кухня".into(), "Работа с мясом".into()];
        vacancy.required_experience = Some("От 3 лет".into());
        vacancy.required_education = Some("Не важно".into());

        let score = calculate_match_score(&resume, &vacancy);
        assert_eq!(score.breakdown.position_score, 0.0);
        assert_eq!(score.breakdown.skills_score, 0.0);
        assert_eq!(score.details.position_match_type, PositionMatchType::None);
        assert!(score.total <= 50.0, "total was {}", score.total);
    }

    #[test]
    fn related_categories_get_partial_position_credit() {
        let mut vacancy = base_vacancy();
        vacancy.position_category = Some(PositionCategory::Barista);

        let score = calculate_match_score(&base_resume(), &vacancy);
        assert_eq!(score.breakdown.position_score, 15.0);
        assert_eq!(score.details.position_match_type, PositionMatchType::Related);
        assert!(!score.details.position_match);
    }

    #[test]
    fn salary_inside_range_is_full_points() {
        let eval = evaluate_salary(&base_resume(), &base_vacancy());
        assert_eq!(eval.score, 15.0);
        assert!(eval.compatible);
        assert_eq!(eval.difference_percent, Some(0.0));
        assert!(!eval.estimated_from_experience);
    }

    #[test]
    fn salary_deviation_bands_step_down() {
        let mut resume = base_resume();
        let vacancy = base_vacancy(); // вилка 70..80

        resume.desired_salary = Some(87_000); // ~+9% от 80к
        assert_eq!(evaluate_salary(&resume, &vacancy).score, 12.0);

        resume.desired_salary = Some(95_000); // ~+19%
        assert_eq!(evaluate_salary(&resume, &vacancy).score, 8.0);

        resume.desired_salary = Some(103_000); // ~+29%
        assert_eq!(evaluate_salary(&resume, &vacancy).score, 4.0);

        resume.desired_salary = Some(160_000); // +100%
        let eval = evaluate_salary(&resume, &vacancy);
        assert_eq!(eval.score, 0.0);
        assert!(eval.difference_percent.unwrap() >= 100.0);
    }

    #[test]
    fn salary_below_range_uses_lower_bound() {
        let mut resume = base_resume();
        resume.desired_salary = Some(65_000); // ~-7% от 70к

        let eval = evaluate_salary(&resume, &base_vacancy());
        assert_eq!(eval.score, 12.0);
        assert!(eval.difference_percent.unwrap() < 0.0);
    }

    #[test]
    fn missing_vacancy_salary_is_neutral() {
        let mut vacancy = base_vacancy();
        vacancy.salary_min = None;
        vacancy.salary_max = None;

        let eval = evaluate_salary(&base_resume(), &vacancy);
        assert_eq!(eval.score, 7.5);
        assert_eq!(eval.difference_percent, None);
    }

    #[test]
    fn missing_everything_on_candidate_side_is_neutral() {
        let mut resume = base_resume();
        resume.desired_salary = None;
        resume.total_experience_years = None;

        let eval = evaluate_salary(&resume, &base_vacancy());
        assert_eq!(eval.score, 7.5);
        assert!(!eval.estimated_from_experience);
    }

    #[test]
    fn salary_estimated_from_experience_when_unstated() {
        // 10 лет стажа: диапазон 100..180, середина 140 тысяч
        let mut resume = base_resume();
        resume.desired_salary = None;
        resume.total_experience_years = Some(10);

        let mut vacancy = base_vacancy();
        vacancy.salary_min = Some(35_000);
        vacancy.salary_max = Some(45_000);

        let eval = evaluate_salary(&resume, &vacancy);
        assert_eq!(eval.score, 0.0);
        assert!(eval.estimated_from_experience);
        assert!(!eval.compatible);
        assert!(eval.difference_percent.unwrap() >= 100.0);
    }

    #[test]
    fn min_only_vacancy_uses_twenty_percent_band() {
        let mut vacancy = base_vacancy();
        vacancy.salary_min = Some(50_000);
        vacancy.salary_max = None;

        let mut resume = base_resume();
        resume.desired_salary = Some(55_000); // внутри полосы
        let eval = evaluate_salary(&resume, &vacancy);
        assert_eq!(eval.score, 12.0);
        assert!(eval.compatible);

        resume.desired_salary = Some(66_000); // чуть за полосой (60к), в пределах 20% сверх неё
        assert_eq!(evaluate_salary(&resume, &vacancy).score, 6.0);

        resume.desired_salary = Some(100_000); // далеко за полосой
        assert_eq!(evaluate_salary(&resume, &vacancy).score, 0.0);
    }

    #[test]
    fn experience_requirement_waiver_gives_full_points() {
        let mut vacancy = base_vacancy();
        vacancy.required_experience = Some("Без опыта".into());

        let mut resume = base_resume();
        resume.total_experience_years = Some(20);

        // Переквалифицированный кандидат не штрафуется
        let eval = evaluate_experience(&resume, &vacancy);
        assert_eq!(eval.score, 10.0);
        assert!(eval.sufficient);
    }

    #[test]
    fn experience_ratio_ladder() {
        let mut vacancy = base_vacancy();
        vacancy.required_experience = Some("От 4 лет".into());
        let mut resume = base_resume();

        resume.total_experience_years = Some(4);
        assert_eq!(evaluate_experience(&resume, &vacancy).score, 10.0);

        resume.total_experience_years = Some(3);
        let eval = evaluate_experience(&resume, &vacancy);
        assert_eq!(eval.score, 7.5);
        assert!(eval.sufficient);

        resume.total_experience_years = Some(2);
        assert_eq!(evaluate_experience(&resume, &vacancy).score, 5.0);

        resume.total_experience_years = Some(1);
        assert_eq!(evaluate_experience(&resume, &vacancy).score, 2.5);

        resume.total_experience_years = Some(0);
        let eval = evaluate_experience(&resume, &vacancy);
        assert_eq!(eval.score, 1.0);
        assert!(!eval.sufficient);
    }

    #[test]
    fn unknown_candidate_experience_scores_zero() {
        let mut resume = base_resume();
        resume.total_experience_years = None;

        let eval = evaluate_experience(&resume, &base_vacancy());
        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.required_years, Some(5));
        assert_eq!(eval.candidate_years, None);
    }

    #[test]
    fn unparseable_experience_requirement_is_neutral() {
        let mut vacancy = base_vacancy();
        vacancy.required_experience = Some("желателен опыт в баре".into());
        assert_eq!(evaluate_experience(&base_resume(), &vacancy).score, 5.0);

        vacancy.required_experience = None;
        assert_eq!(evaluate_experience(&base_resume(), &vacancy).score, 5.0);
    }

    #[test]
    fn education_irrelevant_requirement_gives_full_points() {
        let mut vacancy = base_vacancy();
        vacancy.required_education = Some("Не имеет значения".into());

        let mut resume = base_resume();
        resume.education.clear();

        let eval = evaluate_education(&resume, &vacancy);
        assert_eq!(eval.score, 5.0);
        assert!(eval.education_match);
    }

    #[test]
    fn missing_education_with_requirement_scores_zero() {
        let mut resume = base_resume();
        resume.education.clear();

        let eval = evaluate_education(&resume, &base_vacancy());
        assert_eq!(eval.score, 0.0);
        assert!(!eval.education_match);
    }

    #[test]
    fn education_one_tier_below_gets_half_credit() {
        let mut resume = base_resume();
        resume.education = vec![Education {
            level: Some("Среднее специальное".into()),
            institution: "Колледж".into(),
            graduation_year: Some(2015),
        }];

        // Требуется высшее, у кандидата ступень ниже
        let eval = evaluate_education(&resume, &base_vacancy());
        assert_eq!(eval.score, 2.5);

        resume.education = vec![Education {
            level: Some("Среднее общее".into()),
            institution: "Школа".into(),
            graduation_year: Some(2010),
        }];
        assert_eq!(evaluate_education(&resume, &base_vacancy()).score, 0.0);
    }

    #[test]
    fn incomplete_higher_does_not_count_as_higher() {
        let mut resume = base_resume();
        resume.education = vec![Education {
            level: Some("Неоконченное высшее".into()),
            institution: "МГУ".into(),
            graduation_year: None,
        }];

        let eval = evaluate_education(&resume, &base_vacancy());
        assert_eq!(eval.score, 2.5);
    }

    #[test]
    fn schedule_overlap_and_neutral_cases() {
        let resume = base_resume();
        let vacancy = base_vacancy();
        assert_eq!(evaluate_schedule(&resume, &vacancy).score, 3.0);

        let mut no_schedule = resume.clone();
        no_schedule.work_schedule.clear();
        let eval = evaluate_schedule(&no_schedule, &vacancy);
        assert_eq!(eval.score, 1.5);
        assert!(!eval.overlap);

        let mut unconstrained = vacancy.clone();
        unconstrained.work_schedule.clear();
        assert_eq!(evaluate_schedule(&no_schedule, &unconstrained).score, 3.0);

        let mut disjoint = resume.clone();
        disjoint.work_schedule = vec!["Вахтовый метод".into()];
        assert_eq!(evaluate_schedule(&disjoint, &vacancy).score, 0.0);
    }

    #[test]
    fn language_requirement_detected_in_skills() {
        let mut vacancy = base_vacancy();
        vacancy.required_skills.push("Английский язык".into());

        let eval = evaluate_language(&base_resume(), &vacancy);
        assert_eq!(eval.score, 2.0);
        assert_eq!(eval.language_match, Some(true));

        let mut resume = base_resume();
        resume.languages = vec![LanguageSkill {
            language: "Немецкий".into(),
            level: "B1".into(),
        }];
        let eval = evaluate_language(&resume, &vacancy);
        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.language_match, Some(false));
    }

    #[test]
    fn missing_candidate_languages_stay_neutral() {
        let mut resume = base_resume();
        resume.languages.clear();

        let eval = evaluate_language(&resume, &base_vacancy());
        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.language_match, None);
    }

    #[test]
    fn no_language_requirement_gives_full_points() {
        let eval = evaluate_language(&base_resume(), &base_vacancy());
        assert_eq!(eval.score, 2.0);
        assert_eq!(eval.language_match, None);
    }

    #[test]
    fn minimal_resume_keeps_documented_neutral_values() {
        // Пустые поля: зарплата/график нейтральны, навыки/опыт нулевые
        let resume = CandidateProfile {
            position_category: Some(PositionCategory::Waiter),
            city: Some("Москва".into()),
            ..CandidateProfile::default()
        };

        let vacancy = JobPosting {
            position_category: Some(PositionCategory::Waiter),
            city: Some("Москва".into()),
            salary_min: Some(50_000),
            salary_max: Some(70_000),
            work_schedule: vec!["Полный день".into(), "Посменный график".into()],
            required_experience: Some("От 2 лет".into()),
            required_education: Some("Среднее специальное".into()),
            required_skills: vec![
                "Обслуживание банкетов".into(),
                "Работа с POS-системой".into(),
                "Английский язык".into(),
            ],
            ..JobPosting::default()
        };

        let score = calculate_match_score(&resume, &vacancy);
        assert_eq!(score.breakdown.position_score, 25.0);
        assert_eq!(score.breakdown.skills_score, 0.0);
        assert_eq!(score.breakdown.salary_score, 7.5);
        assert_eq!(score.breakdown.experience_score, 0.0);
        assert_eq!(score.breakdown.education_score, 0.0);
        assert_eq!(score.breakdown.schedule_score, 1.5);
        assert_eq!(score.breakdown.language_score, 1.0);
    }

    #[test]
    fn total_is_rounded_to_one_decimal() {
        let mut resume = base_resume();
        resume.skills = vec!["Классические коктейли".into()]; // 1 из 4: 6.3 балла

        let score = calculate_match_score(&resume, &base_vacancy());
        let rescaled = score.total * 10.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-9);
    }
}
