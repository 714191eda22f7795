use super::weights::MAX_POINTS;
use crate::normalize::normalize_city;
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone)]
pub struct LocationEvaluation {
    pub score: f64,
    pub location_match: bool,
    pub details: String,
}

/// Единственная функция оценки локации; порядок проверок фиксирован:
/// удалённая работа, затем конфликт "только удалёнка" против офиса,
/// затем сравнение городов и готовность к переезду.
pub fn evaluate_location(resume: &CandidateProfile, vacancy: &JobPosting) -> LocationEvaluation {
    // 1. Удалённая работа: география не важна, важно предпочтение кандидата
    if vacancy.allows_remote_work {
        if resume.prefers_remote == Some(true) {
            return LocationEvaluation {
                score: MAX_POINTS.location,
                location_match: true,
                details: "Удалённая работа, кандидат предпочитает удалёнку".into(),
            };
        }
        if resume.prefers_office == Some(true) {
            return LocationEvaluation {
                score: 5.0,
                location_match: true,
                details: "Удалённая работа, но кандидат предпочитает офис".into(),
            };
        }
        return LocationEvaluation {
            score: 10.0,
            location_match: true,
            details: "Удалённая работа, формат кандидат не уточнял".into(),
        };
    }

    // 2. Вакансия только в офисе, кандидат ищет только удалёнку
    if resume.prefers_remote == Some(true) && resume.prefers_office != Some(true) {
        return LocationEvaluation {
            score: 0.0,
            location_match: false,
            details: "Кандидат ищет только удалённую работу, вакансия офисная".into(),
        };
    }

    // 3. Сравнение городов
    let (Some(resume_city), Some(vacancy_city)) =
        (resume.city.as_deref(), vacancy.city.as_deref())
    else {
        return LocationEvaluation {
            score: 0.0,
            location_match: false,
            details: "Город не указан".into(),
        };
    };

    if normalize_city(resume_city) == normalize_city(vacancy_city) {
        return LocationEvaluation {
            score: MAX_POINTS.location,
            location_match: true,
            details: format!("Один город: {vacancy_city}"),
        };
    }

    // 4. Готовность к переезду даёт частичный зачёт
    if resume.ready_to_relocate {
        return LocationEvaluation {
            score: 10.0,
            location_match: false,
            details: format!(
                "Разные города ({resume_city} и {vacancy_city}), кандидат готов к переезду"
            ),
        };
    }

    LocationEvaluation {
        score: 0.0,
        location_match: false,
        details: format!("Разные города: {resume_city} и {vacancy_city}"),
    }
}
