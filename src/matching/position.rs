use serde::{Deserialize, Serialize};

use super::weights::MAX_POINTS;
use crate::taxonomy::{related_categories, PositionCategory};

/// Тип совпадения по позиции для объяснения в выдаче.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PositionMatchType {
    Exact,
    Related,
    None,
}

#[derive(Debug, Clone)]
pub struct PositionEvaluation {
    pub score: f64,
    pub match_type: PositionMatchType,
    pub details: String,
}

/// Совпадение категорий: точное даёт 25, смежное 15, иначе 0.
/// Без категории с любой стороны совпадение невозможно.
pub fn evaluate_position(
    resume_category: Option<PositionCategory>,
    vacancy_category: Option<PositionCategory>,
) -> PositionEvaluation {
    let (Some(resume_cat), Some(vacancy_cat)) = (resume_category, vacancy_category) else {
        return PositionEvaluation {
            score: 0.0,
            match_type: PositionMatchType::None,
            details: "Категория позиции не указана".into(),
        };
    };

    if resume_cat == vacancy_cat {
        return PositionEvaluation {
            score: MAX_POINTS.position,
            match_type: PositionMatchType::Exact,
            details: format!("Категории совпадают: {resume_cat}"),
        };
    }

    if related_categories(vacancy_cat).contains(&resume_cat) {
        return PositionEvaluation {
            score: 15.0,
            match_type: PositionMatchType::Related,
            details: format!("Смежные категории: {resume_cat} и {vacancy_cat}"),
        };
    }

    PositionEvaluation {
        score: 0.0,
        match_type: PositionMatchType::None,
        details: format!("Категории не связаны: {resume_cat} и {vacancy_cat}"),
    }
}
