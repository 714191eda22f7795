use super::round1;
use super::weights::MAX_POINTS;
use crate::normalize::normalize_skill_set;

#[derive(Debug, Clone)]
pub struct SkillsEvaluation {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percent: f64,
    pub details: String,
}

/// Доля требуемых навыков, покрытых резюме, в пересчёте на 25 баллов.
/// Вакансия без требований даёт полный балл; кандидат без навыков при
/// непустых требованиях получает 0.
pub fn evaluate_skills(required: &[String], possessed: &[String]) -> SkillsEvaluation {
    let required_set = normalize_skill_set(required);
    if required_set.is_empty() {
        return SkillsEvaluation {
            score: MAX_POINTS.skills,
            matched: vec![],
            missing: vec![],
            match_percent: 100.0,
            details: "Требований к навыкам нет".into(),
        };
    }

    let possessed_set = normalize_skill_set(possessed);
    let mut matched: Vec<String> = required_set
        .intersection(&possessed_set)
        .cloned()
        .collect();
    matched.sort();
    let mut missing: Vec<String> = required_set
        .difference(&possessed_set)
        .cloned()
        .collect();
    missing.sort();

    let ratio = matched.len() as f64 / required_set.len() as f64;
    let score = round1(ratio * MAX_POINTS.skills);
    let match_percent = round1(ratio * 100.0);
    let details = format!(
        "Совпало {} из {} требуемых навыков ({:.0}%)",
        matched.len(),
        required_set.len(),
        match_percent
    );

    SkillsEvaluation {
        score,
        matched,
        missing,
        match_percent,
        details,
    }
}
