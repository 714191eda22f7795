use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::nfkc_lower_trim;

lazy_static! {
    // "Без опыта" / "Не требуется" / "опыт не нужен"
    static ref NO_EXPERIENCE_RE: Regex =
        Regex::new(r"(без опыта|не требуется|опыт не нужен|можно без опыта)").unwrap();
    // "от 3 лет" / "от 1 года"
    static ref FROM_RE: Regex = Regex::new(r"от\s*(\d{1,2})").unwrap();
    // "более 6 лет" / "свыше 10 лет"
    static ref MORE_RE: Regex = Regex::new(r"(?:более|больше|свыше)\s*(\d{1,2})").unwrap();
    // "5+"
    static ref PLUS_RE: Regex = Regex::new(r"(\d{1,2})\s*\+").unwrap();
    // "3 года" / "5 лет" / "1 год"
    static ref YEARS_RE: Regex = Regex::new(r"(\d{1,2})\s*(?:лет|года|год)").unwrap();
}

/// Требование явно разрешает кандидатов без опыта.
pub fn requirement_waives_experience(requirement: &str) -> bool {
    NO_EXPERIENCE_RE.is_match(&nfkc_lower_trim(requirement))
}

/// Целое число лет из свободного текста требования ("От 3 лет", "5+",
/// "Более 6 лет"). None, если текст не распознан или значение вне 1..=60.
pub fn extract_required_years(requirement: &str) -> Option<i32> {
    let text = nfkc_lower_trim(requirement);
    if text.is_empty() {
        return None;
    }

    for re in [&*FROM_RE, &*MORE_RE, &*PLUS_RE, &*YEARS_RE] {
        let years = re
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .filter(|y| (1..=60).contains(y));
        if let Some(years) = years {
            return Some(years);
        }
    }

    None
}
