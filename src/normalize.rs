use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Базовая нормализация свободного текста: NFKC, нижний регистр, trim,
/// схлопывание пробелов; «ё» сводится к «е».
pub fn nfkc_lower_trim(input: &str) -> String {
    let lowered = input.nfkc().collect::<String>().to_lowercase();
    let folded = lowered.replace('ё', "е");
    WHITESPACE_RE.replace_all(folded.trim(), " ").into_owned()
}

/// Нормальная форма навыка для сравнения множеств.
pub fn normalize_skill(skill: &str) -> String {
    nfkc_lower_trim(skill)
}

/// Множество нормализованных навыков; пустые элементы отбрасываются.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Нормальная форма города: "  МОСКВА " и "Москва" равны.
pub fn normalize_city(city: &str) -> String {
    nfkc_lower_trim(city)
}

/// Множество нормализованных пунктов графика работы.
pub fn normalize_schedule_set(entries: &[String]) -> HashSet<String> {
    entries
        .iter()
        .map(|s| nfkc_lower_trim(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_whitespace_and_yo() {
        assert_eq!(nfkc_lower_trim("  ФлЭр "), "флэр");
        assert_eq!(nfkc_lower_trim("Знание   вин"), "знание вин");
        assert_eq!(nfkc_lower_trim("Мытьё посуды"), "мытье посуды");
    }

    #[test]
    fn normalizes_fullwidth_forms() {
        assert_eq!(nfkc_lower_trim("ＶＩＰ"), "vip");
    }

    #[test]
    fn skill_sets_compare_after_normalization() {
        let resume = normalize_skill_set(&["Латте-арт".to_string(), "  ".to_string()]);
        let vacancy = normalize_skill_set(&["латте-арт".to_string()]);
        assert_eq!(resume, vacancy);
        assert_eq!(resume.len(), 1);
    }

    #[test]
    fn cities_match_ignoring_case_and_padding() {
        assert_eq!(normalize_city("  МОСКВА "), normalize_city("Москва"));
        assert_ne!(normalize_city("Москва"), normalize_city("Казань"));
    }

    #[test]
    fn schedule_entries_are_deduplicated() {
        let set = normalize_schedule_set(&[
            "Полный день".to_string(),
            "полный  день".to_string(),
            "Гибкий график".to_string(),
        ]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("полный день"));
    }
}
