/// Диапазоны ожидаемой зарплаты по годам опыта (рубли, «на руки»).
/// Верхняя граница стажа не включается: (1, ..) покрывает стаж < 1 года.
const SALARY_BANDS: &[(i32, u32, u32)] = &[
    (1, 40_000, 55_000),
    (3, 50_000, 70_000),
    (5, 65_000, 90_000),
    (10, 80_000, 120_000),
];

/// Диапазон для стажа от 10 лет.
const SENIOR_BAND: (u32, u32) = (100_000, 180_000);

/// Оценка желаемой зарплаты по стажу: середина подходящего диапазона.
/// Используется, когда кандидат не указал желаемую зарплату.
pub fn estimate_desired_salary(total_experience_years: i32) -> u32 {
    let years = total_experience_years.max(0);
    for (upper, min, max) in SALARY_BANDS {
        if years < *upper {
            return (min + max) / 2;
        }
    }
    (SENIOR_BAND.0 + SENIOR_BAND.1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_band_midpoints() {
        assert_eq!(estimate_desired_salary(0), 47_500);
        assert_eq!(estimate_desired_salary(2), 60_000);
        assert_eq!(estimate_desired_salary(4), 77_500);
        assert_eq!(estimate_desired_salary(9), 100_000);
    }

    #[test]
    fn ten_plus_years_hit_the_senior_band() {
        assert_eq!(estimate_desired_salary(10), 140_000);
        assert_eq!(estimate_desired_salary(25), 140_000);
    }

    #[test]
    fn negative_years_are_clamped_to_zero() {
        assert_eq!(estimate_desired_salary(-3), 47_500);
    }

    #[test]
    fn estimate_grows_monotonically_with_experience() {
        let mut prev = 0;
        for years in 0..=15 {
            let estimate = estimate_desired_salary(years);
            assert!(estimate >= prev, "drop at {years} years");
            prev = estimate;
        }
    }
}
