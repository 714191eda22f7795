use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::normalize::nfkc_lower_trim;

/// Закрытый перечень категорий позиций платформы.
///
/// Строковые формы ("barman", "waiter", ...) совпадают с тем, что хранится
/// в документах; парсинг нечувствителен к регистру.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PositionCategory {
    Barman,
    Waiter,
    Cook,
    Barista,
    Hookah,
    Household,
    Management,
    Support,
    Other,
}

/// Группы смежных категорий: бар ↔ кофе, зал ↔ тех. персонал, кухня ↔ кофе.
/// Принадлежность к одной группе даёт частичный зачёт по позиции.
const RELATED_GROUPS: &[&[PositionCategory]] = &[
    &[PositionCategory::Barman, PositionCategory::Barista],
    &[PositionCategory::Waiter, PositionCategory::Support],
    &[PositionCategory::Cook, PositionCategory::Barista],
];

/// Категории, смежные с данной. Всегда содержит саму категорию.
pub fn related_categories(category: PositionCategory) -> HashSet<PositionCategory> {
    let mut related: HashSet<PositionCategory> = RELATED_GROUPS
        .iter()
        .filter(|group| group.contains(&category))
        .flat_map(|group| group.iter().copied())
        .collect();
    related.insert(category);
    related
}

/// Смежность без учёта совпадения.
pub fn are_related(a: PositionCategory, b: PositionCategory) -> bool {
    a != b && related_categories(a).contains(&b)
}

/// Канонический каталог названий позиций по категориям.
///
/// NOTE: несколько названий ("Уборщик", "Посудомойщик", "Котломойщик",
/// "Гардеробщик") встречаются и в household, и в support; выигрывает
/// первая категория по порядку каталога.
static POSITION_CATALOG: &[(PositionCategory, &[&str])] = &[
    (
        PositionCategory::Barman,
        &[
            "Бармен",
            "Бариста-бармен",
            "Барледи",
            "Старший бармен",
            "Шеф-бармен",
            "Барбэк",
            "Барменеджер",
            "Бармен-официант",
            "Бармен-кассир",
        ],
    ),
    (
        PositionCategory::Waiter,
        &[
            "Официант",
            "Официант-стажёр",
            "Помощник официанта",
            "Старший официант",
            "Официант-кассир",
            "Раннер",
        ],
    ),
    (
        PositionCategory::Cook,
        &[
            "Повар-универсал",
            "Повар холодного цеха",
            "Повар горячего цеха",
            "Повар-заготовщик",
            "Повар-кондитер",
            "Пекарь",
            "Повар-технолог",
            "Су-шеф",
            "Шеф-повар",
            "Повар-мангальщик",
            "Повар-сушист",
        ],
    ),
    (
        PositionCategory::Barista,
        &[
            "Бариста",
            "Бариста-стажёр",
            "Помощник бариста",
            "Старший бариста",
            "Бариста-официант",
            "Бариста-кассир",
        ],
    ),
    (
        PositionCategory::Hookah,
        &["Кальянный мастер", "Старший кальянщик", "Шеф-кальянщик"],
    ),
    (
        PositionCategory::Household,
        &[
            "Гардеробщик",
            "Посудомойщик",
            "Котломойщик",
            "Хаусмастер",
            "Уборщик",
        ],
    ),
    (
        PositionCategory::Management,
        &[
            "Менеджер зала",
            "Менеджер по персоналу (HR)",
            "Менеджер по маркетингу",
            "Кейтеринг-менеджер",
            "Фитнес-менеджер",
            "Менеджер проекта",
            "Директор ресторана",
            "Управляющий сетью",
            "Администратор зала",
            "Старший администратор",
            "Администратор-кассир",
            "Хостес",
            "Старший хостес",
            "Хостес-кассир",
        ],
    ),
    (
        PositionCategory::Support,
        &[
            "Уборщик",
            "Клининг-менеджер",
            "Посудомойщик",
            "Котломойщик",
            "Уборщик производственных помещений",
            "Гардеробщик",
            "Хостес в гардероб",
            "Хаускипер",
        ],
    ),
];

static POSITION_TO_CATEGORY: LazyLock<HashMap<String, PositionCategory>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (category, titles) in POSITION_CATALOG {
        for title in *titles {
            map.entry(nfkc_lower_trim(title)).or_insert(*category);
        }
    }
    map
});

/// Категория по названию позиции. Неизвестные названия дают Other, не ошибку.
pub fn category_of(position: &str) -> PositionCategory {
    POSITION_TO_CATEGORY
        .get(&nfkc_lower_trim(position))
        .copied()
        .unwrap_or(PositionCategory::Other)
}

/// Канонические навыки по категориям (подсказки анкет и нормативный словарь).
static SKILLS_CATALOG: &[(PositionCategory, &[&str])] = &[
    (
        PositionCategory::Barman,
        &[
            "Классические коктейли",
            "Авторские коктейли",
            "Флэр",
            "Знание вин",
            "Инвентаризация",
            "Миксология",
            "Работа с шейкером",
            "Знание крепких напитков",
            "Работа с пивом",
            "Безалкогольные коктейли",
            "Подача напитков",
            "Декорирование коктейлей",
            "Работа с барным оборудованием",
            "Сервис бара",
        ],
    ),
    (
        PositionCategory::Waiter,
        &[
            "Работа с iiko",
            "Pre-sale",
            "Знание винной карты",
            "Работа с возражениями",
            "Обслуживание банкетов",
            "Работа с кассой",
            "Знание меню",
            "Сервировка стола",
            "Техника подачи блюд",
            "Работа с VIP-гостями",
            "Продажи напитков",
            "Up-sale",
            "Cross-sale",
            "Работа в зале",
        ],
    ),
    (
        PositionCategory::Cook,
        &[
            "Приготовление соусов",
            "Знание СанПиН",
            "Составление меню",
            "Техники карвинга",
            "Знание HACCP",
            "Знание технологии приготовления",
            "Работа с мясом",
            "Работа с рыбой",
            "Приготовление супов",
            "Приготовление гарниров",
            "Работа с тестом",
            "Декорирование блюд",
            "Калькуляция",
        ],
    ),
    (
        PositionCategory::Barista,
        &[
            "Приготовление эспрессо",
            "Латте-арт",
            "Альтернативные методы заваривания",
            "Работа с кофемашиной",
            "Работа с кофемолкой",
            "Знание сортов кофе",
            "Работа с молоком",
            "Работа с сиропами",
            "Знание чая",
            "Обслуживание кофейного оборудования",
        ],
    ),
    (
        PositionCategory::Hookah,
        &[
            "Приготовление кальяна",
            "Знание табаков",
            "Миксология кальянов",
            "Авторские миксы",
            "Знание кальянных чаш",
            "Консультирование по вкусам",
        ],
    ),
    (
        PositionCategory::Household,
        &[
            "Уборка помещений",
            "Мытьё посуды",
            "Работа с посудомоечными машинами",
            "Работа с профессиональной химией",
            "Санитарные нормы",
            "Организация рабочего места",
            "Работа с гардеробом",
            "Мелкий ремонт",
        ],
    ),
    (
        PositionCategory::Management,
        &[
            "Управление персоналом",
            "Планирование",
            "Бюджетирование",
            "Знание 1С",
            "Работа с поставщиками",
            "Контроль качества",
            "Обучение персонала",
            "Аналитика",
            "Маркетинг",
            "Организация мероприятий",
            "Кадровое делопроизводство",
            "Рекрутинг",
        ],
    ),
    (
        PositionCategory::Support,
        &[
            "Уборка помещений",
            "Работа с профессиональной техникой",
            "Знание моющих средств",
            "Санитарные нормы",
            "Работа с посудомоечными машинами",
            "Организация рабочего места",
        ],
    ),
];

/// Канонический список навыков категории. Для Other список пуст.
pub fn skills_for_category(category: PositionCategory) -> &'static [&'static str] {
    SKILLS_CATALOG
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Известные языки в нижнем регистре. Упоминание в требуемых навыках
/// вакансии ("Английский язык") трактуется как языковое требование.
pub const LANGUAGE_NAMES: &[&str] = &[
    "русский",
    "английский",
    "немецкий",
    "французский",
    "испанский",
    "итальянский",
    "китайский",
    "японский",
    "корейский",
    "арабский",
    "турецкий",
];
