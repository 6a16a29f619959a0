//! User-facing text in every supported language.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Ukrainian
    #[default]
    #[serde(alias = "uk")]
    #[value(alias = "uk")]
    Ua,
    /// English
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ua, Language::En];

    /// Value of the `lang` query parameter understood by wttr.in
    pub fn wttr_code(self) -> &'static str {
        match self {
            Language::Ua => "uk",
            Language::En => "en",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Ua => &UA,
            Language::En => &EN,
        }
    }

    /// Flag shown in the language switcher
    pub fn flag(self) -> &'static str {
        match self {
            Language::Ua => "🇺🇦",
            Language::En => "🇬🇧",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Ua => "ua",
            Language::En => "en",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ua" | "uk" => Ok(Language::Ua),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Static text table for one language
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub search: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub city_not_found: &'static str,
    pub request_failed: &'static str,
    pub feels_like: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub wind_unit: &'static str,
    pub placeholder: &'static str,
    pub hourly_forecast: &'static str,
    pub multi_day_forecast: &'static str,
    pub warnings_title: &'static str,
    pub recommendations_title: &'static str,
    pub unknown_city: &'static str,
    pub no_description: &'static str,
    pub no_data: &'static str,
    pub help: &'static str,
    /// Monday first
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub rec_warm_clothes: &'static str,
    pub rec_jacket: &'static str,
    pub rec_light_clothes: &'static str,
    pub rec_umbrella: &'static str,
    pub rec_snow: &'static str,
    pub rec_sunscreen: &'static str,
    pub rec_great_weather: &'static str,
    pub warn_heavy_rain: &'static str,
    pub warn_snow: &'static str,
    pub warn_strong_wind: &'static str,
    pub warn_freezing: &'static str,
}

impl Translations {
    /// True if `text` is the input placeholder of any language
    pub fn is_any_placeholder(text: &str) -> bool {
        Language::ALL
            .iter()
            .any(|lang| lang.translations().placeholder == text)
    }
}

pub static UA: Translations = Translations {
    title: "🌤 Прогноз погоди",
    search: "Пошук",
    loading: "Завантаження...",
    error: "❌ Не вдалося завантажити дані.",
    city_not_found: "❌ Місто не знайдено. Перевірте правильність назви.",
    request_failed: "❌ Сервіс погоди повернув помилку.",
    feels_like: "Відчувається як",
    humidity: "Вологість",
    wind_speed: "Вітер",
    wind_unit: "км/год",
    placeholder: "Введіть місто (наприклад: Київ)",
    hourly_forecast: "📅 Прогноз на сьогодні (щогодинно)",
    multi_day_forecast: "🗓 Прогноз на кілька днів",
    warnings_title: "⚠️ Погодні попередження:",
    recommendations_title: "💡 Рекомендації:",
    unknown_city: "Невідоме місто",
    no_description: "немає опису",
    no_data: "немає даних",
    help: "Enter пошук · F2/F3 мова · F5 оновити · ↑↓ PgUp/PgDn прокрутка · Esc вихід · :ua :en :refresh :q",
    weekdays: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"],
    months: [
        "січ", "лют", "бер", "кві", "тра", "чер", "лип", "сер", "вер", "жов", "лис", "гру",
    ],
    rec_warm_clothes: "🧣 Одягни шапку та рукавички.",
    rec_jacket: "🧥 Можливо, знадобиться куртка.",
    rec_light_clothes: "👕 Зручна одежа — гарний вибір.",
    rec_umbrella: "🌂 Візьми парасольку!",
    rec_snow: "🎿 Готуйся до снігу!",
    rec_sunscreen: "☀️ Нанеси сонячний крем.",
    rec_great_weather: "🌤 Сьогодні чудова погода!",
    warn_heavy_rain: "🌧 Очікується сильний дощ. Уникайте прогулянок без парасолі.",
    warn_snow: "🌨 Можливий сніг. Обережно на дорогах!",
    warn_strong_wind: "🌬 Сильний вітер! Утримуйте речі.",
    warn_freezing: "❄️ Морозна погода. Тепло вдягайтеся!",
};

pub static EN: Translations = Translations {
    title: "🌤 Weather Forecast",
    search: "Search",
    loading: "Loading...",
    error: "❌ Failed to load data.",
    city_not_found: "❌ City not found. Please check the spelling.",
    request_failed: "❌ The weather service returned an error.",
    feels_like: "Feels like",
    humidity: "Humidity",
    wind_speed: "Wind speed",
    wind_unit: "km/h",
    placeholder: "Enter city (e.g.: Kyiv)",
    hourly_forecast: "📅 Today's forecast (every 3h)",
    multi_day_forecast: "🗓 Multi-day forecast",
    warnings_title: "⚠️ Weather warnings:",
    recommendations_title: "💡 Recommendations:",
    unknown_city: "Unknown city",
    no_description: "no description",
    no_data: "no data",
    help: "Enter search · F2/F3 language · F5 refresh · ↑↓ PgUp/PgDn scroll · Esc quit · :ua :en :refresh :q",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    rec_warm_clothes: "🧣 Wear a hat and gloves.",
    rec_jacket: "🧥 You may need a jacket.",
    rec_light_clothes: "👕 Comfortable clothes are a good choice.",
    rec_umbrella: "🌂 Take an umbrella!",
    rec_snow: "🎿 Get ready for snow!",
    rec_sunscreen: "☀️ Put on sunscreen.",
    rec_great_weather: "🌤 Great weather today!",
    warn_heavy_rain: "🌧 Heavy rain expected. Avoid going out without an umbrella.",
    warn_snow: "🌨 Snow possible. Drive carefully.",
    warn_strong_wind: "🌬 Strong wind! Hold on to your belongings.",
    warn_freezing: "❄️ Freezing cold. Dress warmly.",
};
