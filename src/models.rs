use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

// ============================================================================
// wttr.in `format=j1` Models
// ============================================================================
//
// wttr.in encodes every number as a string and omits fields freely, so
// everything here is optional or defaulted.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WttrResponse {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    pub nearest_area: Vec<NearestArea>,
    #[serde(default)]
    pub weather: Vec<DailyWeather>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: Option<String>,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: Option<String>,
    pub humidity: Option<String>,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: Option<String>,
    #[serde(rename = "uvIndex")]
    pub uv_index: Option<String>,
    pub chanceofrain: Option<String>,
    pub chanceofsnow: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<TextValue>,
    #[serde(default)]
    pub lang_uk: Vec<TextValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestArea {
    #[serde(rename = "areaName", default)]
    pub area_name: Vec<TextValue>,
    #[serde(default)]
    pub country: Vec<TextValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyWeather {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: Option<String>,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: Option<String>,
    #[serde(default)]
    pub hourly: Vec<HourlyWeather>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyWeather {
    pub time: Option<String>,
    #[serde(rename = "tempC")]
    pub temp_c: Option<String>,
    pub chanceofrain: Option<String>,
    pub chanceofsnow: Option<String>,
    #[serde(rename = "uvIndex")]
    pub uv_index: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<TextValue>,
    #[serde(default)]
    pub lang_uk: Vec<TextValue>,
}

/// Picks the description for `lang`, preferring the translated one
fn localized_desc<'a>(
    english: &'a [TextValue],
    ukrainian: &'a [TextValue],
    lang: Language,
) -> Option<&'a str> {
    let translated = match lang {
        Language::Ua => ukrainian.first(),
        Language::En => None,
    };
    translated
        .or_else(|| english.first())
        .map(|v| v.value.trim())
        .filter(|v| !v.is_empty())
}

impl WttrResponse {
    /// Current conditions and the daily forecast are both required to render
    pub fn is_complete(&self) -> bool {
        !self.current_condition.is_empty() && !self.weather.is_empty()
    }

    pub fn current(&self) -> Option<&CurrentCondition> {
        self.current_condition.first()
    }

    pub fn today(&self) -> Option<&DailyWeather> {
        self.weather.first()
    }

    /// "City, Country" of the nearest area, if wttr.in resolved one
    pub fn location_name(&self) -> Option<String> {
        let area = self.nearest_area.first()?;
        let city = area.area_name.first()?.value.trim();
        let country = area.country.first()?.value.trim();
        if city.is_empty() {
            return None;
        }
        if country.is_empty() {
            Some(city.to_string())
        } else {
            Some(format!("{}, {}", city, country))
        }
    }
}

impl CurrentCondition {
    pub fn description(&self, lang: Language) -> Option<&str> {
        localized_desc(&self.weather_desc, &self.lang_uk, lang)
    }
}

impl HourlyWeather {
    pub fn description(&self, lang: Language) -> Option<&str> {
        localized_desc(&self.weather_desc, &self.lang_uk, lang)
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetReportRequest {
    /// City name, e.g. "Kyiv" or "London"
    pub city: String,
    /// Output language, "ua" or "en". Defaults to the server's language.
    #[serde(default)]
    pub language: Option<Language>,
}
