//! Threshold rules turning the current conditions into advice.

use crate::i18n::Translations;
use crate::models::{HourlyWeather, WttrResponse};

/// Numeric inputs of the rule tables. Missing or unparsable values count as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conditions {
    pub temp_c: i32,
    pub wind_kmph: i32,
    pub uv_index: i32,
    pub chance_of_rain: i32,
    pub chance_of_snow: i32,
}

fn number(value: Option<&String>) -> i32 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(|v| v.round() as i32)
        .unwrap_or(0)
}

/// current_condition rarely carries chances; fall back to the worst slot of today
fn chance(
    own: Option<&String>,
    today: &[HourlyWeather],
    pick: impl Fn(&HourlyWeather) -> Option<&String>,
) -> i32 {
    match own {
        Some(v) => number(Some(v)),
        None => today.iter().map(|h| number(pick(h))).max().unwrap_or(0),
    }
}

impl Conditions {
    pub fn from_response(resp: &WttrResponse) -> Self {
        let Some(current) = resp.current() else {
            return Self::default();
        };
        let today = resp.today().map(|d| d.hourly.as_slice()).unwrap_or_default();

        Self {
            temp_c: number(current.temp_c.as_ref()),
            wind_kmph: number(current.windspeed_kmph.as_ref()),
            uv_index: number(current.uv_index.as_ref()),
            chance_of_rain: chance(current.chanceofrain.as_ref(), today, |h| {
                h.chanceofrain.as_ref()
            }),
            chance_of_snow: chance(current.chanceofsnow.as_ref(), today, |h| {
                h.chanceofsnow.as_ref()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    WarmClothes,
    Jacket,
    LightClothes,
    Umbrella,
    Snow,
    Sunscreen,
    GreatWeather,
}

impl Recommendation {
    pub fn text(self, t: &'static Translations) -> &'static str {
        match self {
            Recommendation::WarmClothes => t.rec_warm_clothes,
            Recommendation::Jacket => t.rec_jacket,
            Recommendation::LightClothes => t.rec_light_clothes,
            Recommendation::Umbrella => t.rec_umbrella,
            Recommendation::Snow => t.rec_snow,
            Recommendation::Sunscreen => t.rec_sunscreen,
            Recommendation::GreatWeather => t.rec_great_weather,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    HeavyRain,
    Snow,
    StrongWind,
    Freezing,
}

impl Warning {
    pub fn text(self, t: &'static Translations) -> &'static str {
        match self {
            Warning::HeavyRain => t.warn_heavy_rain,
            Warning::Snow => t.warn_snow,
            Warning::StrongWind => t.warn_strong_wind,
            Warning::Freezing => t.warn_freezing,
        }
    }
}

/// Never empty: falls back to [`Recommendation::GreatWeather`]
pub fn recommendations(c: &Conditions) -> Vec<Recommendation> {
    let mut out = Vec::new();

    match c.temp_c {
        t if t < 5 => out.push(Recommendation::WarmClothes),
        t if t < 15 => out.push(Recommendation::Jacket),
        t if t < 25 => out.push(Recommendation::LightClothes),
        _ => {}
    }

    if c.chance_of_rain > 70 {
        out.push(Recommendation::Umbrella);
    }
    if c.chance_of_snow > 50 {
        out.push(Recommendation::Snow);
    }
    if c.uv_index > 3 {
        out.push(Recommendation::Sunscreen);
    }

    if out.is_empty() {
        out.push(Recommendation::GreatWeather);
    }
    out
}

pub fn warnings(c: &Conditions) -> Vec<Warning> {
    let mut out = Vec::new();
    if c.chance_of_rain > 80 {
        out.push(Warning::HeavyRain);
    }
    if c.chance_of_snow > 50 {
        out.push(Warning::Snow);
    }
    if c.wind_kmph > 40 {
        out.push(Warning::StrongWind);
    }
    if c.temp_c < -5 {
        out.push(Warning::Freezing);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, UA};

    fn temp(t: i32) -> Conditions {
        Conditions {
            temp_c: t,
            ..Default::default()
        }
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(recommendations(&temp(4)), vec![Recommendation::WarmClothes]);
        assert_eq!(recommendations(&temp(5)), vec![Recommendation::Jacket]);
        assert_eq!(recommendations(&temp(14)), vec![Recommendation::Jacket]);
        assert_eq!(recommendations(&temp(15)), vec![Recommendation::LightClothes]);
        assert_eq!(recommendations(&temp(24)), vec![Recommendation::LightClothes]);
    }

    #[test]
    fn hot_and_calm_is_great_weather() {
        assert_eq!(recommendations(&temp(25)), vec![Recommendation::GreatWeather]);
    }

    #[test]
    fn thresholds_are_strict() {
        let c = Conditions {
            temp_c: 30,
            chance_of_rain: 70,
            chance_of_snow: 50,
            uv_index: 3,
            wind_kmph: 40,
        };
        assert_eq!(recommendations(&c), vec![Recommendation::GreatWeather]);
        assert!(warnings(&c).is_empty());
    }

    #[test]
    fn stormy_winter_day() {
        let c = Conditions {
            temp_c: -8,
            chance_of_rain: 85,
            chance_of_snow: 90,
            uv_index: 4,
            wind_kmph: 55,
        };
        assert_eq!(
            recommendations(&c),
            vec![
                Recommendation::WarmClothes,
                Recommendation::Umbrella,
                Recommendation::Snow,
                Recommendation::Sunscreen,
            ]
        );
        assert_eq!(
            warnings(&c),
            vec![
                Warning::HeavyRain,
                Warning::Snow,
                Warning::StrongWind,
                Warning::Freezing,
            ]
        );
    }

    #[test]
    fn conditions_fall_back_to_todays_hourly_chances() {
        let resp: WttrResponse =
            serde_json::from_str(include_str!("../tests/fixtures/kyiv_j1.json")).unwrap();
        let c = Conditions::from_response(&resp);
        assert_eq!(
            c,
            Conditions {
                temp_c: 12,
                wind_kmph: 14,
                uv_index: 2,
                chance_of_rain: 40,
                chance_of_snow: 0,
            }
        );
    }

    #[test]
    fn unparsable_values_count_as_zero() {
        let resp: WttrResponse = serde_json::from_str(
            r#"{"current_condition":[{"temp_C":"n/a","chanceofrain":"95"}],"weather":[]}"#,
        )
        .unwrap();
        let c = Conditions::from_response(&resp);
        assert_eq!(c.temp_c, 0);
        assert_eq!(c.chance_of_rain, 95);
        assert_eq!(warnings(&c), vec![Warning::HeavyRain]);
    }

    #[test]
    fn advice_is_localized() {
        assert_eq!(Recommendation::Umbrella.text(&EN), "🌂 Take an umbrella!");
        assert_eq!(Recommendation::Umbrella.text(&UA), "🌂 Візьми парасольку!");
        assert_eq!(Warning::Freezing.text(&EN), "❄️ Freezing cold. Dress warmly.");
    }
}
