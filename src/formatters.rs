use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

use crate::advisories::{self, Conditions, Recommendation, Warning};
use crate::constants::{FORECAST_DAYS, HOURLY_STRIDE, NOT_AVAILABLE};
use crate::i18n::{Language, Translations};
use crate::models::{DailyWeather, HourlyWeather, WttrResponse};

const RULE_WIDTH: usize = 44;

/// Everything shown for one city, already localized
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub lang: Language,
    pub location: String,
    pub current: CurrentCard,
    pub hourly: Vec<HourlyLine>,
    pub days: Vec<DayLine>,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub temp: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyLine {
    pub time: String,
    pub temp: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLine {
    pub date: String,
    pub min: String,
    pub max: String,
    pub description: String,
}

impl HourlyLine {
    pub fn to_text(&self) -> String {
        format!("{}  {:>6}  {}", self.time, format!("{}°C", self.temp), self.description)
    }
}

impl DayLine {
    pub fn to_text(&self) -> String {
        format!("{}  {}°C / {}°C  {}", self.date, self.min, self.max, self.description)
    }
}

fn or_na(value: Option<&String>) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Upper-cases the first character and lower-cases the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// wttr.in time codes count hundreds of minutes: "0", "300", ..., "2100"
pub fn format_hour(code: Option<&str>) -> String {
    let hours = code
        .and_then(|c| c.trim().parse::<u32>().ok())
        .unwrap_or(0)
        / 100;
    format!("{:02}:00", hours)
}

/// "Wed 05 Mar" with localized names; unparsable dates are shown as-is
pub fn format_date(raw: &str, text: &Translations) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {:02} {}",
            text.weekdays[date.weekday().num_days_from_monday() as usize],
            date.day(),
            text.months[date.month0() as usize]
        ),
        Err(_) => raw.to_string(),
    }
}

fn hourly_line(hour: &HourlyWeather, lang: Language) -> HourlyLine {
    let text = lang.translations();
    HourlyLine {
        time: format_hour(hour.time.as_deref()),
        temp: or_na(hour.temp_c.as_ref()),
        description: hour.description(lang).unwrap_or(text.no_data).to_string(),
    }
}

fn day_line(day: &DailyWeather, lang: Language) -> DayLine {
    let text = lang.translations();
    DayLine {
        date: format_date(&day.date, text),
        min: or_na(day.min_temp_c.as_ref()),
        max: or_na(day.max_temp_c.as_ref()),
        description: day
            .hourly
            .first()
            .and_then(|h| h.description(lang))
            .unwrap_or(text.no_data)
            .to_string(),
    }
}

/// Builds the localized view of a response
pub fn build_report(resp: &WttrResponse, lang: Language) -> WeatherReport {
    let text = lang.translations();
    let current = resp.current().cloned().unwrap_or_default();
    let conditions = Conditions::from_response(resp);

    WeatherReport {
        lang,
        location: resp
            .location_name()
            .unwrap_or_else(|| text.unknown_city.to_string()),
        current: CurrentCard {
            temp: or_na(current.temp_c.as_ref()),
            feels_like: or_na(current.feels_like_c.as_ref()),
            humidity: or_na(current.humidity.as_ref()),
            wind: or_na(current.windspeed_kmph.as_ref()),
            description: capitalize(current.description(lang).unwrap_or(text.no_description)),
        },
        hourly: resp
            .today()
            .map(|day| {
                day.hourly
                    .iter()
                    .step_by(HOURLY_STRIDE)
                    .map(|h| hourly_line(h, lang))
                    .collect()
            })
            .unwrap_or_default(),
        days: resp
            .weather
            .iter()
            .take(FORECAST_DAYS)
            .map(|d| day_line(d, lang))
            .collect(),
        recommendations: advisories::recommendations(&conditions),
        warnings: advisories::warnings(&conditions),
    }
}

fn card_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
}

fn push_advisories(out: &mut String, report: &WeatherReport) {
    let text = report.lang.translations();

    card_title(out, text.recommendations_title);
    for rec in &report.recommendations {
        let _ = writeln!(out, "• {}", rec.text(text));
    }

    if !report.warnings.is_empty() {
        card_title(out, text.warnings_title);
        for warn in &report.warnings {
            let _ = writeln!(out, "• {}", warn.text(text));
        }
    }
}

/// Renders the weather cards as plain text
pub fn render_report(report: &WeatherReport) -> String {
    let text = report.lang.translations();
    let current = &report.current;
    let mut out = String::new();

    card_title(&mut out, &report.location);
    let _ = writeln!(out, "{}°C", current.temp);
    let _ = writeln!(out, "{}: {}°C", text.feels_like, current.feels_like);
    let _ = writeln!(out, "{}: {}%", text.humidity, current.humidity);
    let _ = writeln!(out, "{}: {} {}", text.wind_speed, current.wind, text.wind_unit);
    let _ = writeln!(out, "{}", current.description);

    card_title(&mut out, text.hourly_forecast);
    for line in &report.hourly {
        let _ = writeln!(out, "{}", line.to_text());
    }

    card_title(&mut out, text.multi_day_forecast);
    for day in &report.days {
        let _ = writeln!(out, "{}", day.to_text());
    }

    push_advisories(&mut out, report);
    out
}

/// Recommendations and warnings only
pub fn render_advisories(report: &WeatherReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.location);
    push_advisories(&mut out, report);
    out
}
