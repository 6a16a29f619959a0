//! Errors raised while fetching weather data

use reqwest::StatusCode;
use thiserror::Error;

use crate::i18n::Translations;

#[derive(Debug, Error)]
pub enum FetchError {
    /// wttr.in answered 404 for the requested location
    #[error("city not found")]
    CityNotFound,

    /// Any status other than 200 and 404
    #[error("request failed with status: {0}")]
    Status(StatusCode),

    /// Connection, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response parsed but lacks current conditions or the forecast
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Which of the three static failure messages to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Error,
    CityNotFound,
    RequestFailed,
}

impl FailureKind {
    pub fn message(self, text: &'static Translations) -> &'static str {
        match self {
            FailureKind::Error => text.error,
            FailureKind::CityNotFound => text.city_not_found,
            FailureKind::RequestFailed => text.request_failed,
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::CityNotFound => FailureKind::CityNotFound,
            FetchError::Status(_) => FailureKind::RequestFailed,
            FetchError::Transport(_) | FetchError::Malformed(_) => FailureKind::Error,
        }
    }

    /// The static message shown in place of the weather cards
    pub fn user_message(&self, text: &'static Translations) -> &'static str {
        self.kind().message(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, UA};

    #[test]
    fn maps_to_localized_messages() {
        assert_eq!(FetchError::CityNotFound.user_message(&EN), EN.city_not_found);
        assert_eq!(
            FetchError::Status(StatusCode::BAD_GATEWAY).user_message(&UA),
            UA.request_failed
        );
        assert_eq!(
            FetchError::Malformed("no weather".into()).user_message(&EN),
            EN.error
        );
    }
}
