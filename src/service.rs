use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::WttrClient;
use crate::config::Settings;
use crate::error::FetchError;
use crate::formatters::{build_report, render_advisories, render_report, WeatherReport};
use crate::i18n::Language;
use crate::models::GetReportRequest;

/// MCP server exposing localized wttr.in reports as tools
#[derive(Clone)]
pub struct WeatherDesk {
    client: WttrClient,
    default_lang: Language,
    tool_router: ToolRouter<Self>,
}

impl WeatherDesk {
    /// Creates a new server instance
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: WttrClient::new(settings)?,
            default_lang: settings.lang,
            tool_router: Self::tool_router(),
        })
    }

    /// Fetches `request.city` and builds the report in the requested language
    async fn report(&self, request: &GetReportRequest) -> Result<WeatherReport, McpError> {
        let lang = request.language.unwrap_or(self.default_lang);
        let text = lang.translations();

        let data = self
            .client
            .fetch(&request.city, lang)
            .await
            .map_err(|e| match e {
                FetchError::CityNotFound => McpError::invalid_params(text.city_not_found, None),
                other => McpError::internal_error(
                    format!("{} ({})", other.user_message(text), other),
                    None,
                ),
            })?;

        Ok(build_report(&data, lang))
    }
}

#[tool_handler]
impl ServerHandler for WeatherDesk {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-desk".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Localized weather reports powered by wttr.in. \
                Provides current conditions, today's forecast, a multi-day forecast, \
                recommendations and weather warnings in Ukrainian or English."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherDesk {
    /// Gets the full weather report for a city
    #[tool(description = "Get the weather report for a city: current conditions, today's forecast, a 5-day forecast, recommendations and warnings. Optional language: 'ua' (Ukrainian) or 'en' (English).")]
    pub async fn get_weather_report(
        &self,
        Parameters(request): Parameters<GetReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather report for city: {}", request.city);

        let report = self.report(&request).await?;
        let formatted = render_report(&report);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets recommendations and warnings for a city
    #[tool(description = "Get clothing recommendations and weather warnings for a city. Optional language: 'ua' (Ukrainian) or 'en' (English).")]
    pub async fn get_advisories(
        &self,
        Parameters(request): Parameters<GetReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting advisories for city: {}", request.city);

        let report = self.report(&request).await?;
        let formatted = render_advisories(&report);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
