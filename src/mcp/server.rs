//! nutricalc MCP Server Implementation
//!
//! Implements the MCP server with the nutrition and lunar tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::backend::BackendClient;
use crate::config::{ENV_BACKEND_KEY, ENV_BACKEND_URL};
use crate::lunar::{LowPrecisionEphemeris, LunarCalculator};
use crate::tools::lunar;
use crate::tools::nutrition;
use crate::tools::status::StatusTracker;

/// nutricalc MCP Service
#[derive(Clone)]
pub struct NutricalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    backend: Option<BackendClient>,
    lunar: Arc<LunarCalculator<LowPrecisionEphemeris>>,
    tool_router: ToolRouter<NutricalcService>,
}

impl NutricalcService {
    pub fn new(backend: Option<BackendClient>) -> Self {
        let backend_url = backend.as_ref().map(|b| b.base_url().to_string());
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(backend_url))),
            backend,
            lunar: Arc::new(LunarCalculator::default()),
            tool_router: Self::tool_router(),
        }
    }

    fn backend(&self) -> Result<&BackendClient, McpError> {
        self.backend.as_ref().ok_or_else(|| {
            McpError::internal_error(
                format!(
                    "Backend not configured: set {} and {}",
                    ENV_BACKEND_URL, ENV_BACKEND_KEY
                ),
                None,
            )
        })
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MoonPhaseParams {
    /// RFC 3339 timestamp (e.g., "2026-01-13T20:00:00Z"); defaults to now
    pub at: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleFoodParams {
    /// Food ID
    pub food_id: String,
    pub quantity: f64,
    /// Unit of the quantity: g, oz, cup(s), or piece; other units are taken as grams
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String { "g".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeNutritionParams {
    /// Recipe ID
    pub recipe_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailySummaryParams {
    /// User ID
    pub user_id: String,
    /// Date (YYYY-MM-DD)
    pub date: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutricalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the nutricalc service including build info, backend configuration, and process information")]
    async fn nutricalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Lunar ---

    #[tool(description = "Get the moon phase percentage, illumination, phase name, and age in days at a given time (default now)")]
    async fn moon_phase(&self, Parameters(p): Parameters<MoonPhaseParams>) -> Result<CallToolResult, McpError> {
        let result = lunar::moon_phase(&self.lunar, p.at.as_deref()).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Nutrition ---

    #[tool(description = "Scale a food's nutrition to a quantity. Grams and ounces scale by weight against the serving size, cups assume 240 g, and piece counts servings")]
    async fn scale_food(&self, Parameters(p): Parameters<ScaleFoodParams>) -> Result<CallToolResult, McpError> {
        let backend = self.backend()?;
        let result = nutrition::scale_food(backend, &p.food_id, p.quantity, &p.unit).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Calculate per-serving nutrition for a recipe from its ingredients. Ingredients whose food cannot be resolved are listed under 'unresolved'")]
    async fn recipe_nutrition(&self, Parameters(p): Parameters<RecipeNutritionParams>) -> Result<CallToolResult, McpError> {
        let backend = self.backend()?;
        let result = nutrition::recipe_nutrition(backend, &p.recipe_id).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get a user's nutrition totals for a date (UTC), calories per meal, and progress against their daily targets")]
    async fn daily_summary(&self, Parameters(p): Parameters<DailySummaryParams>) -> Result<CallToolResult, McpError> {
        let backend = self.backend()?;
        let result = nutrition::daily_summary(backend, &p.user_id, &p.date).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutricalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrition Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrition Calculator (nutricalc) - Recipe nutrition, daily totals, and lunar phases. \
                 Status: nutricalc_status. \
                 Lunar: moon_phase (optional RFC 3339 'at'). \
                 Nutrition (requires a configured backend): scale_food, recipe_nutrition, daily_summary. \
                 Dates use ISO format: YYYY-MM-DD."
                    .into(),
            ),
        }
    }
}
