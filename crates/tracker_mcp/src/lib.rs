use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use tracing_subscriber::EnvFilter;
use tracker_core::{Activity, BodyProfile, Config, MetricsReport};

pub mod error;

use error::{McpError, McpResult};

const DEFAULT_LOG_FILTER: &str = "info,rmcp=warn";

/// Pick the log level (`TRACKER_LOG_LEVEL`, then `RUST_LOG`, then `info`) and
/// build the subscriber filter for it, keeping rmcp internals at `warn`.
///
/// An unparsable level falls back to `info,rmcp=warn`.
pub fn log_filter(config: &Config, rust_log: Option<String>) -> (String, EnvFilter) {
    let log_env = config
        .log_level
        .clone()
        .or(rust_log)
        .unwrap_or_else(|| "info".to_string());
    let combined_filter = format!("{},rmcp=warn", log_env);
    let env_filter = EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    (log_env, env_filter)
}

#[derive(Clone)]
pub struct TrackerMcpHandler {
    profile: Option<BodyProfile>,
    tool_router: rmcp::handler::server::tool::ToolRouter<TrackerMcpHandler>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RecordParams {
    /// Raw tracker record, e.g. `5000,Walking,1h30m` or `5000,1h30m`
    pub record: String,
    /// Body weight in kilograms; defaults to the configured profile
    pub weight: Option<f64>,
    /// Body height in meters; defaults to the configured profile
    pub height: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SpentCaloriesParams {
    /// `Walking` or `Running`
    pub activity: String,
    pub steps: u32,
    /// Duration literal such as `1h30m`
    pub duration: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TrainingInfoResult {
    pub report: String,
    pub metrics: MetricsReport,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DayActionInfoResult {
    /// Empty when the record was rejected
    pub report: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SpentCaloriesResult {
    pub activity: Activity,
    pub calories: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
}

#[tool_router]
impl TrackerMcpHandler {
    pub fn new(profile: Option<BodyProfile>) -> Self {
        Self {
            profile,
            tool_router: Self::tool_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    /// Per-request measurements win over the configured profile.
    fn resolve_profile(&self, weight: Option<f64>, height: Option<f64>) -> McpResult<BodyProfile> {
        let weight = weight
            .or(self.profile.map(|p| p.weight))
            .ok_or_else(|| McpError::Validation("weight is required".into()))?;
        let height = height
            .or(self.profile.map(|p| p.height))
            .ok_or_else(|| McpError::Validation("height is required".into()))?;
        Ok(BodyProfile { weight, height })
    }

    #[tool(
        name = "training_info",
        description = "Summarize a `<steps>,<activity>,<duration>` training record: duration, distance, mean speed and calories"
    )]
    async fn training_info(
        &self,
        params: Parameters<RecordParams>,
    ) -> Result<Json<TrainingInfoResult>, String> {
        let p = params.0;
        let body = self.resolve_profile(p.weight, p.height)?;
        let metrics = tracker_core::training_metrics(&p.record, body.weight, body.height)
            .map_err(McpError::from)?;
        Ok(Json(TrainingInfoResult {
            report: metrics.to_string(),
            metrics,
        }))
    }

    #[tool(
        name = "day_action_info",
        description = "Summarize a `<steps>,<duration>` day record: steps, distance and calories. Returns an empty report for rejected records"
    )]
    async fn day_action_info(
        &self,
        params: Parameters<RecordParams>,
    ) -> Result<Json<DayActionInfoResult>, String> {
        let p = params.0;
        let body = self.resolve_profile(p.weight, p.height)?;
        let report = tracker_core::day_action_info(&p.record, body.weight, body.height);
        Ok(Json(DayActionInfoResult { report }))
    }

    #[tool(
        name = "spent_calories",
        description = "Calories, distance and mean speed for a number of steps walked or run over a duration"
    )]
    async fn spent_calories(
        &self,
        params: Parameters<SpentCaloriesParams>,
    ) -> Result<Json<SpentCaloriesResult>, String> {
        let p = params.0;
        let body = self.resolve_profile(p.weight, p.height)?;
        let activity: Activity = p.activity.trim().parse().map_err(McpError::from)?;
        let duration =
            tracker_core::duration::parse_duration(p.duration.trim()).map_err(McpError::from)?;
        let calories =
            tracker_core::spent_calories(activity, p.steps, body.weight, body.height, duration)
                .map_err(McpError::from)?;
        Ok(Json(SpentCaloriesResult {
            activity,
            calories,
            distance_km: tracker_core::distance(p.steps, body.height),
            mean_speed_kmh: tracker_core::mean_speed(p.steps, body.height, duration),
        }))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for TrackerMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
        )
        .with_instructions(
            "Activity tracker MCP server - turns raw step records into distance, \
             speed and calorie summaries.",
        )
    }
}
