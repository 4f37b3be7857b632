use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ============ Raw Wire Models ============

/// A project record as received from the API or the mock file.
///
/// The wire schema is open and evolving: only `title` can be counted on at
/// the top level, every nested group is optional, and unrecognized fields
/// are preserved in `extra` for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Opaque identifier assigned by the backend.
    #[serde(rename = "projectId", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Original uploaded filename, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Project name. Empty or absent titles render as "Untitled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Client company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<LongDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperatures: Option<Temperatures>,
    /// Billing/cost breakdown, present in later schema revisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetSummary>,
    /// Fields the backend added that this client does not model yet.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Multi-field long description of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LongDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_and_objectives: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_and_impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<String>,
}

/// Grouped project metrics. Every group is optional and read defensively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocalisation: Option<GeoMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalMetrics>,
    /// Free-form budget forecast data, shape not pinned down by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_previsions: Option<Value>,
}

/// Where and how the project is staffed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoMetrics {
    /// "hybrid", "onsite" or "remote".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_details: Option<String>,
}

/// Timing information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeMetrics {
    /// Start date label, e.g. "ASAP" or an ISO date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Duration or end-date label. A later schema revision renamed the field
    /// to `duration_or_end_date`; both spellings deserialize here.
    #[serde(
        alias = "duration_or_end_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    /// The backend has emitted both booleans and labels here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_deadline: Option<String>,
}

/// Urgency flag, boolean in one schema revision and a label in another.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Urgency {
    Flag(bool),
    Label(String),
}

/// Technical requirements of the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_positions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_fit: Option<String>,
}

/// Priority scoring attached to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Temperatures {
    /// Named sub-scores. Values are kept raw since the backend has sent
    /// non-numeric junk here before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_temperatures: Option<serde_json::Map<String, Value>>,
    /// Aggregate score, nominally 0..100. Raw because the wire has carried
    /// numbers, numeric strings and garbage; coerced in [`Project::to_list_item`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_temperature: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Billing breakdown from the later schema revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profitability: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even: Option<bool>,
}

// ============ API Envelope ============

/// Server-side processing state of an uploaded project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingState {
    Processing,
    Processed,
}

/// Wrapper the envelope schema revision returns from the list endpoint:
/// the record plus its processing state and bookkeeping columns. The inner
/// project is absent while the upload is still being processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    pub id: i64,
    pub status: ProcessingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============ Flattened View Model ============

/// The normalized, UI-ready projection of a [`Project`], used for list
/// rendering. Derived on demand, never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Aggregate temperature clamped to 0..=100; 0 when missing or junk.
    pub temperature: f64,
}

impl Project {
    /// Flattens this record into the shape the listing UI renders.
    ///
    /// Total and pure: missing groups produce defaults, never errors. A
    /// record without a `projectId` gets a fresh v4 UUID, so the synthesized
    /// id is not stable across calls and must not be used for deduplication.
    pub fn to_list_item(&self) -> ProjectListItem {
        let technical = self.metrics.as_ref().and_then(|m| m.technical.as_ref());
        let time = self.metrics.as_ref().and_then(|m| m.time.as_ref());

        ProjectListItem {
            id: self
                .project_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("Untitled")
                .to_string(),
            company: self.company.clone(),
            tags: technical
                .and_then(|t| t.technologies.clone())
                .unwrap_or_default(),
            start_date: time.and_then(|t| t.start_date.clone()),
            duration: time.and_then(|t| t.duration.clone()),
            description: self
                .short_description
                .clone()
                .or_else(|| {
                    self.long_description
                        .as_ref()
                        .and_then(|d| d.context_and_objectives.clone())
                }),
            temperature: clamp(
                coerce_number(
                    self.temperatures
                        .as_ref()
                        .and_then(|t| t.global_temperature.as_ref()),
                ),
                0.0,
                100.0,
            ),
        }
    }
}

/// Loose numeric coercion of a raw wire value: numbers pass through,
/// numeric strings parse, everything else (including nothing) reads as 0.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Clamps `n` to `min..=max`, mapping NaN and infinities to 0 first.
fn clamp(n: f64, min: f64, max: f64) -> f64 {
    let n = if n.is_finite() { n } else { 0.0 };
    n.max(min).min(max)
}
