use std::collections::BTreeMap;
use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRequest {
    pub biomarkers: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    pub risk_score: f64,
    pub risk_level: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionRequest {
    pub sample_a: BTreeMap<String, f64>,
    pub sample_b: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneDelta {
    pub gene: String,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResponse {
    pub top_genes: Vec<GeneDelta>,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionRequest {
    pub mission: String,
    pub duration_days: u64,
    #[serde(default)]
    pub environment: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionResponse {
    pub mission: String,
    pub duration_days: u64,
    pub summary: String,
    pub environment: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub time: f64,
}

/// Error returned by [`AiServiceClient`].
#[derive(Debug)]
pub enum ClientError {
    /// Transport failure or undecodable response.
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Api { status: StatusCode, body: Value },
}

impl ClientError {
    /// Status code for API errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }

    /// Field names from a validation error body, in reported order.
    pub fn invalid_fields(&self) -> Vec<String> {
        let ClientError::Api { body, .. } = self else {
            return Vec::new();
        };
        body.get("details")
            .and_then(Value::as_array)
            .map(|details| {
                details
                    .iter()
                    .filter_map(|d| d.get("field").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "request failed: {e}"),
            ClientError::Api { status, body } => write!(f, "service returned {status}: {body}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

pub struct AiServiceClient {
    client: Client,
    base_url: String,
}

impl AiServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json("/healthz").await
    }

    /// Service status, including whether demo logic is active.
    pub async fn status(&self) -> Result<Value, ClientError> {
        self.get_json("/api/v1/ai/status").await
    }

    pub async fn models(&self) -> Result<Value, ClientError> {
        self.get_json("/api/v1/ai/models").await
    }

    pub async fn predict_health_risk(&self, req: &RiskRequest) -> Result<RiskResponse, ClientError> {
        self.post_json("/api/v1/ai/predict/health-risk", req).await
    }

    pub async fn analyze_gene_expression(
        &self,
        req: &ExpressionRequest,
    ) -> Result<ExpressionResponse, ClientError> {
        self.post_json("/api/v1/ai/analyze/gene-expression", req).await
    }

    pub async fn simulate_mission(&self, req: &MissionRequest) -> Result<MissionResponse, ClientError> {
        self.post_json("/api/v1/ai/simulate/mission", req).await
    }

    /// POST any serializable body, for payloads the typed requests cannot express.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        decode(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        return Err(ClientError::Api { status, body });
    }
    Ok(resp.json().await?)
}
