use serde::Deserialize;
use serde_json::json;

use crate::core::config::DetectionConfig;
use crate::core::error::{AppError, Result};

/// Class label returned by the mock predictor when no API key is configured
pub const MOCK_CLASS: &str = "Sampah (Mock)";

/// Confidence returned by the mock predictor
pub const MOCK_CONFIDENCE: f64 = 0.95;

/// One labeled prediction from the detection API
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

/// Result of a classification call: the parsed predictions plus the raw
/// payload, kept opaque for storage alongside the report.
#[derive(Debug, Clone)]
pub struct DetectionOutcome {
    pub predictions: Vec<Prediction>,
    pub raw: serde_json::Value,
}

/// Client for the hosted image-detection API (Roboflow-style endpoint).
///
/// `POST {base}/{model}/{version}?api_key=…&image=…` with the image passed
/// by URL. Without an API key the client runs in mock mode and returns a
/// fixed prediction without any network call.
pub struct DetectionService {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model_id: String,
    model_version: String,
}

impl DetectionService {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("EnvWatchCore/1.0 (citizen-report-system)")
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url,
            api_key: config.api_key,
            model_id: config.model_id,
            model_version: config.model_version,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.api_key.is_none()
    }

    /// Classify the image behind `image_url`.
    ///
    /// Transport and parse failures surface as errors; the caller decides
    /// whether to recover (the report workflow degrades and continues).
    pub async fn classify(&self, image_url: &str) -> Result<DetectionOutcome> {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("Detection API key missing, returning mock prediction");
            return Ok(DetectionOutcome {
                predictions: vec![Prediction {
                    class: MOCK_CLASS.to_string(),
                    confidence: MOCK_CONFIDENCE,
                }],
                raw: json!({ "mock": true }),
            });
        };

        let url = format!(
            "{}/{}/{}?api_key={}&image={}",
            self.base_url,
            self.model_id,
            self.model_version,
            api_key,
            urlencoding::encode(image_url)
        );

        tracing::debug!(
            "Classifying image via {}/{}",
            self.model_id,
            self.model_version
        );

        let response = self.client.post(&url).send().await.map_err(|e| {
            tracing::error!("Detection request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Detection request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalServiceError(format!(
                "Detection API returned status: {}",
                status
            )));
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse detection response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse detection response: {}", e))
        })?;

        let predictions = parse_predictions(&raw);

        Ok(DetectionOutcome { predictions, raw })
    }
}

/// Pull the prediction list out of the raw detection payload.
///
/// Entries missing a class or confidence are skipped rather than failing
/// the whole call.
fn parse_predictions(raw: &serde_json::Value) -> Vec<Prediction> {
    raw.get("predictions")
        .and_then(|p| p.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
