//! Pure triage rules over classification results.
//!
//! Reduction of the prediction list and category derivation are plain
//! functions of the classification payload, independent of the I/O
//! orchestration in the report workflow.

use serde_json::json;

use crate::features::reports::models::{AiAnalysis, ReportCategory};
use crate::features::reports::services::detection_service::DetectionOutcome;

/// Class label recorded when no prediction came back
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Class label recorded when the detection call failed
pub const ERROR_CLASS: &str = "AI_Error";

/// Keywords (matched against the lower-cased class label) that mark a
/// prediction as garbage-related
pub const GARBAGE_KEYWORDS: [&str; 4] = ["garbage", "trash", "plastic", "sampah"];

/// Minimum confidence for a garbage keyword match to auto-assign the
/// `Sampah` category
pub const GARBAGE_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Reduce a detection outcome to the single highest-confidence prediction.
///
/// An empty prediction list yields `detected = false` with the unknown
/// class label; the raw payload is retained either way.
pub fn summarize(outcome: DetectionOutcome) -> AiAnalysis {
    let best = outcome
        .predictions
        .into_iter()
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence));

    match best {
        Some(prediction) => AiAnalysis {
            detected: true,
            class: prediction.class,
            confidence: prediction.confidence,
            raw_result: outcome.raw,
        },
        None => AiAnalysis {
            detected: false,
            class: UNKNOWN_CLASS.to_string(),
            confidence: 0.0,
            raw_result: outcome.raw,
        },
    }
}

/// Degraded analysis recorded when the detection call errored.
///
/// Classification failure is non-fatal to the submission workflow: the
/// report is persisted with this marker instead.
pub fn degraded() -> AiAnalysis {
    AiAnalysis {
        detected: false,
        class: ERROR_CLASS.to_string(),
        confidence: 0.0,
        raw_result: json!({}),
    }
}

/// Derive the triage category from a classification result.
///
/// Garbage keyword in the lower-cased class label AND confidence above the
/// threshold → `Sampah`; anything else stays at the manual-verification
/// default.
pub fn categorize(analysis: &AiAnalysis) -> ReportCategory {
    if !analysis.detected {
        return ReportCategory::default();
    }

    let class = analysis.class.to_lowercase();
    let keyword_match = GARBAGE_KEYWORDS.iter().any(|k| class.contains(k));

    if keyword_match && analysis.confidence > GARBAGE_CONFIDENCE_THRESHOLD {
        ReportCategory::Sampah
    } else {
        ReportCategory::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::services::detection_service::Prediction;

    fn outcome(predictions: Vec<(&str, f64)>) -> DetectionOutcome {
        DetectionOutcome {
            predictions: predictions
                .into_iter()
                .map(|(class, confidence)| Prediction {
                    class: class.to_string(),
                    confidence,
                })
                .collect(),
            raw: json!({ "source": "test" }),
        }
    }

    #[test]
    fn test_summarize_picks_highest_confidence() {
        let analysis = summarize(outcome(vec![
            ("cardboard", 0.35),
            ("plastic-bag", 0.88),
            ("glass", 0.61),
        ]));

        assert!(analysis.detected);
        assert_eq!(analysis.class, "plastic-bag");
        assert!((analysis.confidence - 0.88).abs() < f64::EPSILON);
        assert_eq!(analysis.raw_result, json!({ "source": "test" }));
    }

    #[test]
    fn test_summarize_empty_predictions() {
        let analysis = summarize(outcome(vec![]));

        assert!(!analysis.detected);
        assert_eq!(analysis.class, UNKNOWN_CLASS);
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_categorize_garbage_keyword_above_threshold() {
        for class in ["Garbage-pile", "trash_bag", "PLASTIC bottle", "sampah basah"] {
            let analysis = AiAnalysis {
                detected: true,
                class: class.to_string(),
                confidence: 0.41,
                raw_result: json!({}),
            };
            assert_eq!(categorize(&analysis), ReportCategory::Sampah, "{}", class);
        }
    }

    #[test]
    fn test_categorize_at_threshold_not_assigned() {
        // Threshold is exclusive: exactly 0.4 stays unverified
        let analysis = AiAnalysis {
            detected: true,
            class: "garbage".to_string(),
            confidence: GARBAGE_CONFIDENCE_THRESHOLD,
            raw_result: json!({}),
        };
        assert_eq!(categorize(&analysis), ReportCategory::ButuhVerifikasi);
    }

    #[test]
    fn test_categorize_non_garbage_class() {
        let analysis = AiAnalysis {
            detected: true,
            class: "pothole".to_string(),
            confidence: 0.99,
            raw_result: json!({}),
        };
        assert_eq!(categorize(&analysis), ReportCategory::ButuhVerifikasi);
    }

    #[test]
    fn test_categorize_not_detected() {
        let analysis = AiAnalysis {
            detected: false,
            class: "garbage".to_string(),
            confidence: 0.9,
            raw_result: json!({}),
        };
        assert_eq!(categorize(&analysis), ReportCategory::ButuhVerifikasi);
    }

    #[test]
    fn test_degraded_analysis_marker() {
        let analysis = degraded();
        assert!(!analysis.detected);
        assert_eq!(analysis.class, ERROR_CLASS);
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_mock_prediction_categorizes_as_sampah() {
        // The mock predictor's fixed label must satisfy the garbage rule
        let analysis = summarize(DetectionOutcome {
            predictions: vec![Prediction {
                class: super::super::detection_service::MOCK_CLASS.to_string(),
                confidence: super::super::detection_service::MOCK_CONFIDENCE,
            }],
            raw: json!({ "mock": true }),
        });
        assert_eq!(categorize(&analysis), ReportCategory::Sampah);
    }
}
