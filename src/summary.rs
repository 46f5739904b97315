//! Summary statistics over classified feedback.
//!
//! The same fold backs both batch responses and the cumulative report.
//! An empty input averages to `0`, rendered `"0.00"`, in both cases.

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use crate::classifier::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SummaryReport {
    pub total: usize,
    pub surprise_count: usize,
    pub normal_count: usize,
    #[serde(serialize_with = "two_decimals")]
    #[schema(value_type = String, example = "1.50")]
    pub avg_sentiment: f64,
}

/// Wire shape of the cumulative summary in `GET /report`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CumulativeSummary {
    pub total_feedbacks: usize,
    pub surprise_count: usize,
    pub normal_count: usize,
    #[serde(serialize_with = "two_decimals")]
    #[schema(value_type = String, example = "1.50")]
    pub avg_sentiment: f64,
}

impl From<SummaryReport> for CumulativeSummary {
    fn from(report: SummaryReport) -> Self {
        CumulativeSummary {
            total_feedbacks: report.total,
            surprise_count: report.surprise_count,
            normal_count: report.normal_count,
            avg_sentiment: report.avg_sentiment,
        }
    }
}

pub fn summarize<'a, I>(results: I) -> SummaryReport
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let (total, surprise_count, sentiment_total) =
        results
            .into_iter()
            .fold((0usize, 0usize, 0.0f64), |(total, surprised, sum), r| {
                (total + 1, surprised + usize::from(r.surprise), sum + r.sentiment_score)
            });

    let avg_sentiment = if total == 0 {
        0.0
    } else {
        sentiment_total / total as f64
    };

    SummaryReport {
        total,
        surprise_count,
        normal_count: total - surprise_count,
        avg_sentiment,
    }
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}
