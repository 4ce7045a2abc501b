//! Wire shapes returned to the browser extension. All fix-payload text
//! rendering happens here.

use crate::analysis::{
    format_baht, AnalysisResult, FixPayload, Topic, TopicResult, TopicStatus, WorkedExample,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub overall_score: u8,
    pub topics: Vec<TopicView>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicView {
    pub name: &'static str,
    pub emoji: &'static str,
    pub score: u8,
    pub status: TopicStatus,
    pub details: TopicDetailsView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopicDetailsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicEntry {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// Canonical topic list in report order.
pub fn topic_entries() -> Vec<TopicEntry> {
    Topic::ALL
        .into_iter()
        .map(|topic| TopicEntry {
            name: topic.name(),
            emoji: topic.emoji(),
        })
        .collect()
}

impl From<&AnalysisResult> for AnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            overall_score: result.overall_score,
            topics: result.topics.iter().map(TopicView::from).collect(),
            recommendations: result.recommendations.clone(),
        }
    }
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self::from(&result)
    }
}

impl From<&TopicResult> for TopicView {
    fn from(result: &TopicResult) -> Self {
        let details = &result.details;
        let non_empty = |items: &Vec<String>| (!items.is_empty()).then(|| items.clone());

        Self {
            name: result.topic.name(),
            emoji: result.topic.emoji(),
            score: result.score,
            status: result.status,
            details: TopicDetailsView {
                current: details.current.clone(),
                ai_analysis: details.analysis.clone(),
                suggestion: details.suggestion.clone(),
                ai_fix: render_fix(&details.fix),
                fail_steps: non_empty(&details.fail_steps),
                pass_tips: non_empty(&details.pass_tips),
            },
        }
    }
}

pub fn render_fix(fix: &FixPayload) -> Option<String> {
    match fix {
        FixPayload::None => None,
        FixPayload::PlainText(text) => Some(text.clone()),
        FixPayload::StructuredExample(example) => Some(render_example(example)),
    }
}

fn render_example(example: &WorkedExample) -> String {
    match example {
        WorkedExample::PackageTiers(tiers) => tiers
            .iter()
            .map(|tier| {
                format!(
                    "{}: {} / {} วัน - {}",
                    tier.name,
                    format_baht(f64::from(tier.price)),
                    tier.delivery_days,
                    tier.includes
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        WorkedExample::TagsAndDescription { tags, description } => {
            let mut text = format!("แท็กแนะนำ: {}", tags.join(", "));
            if !description.is_empty() {
                text.push_str("\n\nตัวอย่างคำอธิบาย:\n");
                text.push_str(description);
            }
            text
        }
    }
}
