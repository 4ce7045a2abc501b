//! Listing rubric: seven independent topic evaluators and the aggregation
//! step that turns their results into an overall score and recommendations.

mod aggregate;
pub(crate) mod catalog;
pub mod domain;
mod evaluators;
mod money;
pub mod topic;

#[cfg(test)]
mod tests;

pub use domain::{DeliveryTime, Listing, PackageRecord};
pub use money::format_baht;
pub use topic::{
    FixPayload, PackageTierExample, StatusThresholds, Topic, TopicDetails, TopicResult,
    TopicStatus, WorkedExample,
};

use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Reserved for a future analysis cache; nothing is cached today.
    pub force_refresh: bool,
}

/// Outcome of grading one listing. Topics are always in [`Topic::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub topics: [TopicResult; Topic::COUNT],
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Assembles a result from already-scored topics, deriving the overall
    /// score and recommendations.
    pub fn from_topics(topics: [TopicResult; Topic::COUNT]) -> Self {
        let overall_score = aggregate::overall_score(&topics);
        let recommendations = aggregate::recommendations(&topics);
        Self {
            overall_score,
            topics,
            recommendations,
        }
    }

    pub fn topic(&self, topic: Topic) -> &TopicResult {
        &self.topics[topic as usize]
    }
}

pub fn analyze_listing(listing: &Listing) -> AnalysisResult {
    analyze_with(listing, AnalyzeOptions::default())
}

pub fn analyze_with(listing: &Listing, options: AnalyzeOptions) -> AnalysisResult {
    if options.force_refresh {
        debug!("force refresh requested; analysis is computed fresh on every call");
    }

    let topics = [
        evaluators::cover::evaluate(listing.cover_image.as_deref()),
        evaluators::title::evaluate(listing.title.as_deref()),
        evaluators::category::evaluate(
            listing.category.as_deref(),
            listing.subcategory.as_deref(),
            listing.title.as_deref(),
        ),
        evaluators::price::evaluate(listing.price, listing.category.as_deref()),
        evaluators::visibility::evaluate(
            listing.tags.as_deref(),
            listing.description.as_deref(),
        ),
        evaluators::packages::evaluate(listing.packages.as_deref()),
        evaluators::album::evaluate(listing.album_images.as_deref()),
    ];

    for result in &topics {
        debug!(
            topic = ?result.topic,
            score = result.score,
            status = result.status.label(),
            "topic evaluated"
        );
    }

    let result = AnalysisResult::from_topics(topics);
    info!(
        overall_score = result.overall_score,
        recommendations = result.recommendations.len(),
        "listing analysis complete"
    );
    result
}
