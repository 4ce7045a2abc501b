use super::catalog::recommendations as copy;
use super::topic::{TopicResult, TopicStatus};

/// Mean of the topic scores, rounded down.
pub(crate) fn overall_score(topics: &[TopicResult]) -> u8 {
    if topics.is_empty() {
        return 0;
    }
    let total: usize = topics.iter().map(|topic| usize::from(topic.score)).sum();
    (total / topics.len()) as u8
}

/// One line for failing topics, one for topics worth improving, then the
/// closing reminder. Topic order follows the input order.
pub(crate) fn recommendations(topics: &[TopicResult]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let failing = names_with_status(topics, TopicStatus::Fail);
    if !failing.is_empty() {
        recommendations.push(copy::failing(&failing.join(", ")));
    }

    let suggested = names_with_status(topics, TopicStatus::Suggest);
    if !suggested.is_empty() {
        recommendations.push(copy::suggested(&suggested.join(", ")));
    }

    recommendations.push(copy::CLOSING.to_string());
    recommendations
}

fn names_with_status(topics: &[TopicResult], status: TopicStatus) -> Vec<&'static str> {
    topics
        .iter()
        .filter(|topic| topic.status == status)
        .map(|topic| topic.topic.name())
        .collect()
}
