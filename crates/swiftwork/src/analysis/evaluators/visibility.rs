use super::super::catalog::visibility as copy;
use super::super::topic::{
    lines, FixPayload, StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus,
    WorkedExample,
};

const TAG_TARGET: usize = 5;
const DESCRIPTION_TARGET: usize = 200;
/// Descriptions shorter than this get an example description in the fix.
const DESCRIPTION_ADEQUATE: usize = 100;
const DERIVED_TAG_LIMIT: usize = 5;
const CURRENT_TAG_LIMIT: usize = 8;
const MIN_TAG_CHARS: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Signals {
    tag_count: usize,
    description_len: usize,
}

/// Grades how discoverable the listing card is from its tags and description.
pub(crate) fn evaluate(tags: Option<&[String]>, description: Option<&str>) -> TopicResult {
    let tags = tags.unwrap_or_default();
    let description = description.map(str::trim).unwrap_or_default();
    let signals = Signals {
        tag_count: tags.len(),
        description_len: description.chars().count(),
    };

    let score = score_for(signals);
    let status = StatusThresholds::VISIBILITY.status_for(score);

    let suggested_tags = if tags.is_empty() {
        derive_tags(description)
    } else {
        tags.iter().take(CURRENT_TAG_LIMIT).cloned().collect()
    };

    let fix = if signals.description_len < DESCRIPTION_ADEQUATE {
        FixPayload::StructuredExample(WorkedExample::TagsAndDescription {
            tags: suggested_tags,
            description: copy::EXAMPLE_DESCRIPTION.to_string(),
        })
    } else if signals.tag_count == 0 {
        FixPayload::StructuredExample(WorkedExample::TagsAndDescription {
            tags: suggested_tags,
            description: String::new(),
        })
    } else {
        FixPayload::None
    };

    TopicResult::scored(
        Topic::Visibility,
        score,
        StatusThresholds::VISIBILITY,
        TopicDetails {
            current: Some(copy::current(signals.tag_count, signals.description_len)),
            analysis: Some(diagnostic(signals).to_string()),
            suggestion: (status != TopicStatus::Pass).then(|| copy::SUGGESTION.to_string()),
            fix,
            // Unreachable while the score table bottoms out at 50.
            fail_steps: if status == TopicStatus::Fail {
                lines(copy::FAIL_STEPS)
            } else {
                Vec::new()
            },
            pass_tips: if status == TopicStatus::Pass {
                lines(copy::PASS_TIPS)
            } else {
                Vec::new()
            },
        },
    )
}

fn score_for(signals: Signals) -> u8 {
    let Signals {
        tag_count,
        description_len,
    } = signals;

    if tag_count >= TAG_TARGET && description_len >= DESCRIPTION_TARGET {
        85
    } else if tag_count >= TAG_TARGET || description_len >= DESCRIPTION_TARGET {
        80
    } else if tag_count > 0 || description_len > 0 {
        70
    } else {
        50
    }
}

fn diagnostic(signals: Signals) -> &'static str {
    match (signals.tag_count == 0, signals.description_len == 0) {
        (true, true) => copy::NOTHING_ANALYSIS,
        (true, false) => copy::NO_TAGS_ANALYSIS,
        (false, true) => copy::NO_DESCRIPTION_ANALYSIS,
        (false, false) => copy::BOTH_PRESENT_ANALYSIS,
    }
}

/// Candidate tags taken from description words, in first-seen order. Falls
/// back to the default set when there is no description at all.
pub(crate) fn derive_tags(description: &str) -> Vec<String> {
    if description.trim().is_empty() {
        return lines(copy::DEFAULT_TAGS);
    }

    let mut tags: Vec<String> = Vec::new();
    for word in description.split_whitespace() {
        let word = word.trim_end_matches(copy::TRAILING_PUNCTUATION);
        if word.chars().count() < MIN_TAG_CHARS || tags.iter().any(|tag| tag == word) {
            continue;
        }
        tags.push(word.to_string());
        if tags.len() == DERIVED_TAG_LIMIT {
            break;
        }
    }
    tags
}
