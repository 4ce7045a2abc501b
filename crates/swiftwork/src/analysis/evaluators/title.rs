use super::super::catalog::title as copy;
use super::super::domain::filled;
use super::super::topic::{
    lines, FixPayload, StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus,
};

pub(crate) const MAX_LENGTH: usize = 70;
pub(crate) const MIN_LENGTH: usize = 20;

pub(crate) fn evaluate(title: Option<&str>) -> TopicResult {
    let Some(title) = filled(title) else {
        return TopicResult::forced(
            Topic::Title,
            0,
            TopicStatus::Fail,
            TopicDetails {
                fail_steps: lines(copy::FAIL_STEPS),
                ..TopicDetails::default()
            },
        );
    };

    let length = title.chars().count();

    match length {
        n if n > MAX_LENGTH => {
            let truncated: String = title.chars().take(MAX_LENGTH).collect();
            TopicResult::scored(
                Topic::Title,
                60,
                StatusThresholds::STANDARD,
                TopicDetails {
                    current: Some(title.to_string()),
                    analysis: Some(copy::too_long_analysis(n)),
                    suggestion: Some(copy::TOO_LONG_SUGGESTION.to_string()),
                    fix: FixPayload::text(format!("{truncated}{}", copy::TRUNCATION_MARK)),
                    ..TopicDetails::default()
                },
            )
        }
        n if n < MIN_LENGTH => TopicResult::scored(
            Topic::Title,
            65,
            StatusThresholds::STANDARD,
            TopicDetails {
                current: Some(title.to_string()),
                analysis: Some(copy::TOO_SHORT_ANALYSIS.to_string()),
                suggestion: Some(copy::TOO_SHORT_SUGGESTION.to_string()),
                fix: FixPayload::text(format!("{title}{}", copy::MARKETING_SUFFIX)),
                ..TopicDetails::default()
            },
        ),
        _ => TopicResult::scored(
            Topic::Title,
            80,
            StatusThresholds::STANDARD,
            TopicDetails {
                pass_tips: lines(copy::PASS_TIPS),
                ..TopicDetails::default()
            },
        ),
    }
}
