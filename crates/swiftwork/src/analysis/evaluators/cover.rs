use super::super::catalog::cover as copy;
use super::super::domain::filled;
use super::super::topic::{lines, Topic, TopicDetails, TopicResult, TopicStatus};

const PRESENT_SCORE: u8 = 85;

/// Presence of a cover image is all that is checked; the image itself is not
/// inspected.
pub(crate) fn evaluate(cover_image: Option<&str>) -> TopicResult {
    if filled(cover_image).is_none() {
        return TopicResult::forced(
            Topic::CoverImage,
            0,
            TopicStatus::Fail,
            TopicDetails {
                fail_steps: lines(copy::FAIL_STEPS),
                ..TopicDetails::default()
            },
        );
    }

    TopicResult::forced(
        Topic::CoverImage,
        PRESENT_SCORE,
        TopicStatus::Pass,
        TopicDetails {
            pass_tips: lines(copy::PASS_TIPS),
            ..TopicDetails::default()
        },
    )
}
