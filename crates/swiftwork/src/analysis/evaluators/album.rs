use super::super::catalog::album as copy;
use super::super::topic::{
    lines, FixPayload, StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus,
};

const RECOMMENDED_MIN: usize = 5;
const RECOMMENDED_MAX: usize = 15;

pub(crate) fn evaluate(album_images: Option<&[String]>) -> TopicResult {
    let count = album_images.map(<[String]>::len).unwrap_or(0);

    if count == 0 {
        return TopicResult::forced(
            Topic::Album,
            0,
            TopicStatus::Fail,
            TopicDetails {
                analysis: Some(copy::MISSING_ANALYSIS.to_string()),
                suggestion: Some(copy::MISSING_SUGGESTION.to_string()),
                fix: FixPayload::text(copy::MISSING_FIX),
                fail_steps: lines(copy::MISSING_FAIL_STEPS),
                ..TopicDetails::default()
            },
        );
    }

    let score = if count < RECOMMENDED_MIN {
        60
    } else if count <= RECOMMENDED_MAX {
        90
    } else {
        85
    };
    let status = StatusThresholds::STANDARD.status_for(score);

    let too_few = count < RECOMMENDED_MIN;
    let mut analysis = copy::analysis(count);
    if too_few {
        analysis.push_str(copy::CREDIBILITY_CAVEAT);
    }

    TopicResult::scored(
        Topic::Album,
        score,
        StatusThresholds::STANDARD,
        TopicDetails {
            current: Some(copy::current(count)),
            analysis: Some(analysis),
            suggestion: too_few.then(|| copy::FEW_SUGGESTION.to_string()),
            fix: FixPayload::text(if too_few {
                copy::ADD_MORE_FIX
            } else {
                copy::POLISH_FIX
            }),
            fail_steps: Vec::new(),
            pass_tips: if status == TopicStatus::Pass {
                lines(copy::PASS_TIPS)
            } else {
                Vec::new()
            },
        },
    )
}
