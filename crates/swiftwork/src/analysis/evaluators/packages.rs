use super::super::catalog::packages as copy;
use super::super::domain::PackageRecord;
use super::super::topic::{
    lines, FixPayload, StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus,
    WorkedExample,
};

const PENALTY_PER_INCOMPLETE: usize = 10;
const MAX_PENALTY: usize = 30;

pub(crate) fn evaluate(packages: Option<&[PackageRecord]>) -> TopicResult {
    let packages = match packages {
        Some(packages) if !packages.is_empty() => packages,
        _ => {
            return TopicResult::forced(
                Topic::Packages,
                0,
                TopicStatus::Fail,
                TopicDetails {
                    analysis: Some(copy::MISSING_ANALYSIS.to_string()),
                    suggestion: Some(copy::MISSING_SUGGESTION.to_string()),
                    fix: example_tiers(),
                    fail_steps: lines(copy::MISSING_FAIL_STEPS),
                    ..TopicDetails::default()
                },
            )
        }
    };

    let count = packages.len();
    let incomplete = packages.iter().filter(|record| record.is_incomplete()).count();

    let base: u8 = match count {
        1 => 60,
        2 | 3 => 90,
        _ => 80,
    };
    let penalty = (incomplete * PENALTY_PER_INCOMPLETE).min(MAX_PENALTY) as u8;
    let score = base.saturating_sub(penalty);
    let status = StatusThresholds::STANDARD.status_for(score);

    let (analysis, suggestion) = if incomplete > 0 {
        (copy::INCOMPLETE_ANALYSIS, Some(copy::INCOMPLETE_SUGGESTION))
    } else if count == 1 {
        (copy::SINGLE_TIER_ANALYSIS, Some(copy::SINGLE_TIER_SUGGESTION))
    } else if count > 3 {
        (copy::TOO_MANY_ANALYSIS, Some(copy::TOO_MANY_SUGGESTION))
    } else {
        (copy::BALANCED_ANALYSIS, None)
    };

    let fix = if incomplete > 0 || count < 2 {
        example_tiers()
    } else {
        FixPayload::None
    };

    TopicResult::scored(
        Topic::Packages,
        score,
        StatusThresholds::STANDARD,
        TopicDetails {
            current: Some(copy::current(count, incomplete)),
            analysis: Some(analysis.to_string()),
            suggestion: suggestion
                .filter(|_| status != TopicStatus::Pass)
                .map(str::to_string),
            fix,
            fail_steps: Vec::new(),
            pass_tips: if status == TopicStatus::Pass {
                lines(copy::PASS_TIPS)
            } else {
                Vec::new()
            },
        },
    )
}

fn example_tiers() -> FixPayload {
    FixPayload::StructuredExample(WorkedExample::PackageTiers(copy::EXAMPLE_TIERS.to_vec()))
}
