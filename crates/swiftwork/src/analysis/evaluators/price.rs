use super::super::catalog::price as copy;
use super::super::money::format_baht;
use super::super::topic::{
    lines, FixPayload, StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus,
};

/// Prices under this many baht read as below market.
pub(crate) const MARKET_FLOOR: f64 = 500.0;

/// `category` is accepted so per-category price bands can be added later; it
/// does not influence the score today.
pub(crate) fn evaluate(price: Option<f64>, _category: Option<&str>) -> TopicResult {
    let Some(price) = price.filter(|price| *price != 0.0) else {
        return TopicResult::forced(
            Topic::StartingPrice,
            0,
            TopicStatus::Fail,
            TopicDetails {
                fail_steps: lines(copy::FAIL_STEPS),
                ..TopicDetails::default()
            },
        );
    };

    if price < MARKET_FLOOR {
        return TopicResult::scored(
            Topic::StartingPrice,
            70,
            StatusThresholds::STANDARD,
            TopicDetails {
                current: Some(format_baht(price)),
                analysis: Some(copy::BELOW_MARKET_ANALYSIS.to_string()),
                suggestion: Some(copy::BELOW_MARKET_SUGGESTION.to_string()),
                fix: FixPayload::text(copy::BELOW_MARKET_FIX),
                ..TopicDetails::default()
            },
        );
    }

    TopicResult::scored(
        Topic::StartingPrice,
        85,
        StatusThresholds::STANDARD,
        TopicDetails {
            current: Some(format_baht(price)),
            pass_tips: lines(copy::PASS_TIPS),
            ..TopicDetails::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_zero_price_fails() {
        for price in [None, Some(0.0)] {
            let result = evaluate(price, Some("ออกแบบกราฟิก"));
            assert_eq!((result.score, result.status), (0, TopicStatus::Fail));
        }
    }

    #[test]
    fn market_floor_boundary() {
        let below = evaluate(Some(499.0), None);
        assert_eq!((below.score, below.status), (70, TopicStatus::Suggest));
        assert_eq!(below.details.fix, FixPayload::text("2,500 บาท"));

        let at_floor = evaluate(Some(500.0), None);
        assert_eq!((at_floor.score, at_floor.status), (85, TopicStatus::Pass));
    }

    #[test]
    fn current_value_uses_thousands_separator() {
        let result = evaluate(Some(12_500.0), None);
        assert_eq!(result.details.current.as_deref(), Some("12,500 บาท"));
        assert_eq!(result.details.pass_tips.len(), 1);
    }

    #[test]
    fn category_does_not_change_the_verdict() {
        assert_eq!(
            evaluate(Some(800.0), Some("พัฒนาเว็บ")),
            evaluate(Some(800.0), None)
        );
    }
}
