use super::super::catalog::category as copy;
use super::super::domain::filled;
use super::super::topic::{lines, FixPayload, Topic, TopicDetails, TopicResult, TopicStatus};

/// Checks that both category levels are chosen and that a logo-design title
/// sits under a logo subcategory.
pub(crate) fn evaluate(
    category: Option<&str>,
    subcategory: Option<&str>,
    title: Option<&str>,
) -> TopicResult {
    let (Some(category), Some(subcategory)) = (filled(category), filled(subcategory)) else {
        return TopicResult::forced(
            Topic::Category,
            0,
            TopicStatus::Fail,
            TopicDetails {
                fail_steps: lines(copy::FAIL_STEPS),
                ..TopicDetails::default()
            },
        );
    };

    let current = format!("{category} > {subcategory}");

    if is_logo_mismatch(title, subcategory) {
        return TopicResult::forced(
            Topic::Category,
            60,
            TopicStatus::Suggest,
            TopicDetails {
                current: Some(current),
                analysis: Some(copy::MISMATCH_ANALYSIS.to_string()),
                suggestion: Some(copy::MISMATCH_SUGGESTION.to_string()),
                fix: FixPayload::text(copy::MISMATCH_FIX),
                ..TopicDetails::default()
            },
        );
    }

    TopicResult::forced(
        Topic::Category,
        85,
        TopicStatus::Pass,
        TopicDetails {
            current: Some(current),
            pass_tips: lines(copy::PASS_TIPS),
            ..TopicDetails::default()
        },
    )
}

fn is_logo_mismatch(title: Option<&str>, subcategory: &str) -> bool {
    let mentions_logo = title
        .map(|title| title.to_lowercase().contains(copy::LOGO_KEYWORD_TITLE))
        .unwrap_or(false);

    mentions_logo
        && !subcategory
            .to_lowercase()
            .contains(copy::LOGO_KEYWORD_SUBCATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_either_level_fails() {
        for (category, subcategory) in [
            (None, Some("Logo")),
            (Some("ออกแบบกราฟิก"), None),
            (Some(""), Some("Logo")),
        ] {
            let result = evaluate(category, subcategory, None);
            assert_eq!(result.status, TopicStatus::Fail);
            assert_eq!(result.score, 0);
            assert_eq!(result.details.fail_steps.len(), 1);
        }
    }

    #[test]
    fn logo_title_under_logo_subcategory_passes() {
        let result = evaluate(
            Some("ออกแบบกราฟิก"),
            Some("LOGO Design"),
            Some("ออกแบบโลโก้ร้านกาแฟ"),
        );
        assert_eq!((result.score, result.status), (85, TopicStatus::Pass));
        assert_eq!(
            result.details.current.as_deref(),
            Some("ออกแบบกราฟิก > LOGO Design")
        );
    }

    #[test]
    fn logo_title_under_other_subcategory_is_flagged() {
        let result = evaluate(
            Some("ออกแบบกราฟิก"),
            Some("Banner โฆษณา"),
            Some("รับออกแบบโลโก้ราคาถูก"),
        );
        assert_eq!((result.score, result.status), (60, TopicStatus::Suggest));
        assert_eq!(result.details.fix, FixPayload::text("ออกแบบกราฟิก > Logo"));
        assert!(result.details.pass_tips.is_empty());
    }

    #[test]
    fn non_logo_titles_are_not_cross_checked() {
        let result = evaluate(Some("ออกแบบกราฟิก"), Some("Presentation"), None);
        assert_eq!(result.status, TopicStatus::Pass);
    }
}
