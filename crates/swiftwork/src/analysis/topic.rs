use serde::Serialize;

/// The seven listing-quality dimensions, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    CoverImage,
    Title,
    Category,
    StartingPrice,
    Visibility,
    Packages,
    Album,
}

impl Topic {
    pub const COUNT: usize = 7;

    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::CoverImage,
        Topic::Title,
        Topic::Category,
        Topic::StartingPrice,
        Topic::Visibility,
        Topic::Packages,
        Topic::Album,
    ];

    /// Canonical display name, also used as the lookup key by clients.
    pub fn name(self) -> &'static str {
        match self {
            Topic::CoverImage => "ภาพปกงาน",
            Topic::Title => "ชื่องาน",
            Topic::Category => "หมวดหมู่",
            Topic::StartingPrice => "ราคาเริ่มต้น",
            Topic::Visibility => "เพิ่มการมองเห็นของการ์ดงาน",
            Topic::Packages => "ข้อมูลแพ็กเกจ",
            Topic::Album => "อัลบั้มผลงาน",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Topic::CoverImage => "🖼️",
            Topic::Title => "📝",
            Topic::Category => "🏷️",
            Topic::StartingPrice => "💲",
            Topic::Visibility => "👁️",
            Topic::Packages => "📦",
            Topic::Album => "📚",
        }
    }

    /// Exact match on the canonical name; no trimming or case folding.
    pub fn from_name(name: &str) -> Option<Self> {
        Topic::ALL.into_iter().find(|topic| topic.name() == name)
    }
}

/// Coarse verdict for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Pass,
    Suggest,
    Fail,
}

impl TopicStatus {
    pub fn label(self) -> &'static str {
        match self {
            TopicStatus::Pass => "pass",
            TopicStatus::Suggest => "suggest",
            TopicStatus::Fail => "fail",
        }
    }
}

/// Lower score bounds for `pass` and `suggest`; anything below is `fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusThresholds {
    pub pass: u8,
    pub suggest: u8,
}

impl StatusThresholds {
    pub const STANDARD: StatusThresholds = StatusThresholds {
        pass: 80,
        suggest: 50,
    };

    pub const VISIBILITY: StatusThresholds = StatusThresholds {
        pass: 75,
        suggest: 50,
    };

    pub fn status_for(self, score: u8) -> TopicStatus {
        if score >= self.pass {
            TopicStatus::Pass
        } else if score >= self.suggest {
            TopicStatus::Suggest
        } else {
            TopicStatus::Fail
        }
    }
}

/// Score, verdict and copy for a single topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicResult {
    pub topic: Topic,
    pub score: u8,
    pub status: TopicStatus,
    pub details: TopicDetails,
}

impl TopicResult {
    /// Status follows from the score.
    pub fn scored(
        topic: Topic,
        score: u8,
        thresholds: StatusThresholds,
        details: TopicDetails,
    ) -> Self {
        let score = score.min(100);
        Self {
            topic,
            score,
            status: thresholds.status_for(score),
            details,
        }
    }

    /// Status pinned by the evaluator regardless of thresholds.
    pub fn forced(topic: Topic, score: u8, status: TopicStatus, details: TopicDetails) -> Self {
        Self {
            topic,
            score: score.min(100),
            status,
            details,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicDetails {
    pub current: Option<String>,
    pub analysis: Option<String>,
    pub suggestion: Option<String>,
    pub fix: FixPayload,
    /// Only populated on `fail`.
    pub fail_steps: Vec<String>,
    /// Only populated on `pass`.
    pub pass_tips: Vec<String>,
}

/// Example remediation attached to a topic. Rendering to text happens in
/// [`crate::views`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FixPayload {
    #[default]
    None,
    PlainText(String),
    StructuredExample(WorkedExample),
}

impl FixPayload {
    pub fn is_none(&self) -> bool {
        matches!(self, FixPayload::None)
    }

    pub fn text(value: impl Into<String>) -> Self {
        FixPayload::PlainText(value.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkedExample {
    PackageTiers(Vec<PackageTierExample>),
    TagsAndDescription {
        tags: Vec<String>,
        description: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageTierExample {
    pub name: &'static str,
    pub price: u32,
    pub delivery_days: u8,
    pub includes: &'static str,
}

pub(crate) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_thresholds_split_at_80_and_50() {
        let thresholds = StatusThresholds::STANDARD;
        assert_eq!(thresholds.status_for(100), TopicStatus::Pass);
        assert_eq!(thresholds.status_for(80), TopicStatus::Pass);
        assert_eq!(thresholds.status_for(79), TopicStatus::Suggest);
        assert_eq!(thresholds.status_for(50), TopicStatus::Suggest);
        assert_eq!(thresholds.status_for(49), TopicStatus::Fail);
        assert_eq!(thresholds.status_for(0), TopicStatus::Fail);
    }

    #[test]
    fn visibility_thresholds_pass_from_75() {
        assert_eq!(StatusThresholds::VISIBILITY.status_for(75), TopicStatus::Pass);
        assert_eq!(StatusThresholds::VISIBILITY.status_for(74), TopicStatus::Suggest);
    }

    #[test]
    fn topic_names_round_trip_through_lookup() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_name(topic.name()), Some(topic));
        }
        assert_eq!(Topic::from_name("unknown_topic"), None);
        assert_eq!(Topic::from_name(" ชื่องาน"), None);
    }

    #[test]
    fn scores_are_clamped_to_100() {
        let result = TopicResult::scored(
            Topic::Title,
            120,
            StatusThresholds::STANDARD,
            TopicDetails::default(),
        );
        assert_eq!(result.score, 100);
    }

    #[test]
    fn status_serializes_lowercase() {
        let value = serde_json::to_value(TopicStatus::Suggest).expect("serializes");
        assert_eq!(value, "suggest");
    }
}
