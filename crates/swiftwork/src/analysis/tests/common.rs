use crate::analysis::domain::{DeliveryTime, Listing, PackageRecord};
use crate::analysis::topic::{StatusThresholds, Topic, TopicDetails, TopicResult, TopicStatus};

pub(super) fn complete_listing() -> Listing {
    Listing {
        title: Some("ออกแบบโลโก้ระดับมืออาชีพ โดยนักออกแบบมี 5 ปี ประสบการณ์".to_string()),
        description: Some(format!(
            "บริการออกแบบโลโก้พรีเมียม ฟรี 3 ครั้งแก้ไข {}",
            "ส่งไฟล์ครบทุกนามสกุล ".repeat(12)
        )),
        category: Some("ออกแบบกราฟิก".to_string()),
        subcategory: Some("Logo".to_string()),
        price: Some(3500.0),
        cover_image: Some("https://via.placeholder.com/1280x720".to_string()),
        tags: Some(
            ["logo", "professional", "brand", "identity", "vector"]
                .map(str::to_string)
                .to_vec(),
        ),
        packages: Some(vec![
            PackageRecord::new("Basic", 1500.0, DeliveryTime::Days(3)),
            PackageRecord::new("Standard", 2500.0, DeliveryTime::Days(5)),
            PackageRecord::new("Premium", 4500.0, DeliveryTime::Days(7)),
        ]),
        album_images: Some(
            (0..8)
                .map(|index| format!("https://cdn.example.com/logo-{index}.png"))
                .collect(),
        ),
    }
}

pub(super) fn result_with(topic: Topic, score: u8) -> TopicResult {
    TopicResult::scored(
        topic,
        score,
        StatusThresholds::STANDARD,
        TopicDetails::default(),
    )
}

pub(super) fn forced(topic: Topic, score: u8, status: TopicStatus) -> TopicResult {
    TopicResult::forced(topic, score, status, TopicDetails::default())
}
