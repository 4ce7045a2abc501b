//! Canned sample listings and analyses served by the mock endpoints and the
//! CLI demo.

use crate::analysis::topic::lines;
use crate::analysis::{AnalysisResult, Listing, Topic, TopicDetails, TopicResult, TopicStatus};
use rand::seq::IndexedRandom;

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/1280x720";
const GRAPHIC_DESIGN: &str = "ออกแบบกราฟิก";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("{kind} fixture {index} not found ({available} available)")]
    OutOfRange {
        kind: &'static str,
        index: usize,
        available: usize,
    },
    #[error("no {kind} fixtures available")]
    Empty { kind: &'static str },
}

fn graphic_listing(
    title: &str,
    description: &str,
    subcategory: &str,
    price: f64,
    tags: [&str; 3],
) -> Listing {
    Listing {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        category: Some(GRAPHIC_DESIGN.to_string()),
        subcategory: Some(subcategory.to_string()),
        price: Some(price),
        cover_image: Some(PLACEHOLDER_COVER.to_string()),
        tags: Some(tags.map(str::to_string).to_vec()),
        packages: None,
        album_images: None,
    }
}

pub fn products() -> Vec<Listing> {
    vec![
        graphic_listing(
            "ออกแบบโลโก้ระดับมืออาชีพ โดยนักออกแบบมี 5 ปี ประสบการณ์",
            "บริการออกแบบโลโก้พรีเมียม ฟรี 3 ครั้งแก้ไข รบกวนแก้ไขได้เรื่อย ๆ",
            "Logo",
            3500.0,
            ["logo", "professional", "brand"],
        ),
        graphic_listing(
            "ออกแบบแบนเนอร์โฆษณา สูงสุด 5 แบบแก้ไขฟรี",
            "บริการออกแบบแบนเนอร์โฆษณาคุณภาพสูง เหมาะสำหรับโซเชียลมีเดีย",
            "Banner โฆษณา",
            2500.0,
            ["banner", "advertising", "design"],
        ),
        graphic_listing(
            "ออกแบบป้ายหรือสติกเกอร์ สูงสุด 3 ไอเดีย",
            "ออกแบบป้ายและสติกเกอร์สำหรับธุรกิจของคุณ",
            "Label & Packaging",
            2200.0,
            ["label", "packaging", "sticker"],
        ),
        graphic_listing(
            "ออกแบบ CI และสิ่งพิมพ์ระบบประจำตัวบริษัท",
            "ออกแบบตัวอักษร โลโก้ สีประจำตัว และสิ่งพิมพ์ CI ที่สมบูรณ์",
            "ดีไซน์พิมพ์และสามารถ",
            5000.0,
            ["ci", "identity", "branding"],
        ),
        graphic_listing(
            "สกรีนเสื้อผ้าผลงาน และเครื่องแบบ",
            "ออกแบบและจัดพิมพ์บนเสื้อผ้า",
            "สกรีนเสื้อผ้า",
            1500.0,
            ["t-shirt", "screen", "apparel"],
        ),
        graphic_listing(
            "ออกแบบและพิมพ์ป้ายโฆษณา",
            "ออกแบบป้ายโฆษณาขนาดใหญ่พร้อมพิมพ์",
            "ผลิตป้าย",
            4000.0,
            ["sign", "advertising", "large-format"],
        ),
        graphic_listing(
            "ออกแบบนำเสนอ PowerPoint และ Keynote",
            "ออกแบบสไลด์นำเสนออย่างมืออาชีพ",
            "Presentation",
            3000.0,
            ["presentation", "powerpoint", "keynote"],
        ),
        Listing {
            title: Some("ร".to_string()),
            tags: Some(Vec::new()),
            ..Listing::default()
        },
    ]
}

pub fn product(index: usize) -> Result<Listing, FixtureError> {
    let mut products = products();
    let available = products.len();
    if index < available {
        Ok(products.swap_remove(index))
    } else {
        Err(FixtureError::OutOfRange {
            kind: "product",
            index,
            available,
        })
    }
}

fn canned(topic: Topic, score: u8, status: TopicStatus, details: TopicDetails) -> TopicResult {
    TopicResult::forced(topic, score, status, details)
}

fn advice(analysis: Option<&str>, suggestion: &str) -> TopicDetails {
    TopicDetails {
        analysis: analysis.map(str::to_string),
        suggestion: Some(suggestion.to_string()),
        ..TopicDetails::default()
    }
}

fn praise(current: Option<&str>, tips: &[&str]) -> TopicDetails {
    TopicDetails {
        current: current.map(str::to_string),
        pass_tips: lines(tips),
        ..TopicDetails::default()
    }
}

/// Canned topics with hand-written recommendations. The overall score is
/// still the floored mean of the topic scores.
fn canned_result(topics: [TopicResult; Topic::COUNT], recommendations: &[&str]) -> AnalysisResult {
    AnalysisResult {
        recommendations: lines(recommendations),
        ..AnalysisResult::from_topics(topics)
    }
}

pub fn analyses() -> Vec<AnalysisResult> {
    vec![
        canned_result(
            [
                canned(
                    Topic::CoverImage,
                    85,
                    TopicStatus::Pass,
                    praise(
                        None,
                        &["- ภาพปกของคุณมีคุณภาพดี", "- พิจารณาเพิ่ม branding elements"],
                    ),
                ),
                canned(
                    Topic::Title,
                    80,
                    TopicStatus::Pass,
                    praise(
                        Some("ออกแบบโลโก้ระดับมืออาชีพ โดยนักออกแบบมี 5 ปี ประสบการณ์"),
                        &[
                            "- ชื่องานชัดเจนและมีคีย์เวิร์ดหลัก",
                            "- ความยาวเหมาะสม (55 ตัวอักษร)",
                        ],
                    ),
                ),
                canned(
                    Topic::Category,
                    85,
                    TopicStatus::Pass,
                    praise(
                        Some("ออกแบบกราฟิก > Logo Design"),
                        &["- หมวดหมู่สอดคล้องกับประเภทงาน"],
                    ),
                ),
                canned(
                    Topic::StartingPrice,
                    80,
                    TopicStatus::Pass,
                    praise(Some("3,500 บาท"), &["- ราคาอยู่ในช่วงที่เหมาะสม"]),
                ),
                canned(
                    Topic::Visibility,
                    75,
                    TopicStatus::Suggest,
                    advice(
                        Some("การ์ดงานของคุณสามารถมองเห็นได้มากขึ้น"),
                        "เพิ่มรูปภาพตัวอย่างผลงาน 3-5 รูป",
                    ),
                ),
                canned(
                    Topic::Packages,
                    65,
                    TopicStatus::Suggest,
                    advice(
                        Some("ข้อมูลแพ็กเกจยังไม่ชัดเจน"),
                        "ระบุ 3 ระดับบริการ พื้นฐาน มาตรฐาน และพรีเมียม",
                    ),
                ),
                canned(
                    Topic::Album,
                    90,
                    TopicStatus::Pass,
                    praise(
                        None,
                        &["- อัลบั้มผลงานของคุณสวยงาม", "- มีตัวอย่างผลงาน 8 รายการ"],
                    ),
                ),
            ],
            &[
                "ปรับปรุงข้อมูลแพ็กเกจเพื่อให้ลูกค้าเข้าใจตัวเลือกบริการ",
                "เพิ่มรูปภาพตัวอย่างผลงานเพื่อเพิ่มความน่าสนใจ",
                "ควรได้อย่างน้อย 80 คะแนนในแต่ละหมวด",
            ],
        ),
        canned_result(
            [
                canned(
                    Topic::CoverImage,
                    70,
                    TopicStatus::Suggest,
                    advice(
                        Some("ภาพปกอาจไม่น่าสนใจเพียงพอ"),
                        "ใช้ภาพที่สื่อถึงแบรนด์ของคุณมากขึ้น",
                    ),
                ),
                canned(
                    Topic::Title,
                    75,
                    TopicStatus::Suggest,
                    TopicDetails {
                        current: Some("เว็บไซต์ WordPress ประสิทธิภาพสูง SEO ปรับแต่ง".to_string()),
                        ..advice(
                            Some("ชื่องานดีแต่สามารถเพิ่มเติมได้"),
                            "เพิ่มคีย์เวิร์ดเช่น ฟรีปรึกษา หรือ ดีไซน์ฟรี",
                        )
                    },
                ),
                canned(
                    Topic::Category,
                    80,
                    TopicStatus::Pass,
                    praise(Some("พัฒนาเว็บ > Website Development"), &[]),
                ),
                canned(
                    Topic::StartingPrice,
                    75,
                    TopicStatus::Suggest,
                    TopicDetails {
                        current: Some("8,500 บาท".to_string()),
                        ..advice(
                            Some("ราคาดีแต่อาจต้องปรับตามคู่แข่ง"),
                            "ตรวจสอบราคาคู่แข่งในหมวดเดียวกัน",
                        )
                    },
                ),
                canned(
                    Topic::Visibility,
                    70,
                    TopicStatus::Suggest,
                    advice(None, "อัปเดตภาพตัวอย่างเว็บไซต์ที่ทำงาน"),
                ),
                canned(
                    Topic::Packages,
                    75,
                    TopicStatus::Suggest,
                    advice(None, "เพิ่มรายการเช็คลิสต์สิ่งที่รวมอยู่ในแพ็กเกจ"),
                ),
                canned(
                    Topic::Album,
                    75,
                    TopicStatus::Suggest,
                    advice(None, "เพิ่มรายละเอียด case study ของแต่ละโปรเจค"),
                ),
            ],
            &[
                "ปรับปรุงภาพปกงานให้มีสีสัน",
                "เพิ่มคีย์เวิร์ดในชื่องาน",
                "ทำให้ข้อมูลแพ็กเกจชัดเจนขึ้น",
            ],
        ),
    ]
}

pub fn analysis(index: usize) -> Result<AnalysisResult, FixtureError> {
    let mut analyses = analyses();
    let available = analyses.len();
    if index < available {
        Ok(analyses.swap_remove(index))
    } else {
        Err(FixtureError::OutOfRange {
            kind: "analysis",
            index,
            available,
        })
    }
}

/// Picks any sample listing. Not deterministic.
pub fn random_product() -> Result<Listing, FixtureError> {
    pick_random(products(), "product")
}

/// Picks any canned analysis. Not deterministic.
pub fn random_analysis() -> Result<AnalysisResult, FixtureError> {
    pick_random(analyses(), "analysis")
}

fn pick_random<T: Clone>(items: Vec<T>, kind: &'static str) -> Result<T, FixtureError> {
    let mut rng = rand::rng();
    items
        .choose(&mut rng)
        .cloned()
        .ok_or(FixtureError::Empty { kind })
}
