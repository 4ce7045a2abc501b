//! On-demand single-topic suggestion lookup. Stands in for a generative
//! backend; every answer comes from a fixed table.

use crate::analysis::Topic;
use serde_json::{Map, Value};

const TITLE_TOO_LONG_LIMIT: usize = 70;
const TITLE_TOO_SHORT_LIMIT: usize = 20;

const TITLE_TOO_SHORT: &str =
    "เพิ่มรายละเอียดและคีย์เวิร์ดที่เกี่ยวข้องเพื่อให้ลูกค้าเข้าใจชัดเจนขึ้น";
const TITLE_FINE: &str = "ชื่องานของคุณมีความยาวที่เหมาะสม";
const CATEGORY: &str = "พิจารณาเปลี่ยนหมวดหมู่ให้ตรงกับประเภทงาน";
const PRICE: &str = "ปรับราคาให้อยู่ในช่วง 2,000-3,000 บาท";
const COVER_IMAGE: &str = "อัปโหลดภาพขนาด 1280x720px เพื่อคุณภาพที่ดีที่สุด";
pub const NO_SUGGESTION: &str = "ไม่มีคำแนะนำสำหรับหัวข้อนี้";

/// Returns one suggestion sentence for `topic`. Unknown topics get
/// [`NO_SUGGESTION`]. `context` is accepted for forward compatibility and is
/// not consulted.
pub fn suggest(topic: &str, current_value: &str, _context: Option<&Map<String, Value>>) -> String {
    match Topic::from_name(topic) {
        Some(Topic::Title) => title_suggestion(current_value),
        Some(Topic::Category) => CATEGORY.to_string(),
        Some(Topic::StartingPrice) => PRICE.to_string(),
        Some(Topic::CoverImage) => COVER_IMAGE.to_string(),
        Some(Topic::Visibility | Topic::Packages | Topic::Album) | None => {
            NO_SUGGESTION.to_string()
        }
    }
}

fn title_suggestion(title: &str) -> String {
    let length = title.chars().count();
    if length > TITLE_TOO_LONG_LIMIT {
        format!("ลดความยาวของชื่อให้อยู่ที่ 50-70 ตัวอักษร (ปัจจุบัน: {length} ตัวอักษร)")
    } else if length < TITLE_TOO_SHORT_LIMIT {
        TITLE_TOO_SHORT.to_string()
    } else {
        TITLE_FINE.to_string()
    }
}
