//! Fixed copy shown to sellers, grouped per topic and keyed by the condition
//! that selects it. Evaluators only pick entries; they never build prose.

pub(crate) mod cover {
    pub const FAIL_STEPS: &[&str] = &[
        "- อัปโหลดภาพคุณภาพสูง (1280x720px หรือ 16:9)",
        "- ใช้ภาพที่สื่อถึงแบรนด์หรือสไตล์ที่เป็นตัวตนของคุณ",
        "- หลีกเลี่ยงการใส่ข้อความมากเกินไปในรูปภาพ",
    ];

    pub const PASS_TIPS: &[&str] = &[
        "- ภาพปกของคุณมีคุณภาพดี",
        "- พิจารณาเพิ่ม branding elements",
    ];
}

pub(crate) mod title {
    pub const FAIL_STEPS: &[&str] = &["- กรุณาใส่ชื่องาน"];

    pub const TOO_SHORT_ANALYSIS: &str =
        "ชื่องานสั้นเกินไป อาจไม่ได้ให้ข้อมูลที่เพียงพอกับลูกค้า";
    pub const TOO_LONG_SUGGESTION: &str =
        "ลดความยาวของชื่อให้อยู่ที่ 50-70 ตัวอักษร และใส่คีย์เวิร์ดหลักไว้ต้นชื่อ";
    pub const TOO_SHORT_SUGGESTION: &str =
        "เพิ่มรายละเอียดและคีย์เวิร์ดที่เกี่ยวข้องเพื่อให้ลูกค้าเข้าใจชัดเจนขึ้น";
    pub const MARKETING_SUFFIX: &str = " - บริการคุณภาพ ราคาเป็นกันเอง";
    pub const TRUNCATION_MARK: &str = "...";

    pub const PASS_TIPS: &[&str] = &[
        "- ทำให้ชื่อไม่เกิน 70 ตัวอักษร",
        "- ใส่คีย์เวิร์ดหลักไว้ต้นชื่อ",
    ];

    pub fn too_long_analysis(length: usize) -> String {
        format!("ชื่องานยาวเกินไป ({length} ตัวอักษร) อาจทำให้แสดงผลไม่สวย")
    }
}

pub(crate) mod category {
    pub const FAIL_STEPS: &[&str] = &["- กรุณาเลือกหมวดหมู่และหมวดหมู่ย่อย"];

    pub const LOGO_KEYWORD_TITLE: &str = "โลโก้";
    pub const LOGO_KEYWORD_SUBCATEGORY: &str = "logo";

    pub const MISMATCH_ANALYSIS: &str = "หมวดหมู่ที่คุณเลือกไม่สอดคล้องกับประเภทงานบริการ รับจ้างทำโลโก้ อาจทำให้ลูกค้าค้นหาบริการของคุณไม่เจอ";
    pub const MISMATCH_SUGGESTION: &str = "ตรวจสอบและปรับหมวดหมู่ให้ตรงกับประเภทของงานคุณ";
    pub const MISMATCH_FIX: &str = "ออกแบบกราฟิก > Logo";

    pub const PASS_TIPS: &[&str] = &["- หมวดหมู่สอดคล้องกับประเภทงาน"];
}

pub(crate) mod price {
    pub const FAIL_STEPS: &[&str] = &["- กรุณาระบุราคาเริ่มต้น"];

    pub const BELOW_MARKET_ANALYSIS: &str =
        "ราคาตั้งต้นอาจต่ำกว่าเรทตลาดเมื่อเทียบกับบริการในหมวดเดียวกัน";
    pub const BELOW_MARKET_SUGGESTION: &str =
        "ปรับราคาเริ่มต้นให้อยู่ในช่วง 2,000-3,000 บาท หรือตั้งให้ใกล้เคียงกับคู่แข่ง";
    pub const BELOW_MARKET_FIX: &str = "2,500 บาท";

    pub const PASS_TIPS: &[&str] = &["- ราคาอยู่ในช่วงที่เหมาะสม"];
}

pub(crate) mod visibility {
    pub const NOTHING_ANALYSIS: &str =
        "การ์ดงานยังไม่มีแท็กและคำอธิบาย ลูกค้าจะค้นหาบริการของคุณเจอได้ยาก";
    pub const NO_TAGS_ANALYSIS: &str =
        "ยังไม่มีแท็ก การ์ดงานจึงไม่ปรากฏในผลการค้นหาที่เกี่ยวข้อง";
    pub const NO_DESCRIPTION_ANALYSIS: &str =
        "ยังไม่มีคำอธิบายงาน ลูกค้าอาจไม่เข้าใจขอบเขตของบริการ";
    pub const BOTH_PRESENT_ANALYSIS: &str =
        "มีแท็กและคำอธิบายแล้ว เพิ่มคีย์เวิร์ดที่ลูกค้าค้นหาบ่อยเพื่อให้มองเห็นได้มากขึ้น";

    pub const SUGGESTION: &str =
        "ใส่แท็กอย่างน้อย 5 แท็ก และเขียนคำอธิบายอย่างน้อย 200 ตัวอักษรที่มีคีย์เวิร์ดหลัก";

    pub const DEFAULT_TAGS: &[&str] = &[
        "ออกแบบ",
        "กราฟิก",
        "มืออาชีพ",
        "งานด่วน",
        "ราคาเป็นกันเอง",
    ];

    pub const EXAMPLE_DESCRIPTION: &str = "บริการออกแบบโดยนักออกแบบประสบการณ์มากกว่า 5 ปี \
ส่งไฟล์ครบทุกนามสกุล (AI, PNG, PDF) แก้ไขฟรี 3 ครั้ง \
ปรึกษาแนวทางก่อนเริ่มงาน และส่งงานตรงเวลาตามที่ตกลง";

    /// Characters stripped from the end of description words before they are
    /// offered as tags.
    pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '/', '(', ')', '[', ']'];

    pub const FAIL_STEPS: &[&str] = &[
        "- เพิ่มแท็กที่ตรงกับสิ่งที่ลูกค้าค้นหา",
        "- เขียนคำอธิบายที่บอกขอบเขตงานและสิ่งที่ลูกค้าจะได้รับ",
        "- ใส่คีย์เวิร์ดหลักไว้ในประโยคแรกของคำอธิบาย",
    ];

    pub const PASS_TIPS: &[&str] = &[
        "- แท็กและคำอธิบายช่วยให้ลูกค้าค้นหาเจอ",
        "- อัปเดตแท็กตามเทรนด์การค้นหาเป็นระยะ",
    ];

    pub fn current(tag_count: usize, description_len: usize) -> String {
        format!("แท็ก {tag_count} รายการ, คำอธิบาย {description_len} ตัวอักษร")
    }
}

pub(crate) mod packages {
    use crate::analysis::topic::PackageTierExample;

    pub const MISSING_ANALYSIS: &str =
        "ยังไม่มีข้อมูลแพ็กเกจ ลูกค้าไม่สามารถเปรียบเทียบตัวเลือกบริการได้";
    pub const MISSING_SUGGESTION: &str =
        "สร้างแพ็กเกจอย่างน้อย 2 ระดับ เช่น พื้นฐาน มาตรฐาน และพรีเมียม";
    pub const MISSING_FAIL_STEPS: &[&str] = &[
        "- เพิ่มแพ็กเกจพร้อมชื่อ ราคา และระยะเวลาทำงาน",
        "- แยกระดับบริการให้เห็นความแตกต่างชัดเจน",
    ];

    pub const INCOMPLETE_ANALYSIS: &str =
        "บางแพ็กเกจยังไม่มีชื่อ ราคา หรือระยะเวลาทำงาน";
    pub const SINGLE_TIER_ANALYSIS: &str =
        "มีแพ็กเกจเพียงระดับเดียว ลูกค้าไม่มีตัวเลือกให้เปรียบเทียบ";
    pub const TOO_MANY_ANALYSIS: &str =
        "มีแพ็กเกจมากกว่า 3 ระดับ อาจทำให้ลูกค้าตัดสินใจยาก";
    pub const BALANCED_ANALYSIS: &str = "แพ็กเกจครบถ้วนและมีตัวเลือกที่เหมาะสม";

    pub const INCOMPLETE_SUGGESTION: &str =
        "กรอกชื่อ ราคา และระยะเวลาทำงานให้ครบทุกแพ็กเกจ";
    pub const SINGLE_TIER_SUGGESTION: &str =
        "เพิ่มแพ็กเกจอีกอย่างน้อย 1 ระดับ เพื่อให้ลูกค้ามีตัวเลือก";
    pub const TOO_MANY_SUGGESTION: &str = "รวมแพ็กเกจให้เหลือ 2-3 ระดับ";

    pub const PASS_TIPS: &[&str] = &[
        "- แพ็กเกจแบ่งระดับชัดเจน",
        "- ระบุสิ่งที่ได้รับในแต่ละแพ็กเกจให้ละเอียด",
    ];

    pub const EXAMPLE_TIERS: [PackageTierExample; 3] = [
        PackageTierExample {
            name: "พื้นฐาน (Basic)",
            price: 1_500,
            delivery_days: 3,
            includes: "1 แบบ แก้ไข 2 ครั้ง",
        },
        PackageTierExample {
            name: "มาตรฐาน (Standard)",
            price: 2_500,
            delivery_days: 5,
            includes: "3 แบบ แก้ไข 3 ครั้ง พร้อมไฟล์ต้นฉบับ",
        },
        PackageTierExample {
            name: "พรีเมียม (Premium)",
            price: 4_500,
            delivery_days: 7,
            includes: "5 แบบ แก้ไขไม่จำกัด พร้อมไฟล์ต้นฉบับและคู่มือการใช้งาน",
        },
    ];

    pub fn current(count: usize, incomplete: usize) -> String {
        if incomplete == 0 {
            format!("{count} แพ็กเกจ")
        } else {
            format!("{count} แพ็กเกจ (ข้อมูลไม่ครบ {incomplete} แพ็กเกจ)")
        }
    }
}

pub(crate) mod album {
    pub const MISSING_ANALYSIS: &str = "ยังไม่มีผลงานในอัลบั้ม";
    pub const MISSING_SUGGESTION: &str = "อัปโหลดภาพผลงานอย่างน้อย 5 ภาพ";
    pub const MISSING_FIX: &str = "1. เลือกผลงานที่ดีที่สุด 5-10 ชิ้นที่ตรงกับบริการนี้\n\
2. ใช้ภาพขนาด 1280x720px ขึ้นไป\n\
3. ใส่คำบรรยายสั้น ๆ ว่าลูกค้าคือใครและโจทย์คืออะไร\n\
4. เรียงผลงานที่โดดเด่นที่สุดไว้ลำดับแรก";
    pub const MISSING_FAIL_STEPS: &[&str] = &[
        "- อัปโหลดภาพผลงานที่เกี่ยวข้องกับบริการ",
        "- เลือกภาพที่คมชัดและแสดงรายละเอียดงาน",
    ];

    pub const FEW_SUGGESTION: &str = "เพิ่มภาพผลงานให้ได้อย่างน้อย 5 ภาพ";
    pub const CREDIBILITY_CAVEAT: &str = " ซึ่งอาจยังไม่เพียงพอต่อการสร้างความน่าเชื่อถือ";

    pub const ADD_MORE_FIX: &str = "1. เพิ่มผลงานจนครบอย่างน้อย 5 ภาพ\n\
2. แสดงผลงานหลากหลายสไตล์เพื่อให้ลูกค้าเห็นความสามารถ\n\
3. ใส่ภาพก่อน-หลังหากเป็นงานปรับปรุงหรือแก้ไข";
    pub const POLISH_FIX: &str = "1. ใส่คำบรรยายสั้น ๆ ให้แต่ละผลงาน\n\
2. เรียงผลงานที่โดดเด่นที่สุดไว้ลำดับแรก\n\
3. คัดผลงานที่เก่าหรือไม่เกี่ยวข้องออก";

    pub const PASS_TIPS: &[&str] = &[
        "- อัลบั้มผลงานช่วยสร้างความน่าเชื่อถือ",
        "- อัปเดตผลงานใหม่อย่างสม่ำเสมอ",
    ];

    pub fn current(count: usize) -> String {
        format!("ผลงาน {count} ภาพ")
    }

    pub fn analysis(count: usize) -> String {
        format!("มีผลงานในอัลบั้ม {count} ภาพ")
    }
}

pub(crate) mod recommendations {
    pub const CLOSING: &str = "ควรได้อย่างน้อย 80 คะแนนในแต่ละหมวด";

    pub fn failing(names: &str) -> String {
        format!("ปรับปรุงหัวข้อที่ยังไม่สมบูรณ์: {names}")
    }

    pub fn suggested(names: &str) -> String {
        format!("พิจารณาปรับปรุง: {names}")
    }
}
