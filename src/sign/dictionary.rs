//! 手语词典
//!
//! 只读静态表：规范化词（小写）→ 手势条目。进程内首次访问时构建，之后不再修改。

use std::collections::HashMap;

use crate::sign::types::{SignDescriptor, SignEntry};

/// 词典原始数据
///
/// 包含多词短语键（如 "thank you"）。按空白分词的解析器不会查询到这类键。
const SIGN_ENTRIES: &[(&str, SignEntry)] = &[
    (
        "hello",
        SignEntry {
            description: "Open hand waves in greeting motion",
            hand_shape: "Open hand, fingers extended",
            movement: "Wave back and forth near head",
            location: "Side of head/temple area",
            emoji: "👋",
            visual_cue: "Wave your hand like saying hello",
        },
    ),
    (
        "goodbye",
        SignEntry {
            description: "Open hand waves in farewell motion",
            hand_shape: "Open hand, fingers extended",
            movement: "Wave back and forth away from body",
            location: "In front of body, waist level",
            emoji: "👋",
            visual_cue: "Wave goodbye with open palm",
        },
    ),
    (
        "bye",
        SignEntry {
            description: "Open hand waves in farewell motion",
            hand_shape: "Open hand, fingers extended",
            movement: "Wave back and forth away from body",
            location: "In front of body, waist level",
            emoji: "👋",
            visual_cue: "Wave goodbye with open palm",
        },
    ),
    (
        "please",
        SignEntry {
            description: "Open hand moves in circular motion over chest",
            hand_shape: "Flat hand, palm down",
            movement: "Circular rubbing motion",
            location: "Center of chest",
            emoji: "🙏",
            visual_cue: "Rub chest in circular motion",
        },
    ),
    (
        "thank you",
        SignEntry {
            description: "Fingers touch chin then move forward",
            hand_shape: "Flat hand, fingertips touch chin",
            movement: "Move hand forward from chin",
            location: "Chin to forward space",
            emoji: "🙏",
            visual_cue: "Touch chin, then extend hand forward",
        },
    ),
    (
        "thanks",
        SignEntry {
            description: "Fingers touch chin then move forward",
            hand_shape: "Flat hand, fingertips touch chin",
            movement: "Move hand forward from chin",
            location: "Chin to forward space",
            emoji: "🙏",
            visual_cue: "Touch chin, then extend hand forward",
        },
    ),
    (
        "sorry",
        SignEntry {
            description: "Fist rotates over heart in circular motion",
            hand_shape: "Closed fist, 'A' handshape",
            movement: "Circular motion over heart",
            location: "Center of chest/heart area",
            emoji: "😔",
            visual_cue: "Circle fist over heart area",
        },
    ),
    (
        "help",
        SignEntry {
            description: "One hand supports the other moving upward",
            hand_shape: "Flat hand under fist",
            movement: "Bottom hand lifts top hand up",
            location: "In front of body",
            emoji: "🤝",
            visual_cue: "One hand lifts the other upward",
        },
    ),
    (
        "yes",
        SignEntry {
            description: "Fist nods up and down like a head nod",
            hand_shape: "Closed fist, 'S' handshape",
            movement: "Nod up and down",
            location: "In front of body",
            emoji: "✅",
            visual_cue: "Nod fist up and down",
        },
    ),
    (
        "no",
        SignEntry {
            description: "Index and middle finger snap down to thumb",
            hand_shape: "Index and middle finger extended",
            movement: "Snap fingers down to thumb",
            location: "In front of body",
            emoji: "❌",
            visual_cue: "Snap two fingers to thumb",
        },
    ),
    (
        "good",
        SignEntry {
            description: "Fingertips touch chin then move to palm of other hand",
            hand_shape: "Flat hand, fingertips to chin",
            movement: "Move to palm of other hand",
            location: "Chin to palm level",
            emoji: "👍",
            visual_cue: "Touch chin, then place on other palm",
        },
    ),
    (
        "bad",
        SignEntry {
            description: "Fingertips touch chin then flip hand down",
            hand_shape: "Flat hand, fingertips to chin",
            movement: "Flip hand down and away",
            location: "Chin area",
            emoji: "👎",
            visual_cue: "Touch chin, then flip hand down",
        },
    ),
    (
        "water",
        SignEntry {
            description: "W handshape touches chin twice",
            hand_shape: "Three fingers up (W shape)",
            movement: "Tap chin twice",
            location: "Chin/mouth area",
            emoji: "💧",
            visual_cue: "Make W shape and tap chin twice",
        },
    ),
    (
        "eat",
        SignEntry {
            description: "Fingertips tap mouth repeatedly",
            hand_shape: "Fingertips together",
            movement: "Tap mouth several times",
            location: "Mouth area",
            emoji: "🍽️",
            visual_cue: "Tap fingertips to mouth repeatedly",
        },
    ),
    (
        "drink",
        SignEntry {
            description: "C handshape moves to mouth like drinking",
            hand_shape: "C handshape (curved fingers)",
            movement: "Bring to mouth like drinking",
            location: "Mouth area",
            emoji: "🥤",
            visual_cue: "Make C shape and bring to mouth",
        },
    ),
    (
        "bathroom",
        SignEntry {
            description: "T handshape shakes side to side",
            hand_shape: "T handshape (thumb between fingers)",
            movement: "Shake side to side",
            location: "In front of body",
            emoji: "🚻",
            visual_cue: "Make T shape and shake sideways",
        },
    ),
    (
        "hospital",
        SignEntry {
            description: "H handshape draws cross on upper arm",
            hand_shape: "H handshape (two fingers extended)",
            movement: "Draw cross/plus sign on arm",
            location: "Upper arm",
            emoji: "🏥",
            visual_cue: "Draw cross on upper arm with H shape",
        },
    ),
    (
        "doctor",
        SignEntry {
            description: "D handshape taps pulse point on wrist",
            hand_shape: "D handshape (index finger pointing)",
            movement: "Tap wrist pulse point",
            location: "Wrist area",
            emoji: "👨‍⚕️",
            visual_cue: "Make D shape and tap wrist pulse",
        },
    ),
    (
        "nurse",
        SignEntry {
            description: "N handshape taps pulse point on wrist",
            hand_shape: "N handshape (two fingers down)",
            movement: "Tap wrist pulse point",
            location: "Wrist area",
            emoji: "👩‍⚕️",
            visual_cue: "Make N shape and tap wrist pulse",
        },
    ),
    (
        "pain",
        SignEntry {
            description: "Index fingers point at each other and jab",
            hand_shape: "Index fingers extended",
            movement: "Jab toward each other repeatedly",
            location: "In front of body",
            emoji: "😣",
            visual_cue: "Point index fingers at each other and jab",
        },
    ),
    (
        "hurt",
        SignEntry {
            description: "Index fingers point at each other and jab",
            hand_shape: "Index fingers extended",
            movement: "Jab toward each other repeatedly",
            location: "In front of body",
            emoji: "🤕",
            visual_cue: "Point index fingers at each other and jab",
        },
    ),
    (
        "appointment",
        SignEntry {
            description: "A handshape moves in circle then lands on other hand",
            hand_shape: "A handshape (closed fist)",
            movement: "Circle then tap on other hand",
            location: "In front of body",
            emoji: "📅",
            visual_cue: "Circle A shape then tap other hand",
        },
    ),
    (
        "today",
        SignEntry {
            description: "Y handshapes move downward twice",
            hand_shape: "Y handshape (thumb and pinky out)",
            movement: "Move downward twice",
            location: "In front of body",
            emoji: "📅",
            visual_cue: "Make Y shapes and drop twice",
        },
    ),
    (
        "tomorrow",
        SignEntry {
            description: "A handshape at cheek moves forward",
            hand_shape: "A handshape (closed fist)",
            movement: "Move forward from cheek",
            location: "Cheek area",
            emoji: "➡️",
            visual_cue: "A shape at cheek moves forward",
        },
    ),
    (
        "yesterday",
        SignEntry {
            description: "A handshape at cheek moves backward",
            hand_shape: "A handshape (closed fist)",
            movement: "Move backward from cheek",
            location: "Cheek area",
            emoji: "⬅️",
            visual_cue: "A shape at cheek moves backward",
        },
    ),
    (
        "time",
        SignEntry {
            description: "Index finger taps on wrist (watch)",
            hand_shape: "Index finger extended",
            movement: "Tap wrist",
            location: "Wrist area",
            emoji: "⏰",
            visual_cue: "Tap wrist like pointing to watch",
        },
    ),
    (
        "money",
        SignEntry {
            description: "Flat hand taps palm of other hand",
            hand_shape: "Flat hand",
            movement: "Tap palm repeatedly",
            location: "Palm of other hand",
            emoji: "💰",
            visual_cue: "Tap flat hand on other palm",
        },
    ),
    (
        "home",
        SignEntry {
            description: "Flat hand moves from mouth to cheek",
            hand_shape: "Flat hand, fingertips together",
            movement: "Move from mouth to cheek",
            location: "Mouth to cheek area",
            emoji: "🏠",
            visual_cue: "Move flat hand from mouth to cheek",
        },
    ),
    (
        "work",
        SignEntry {
            description: "S handshapes tap wrists together",
            hand_shape: "S handshape (closed fist)",
            movement: "Tap wrists together",
            location: "Wrist area",
            emoji: "💼",
            visual_cue: "Tap closed fists at wrists",
        },
    ),
    (
        "school",
        SignEntry {
            description: "Flat hands clap together twice",
            hand_shape: "Flat hands",
            movement: "Clap together twice",
            location: "In front of body",
            emoji: "🏫",
            visual_cue: "Clap flat hands twice",
        },
    ),
    (
        "family",
        SignEntry {
            description: "F handshapes form circle in front of body",
            hand_shape: "F handshape (thumb and finger touch)",
            movement: "Form circle",
            location: "In front of body",
            emoji: "👨‍👩‍👧‍👦",
            visual_cue: "Make F shapes in circular motion",
        },
    ),
    (
        "friend",
        SignEntry {
            description: "Index fingers hook together then switch",
            hand_shape: "Index fingers extended",
            movement: "Hook together then switch positions",
            location: "In front of body",
            emoji: "👫",
            visual_cue: "Hook index fingers then switch",
        },
    ),
    (
        "love",
        SignEntry {
            description: "Crossed arms hug chest",
            hand_shape: "Closed fists cross arms",
            movement: "Hug chest",
            location: "Chest area",
            emoji: "❤️",
            visual_cue: "Cross arms and hug chest",
        },
    ),
    (
        "happy",
        SignEntry {
            description: "Flat hands brush up chest repeatedly",
            hand_shape: "Flat hands",
            movement: "Brush up chest",
            location: "Chest area",
            emoji: "😊",
            visual_cue: "Brush hands up chest repeatedly",
        },
    ),
    (
        "sad",
        SignEntry {
            description: "Hands move down in front of face",
            hand_shape: "Open hands",
            movement: "Move downward in front of face",
            location: "Face area",
            emoji: "😢",
            visual_cue: "Move hands down in front of face",
        },
    ),
    (
        "i",
        SignEntry {
            description: "Point to yourself with index finger",
            hand_shape: "Index finger extended",
            movement: "Point to chest",
            location: "Chest area",
            emoji: "👆",
            visual_cue: "Point index finger to yourself",
        },
    ),
    (
        "you",
        SignEntry {
            description: "Point forward with index finger",
            hand_shape: "Index finger extended",
            movement: "Point forward",
            location: "Forward direction",
            emoji: "👉",
            visual_cue: "Point index finger forward",
        },
    ),
    (
        "we",
        SignEntry {
            description: "Index finger moves from self to others in arc",
            hand_shape: "Index finger extended",
            movement: "Arc from self to others",
            location: "Chest to forward",
            emoji: "👥",
            visual_cue: "Arc finger from self to others",
        },
    ),
    (
        "they",
        SignEntry {
            description: "Index finger points to side then sweeps",
            hand_shape: "Index finger extended",
            movement: "Point and sweep sideways",
            location: "To the side",
            emoji: "👥",
            visual_cue: "Point and sweep to the side",
        },
    ),
    (
        "want",
        SignEntry {
            description: "Claw hands pull toward body",
            hand_shape: "Claw handshape (curved fingers)",
            movement: "Pull toward body",
            location: "In front of body",
            emoji: "🤲",
            visual_cue: "Claw hands pull toward you",
        },
    ),
    (
        "need",
        SignEntry {
            description: "Index finger moves down sharply",
            hand_shape: "Index finger extended",
            movement: "Sharp downward motion",
            location: "In front of body",
            emoji: "☝️",
            visual_cue: "Index finger moves down sharply",
        },
    ),
    (
        "go",
        SignEntry {
            description: "Index fingers point and move forward",
            hand_shape: "Index fingers extended",
            movement: "Move forward together",
            location: "In front of body",
            emoji: "➡️",
            visual_cue: "Point both fingers forward and move",
        },
    ),
    (
        "come",
        SignEntry {
            description: "Index fingers beckon toward body",
            hand_shape: "Index fingers extended",
            movement: "Beckon toward body",
            location: "In front of body",
            emoji: "👋",
            visual_cue: "Beckon with index fingers",
        },
    ),
    (
        "stop",
        SignEntry {
            description: "Flat hand chops down on other palm",
            hand_shape: "Flat hand, palm down",
            movement: "Chop down on other palm",
            location: "In front of body",
            emoji: "✋",
            visual_cue: "Chop flat hand down on palm",
        },
    ),
    (
        "wait",
        SignEntry {
            description: "Wiggle fingers with palms up",
            hand_shape: "Open hands, palms up",
            movement: "Wiggle fingers",
            location: "In front of body",
            emoji: "⏳",
            visual_cue: "Wiggle fingers with palms up",
        },
    ),
];

lazy_static::lazy_static! {
    /// 全局词典实例（只读，无需加锁）
    static ref SIGN_DICTIONARY: SignDictionary = SignDictionary::new();
}

/// 手语词典
pub struct SignDictionary {
    entries: HashMap<&'static str, SignEntry>,
}

impl SignDictionary {
    fn new() -> Self {
        let entries: HashMap<&'static str, SignEntry> = SIGN_ENTRIES.iter().copied().collect();
        tracing::debug!("手语词典已加载: {} 个词条", entries.len());
        Self { entries }
    }

    /// 获取全局词典
    pub fn global() -> &'static SignDictionary {
        &SIGN_DICTIONARY
    }

    /// 查询词条
    ///
    /// `word` 必须已规范化（小写、无标点）
    pub fn get(&self, word: &str) -> Option<&SignEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// 查询并构造手势描述
    pub fn lookup(&self, word: &str) -> Option<SignDescriptor> {
        self.get(word).map(|entry| SignDescriptor::from_entry(word, entry))
    }

    /// 获取所有词条键（排序后）
    pub fn available_words(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self.entries.keys().copied().collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 获取词典中所有可用词（排序后）
pub fn available_words() -> Vec<&'static str> {
    SignDictionary::global().available_words()
}
