/// One labelled keyword list offered to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGroup {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CAMERA_ANGLES: KeywordGroup = KeywordGroup {
    label: "Camera Angle",
    keywords: &["wide shot", "close-up", "medium shot", "dolly shot", "POV shot"],
};

pub const LIGHTING: KeywordGroup = KeywordGroup {
    label: "Lighting",
    keywords: &[
        "golden hour",
        "cinematic lighting",
        "soft light",
        "harsh sunlight",
        "neon glow",
    ],
};

pub const MOVEMENT: KeywordGroup = KeywordGroup {
    label: "Movement/Transition",
    keywords: &[
        "slowly pans left/right",
        "zooms in/out",
        "a quick cut to",
        "seamless continuation",
        "match cut",
        "cut to",
        "the character exits frame left/right",
    ],
};

pub const EMOTIONS: KeywordGroup = KeywordGroup {
    label: "Emotion",
    keywords: &["sad", "joyful", "pensive", "anxious", "determined"],
};

pub const STORYBOARD_KEYWORDS: &[KeywordGroup] = &[CAMERA_ANGLES, LIGHTING, MOVEMENT, EMOTIONS];
