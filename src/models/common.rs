use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Widescreen),
            "9:16" => Ok(AspectRatio::Portrait),
            other => Err(format!("Unsupported aspect ratio: {}", other)),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video model used downstream to render each scene prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoModel {
    #[default]
    #[serde(rename = "veo-3.0-fast-generate-001")]
    Fast,
    #[serde(rename = "veo-3.0-generate-001")]
    HighQuality,
}

impl VideoModel {
    pub fn id(&self) -> &'static str {
        match self {
            VideoModel::Fast => "veo-3.0-fast-generate-001",
            VideoModel::HighQuality => "veo-3.0-generate-001",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VideoModel::Fast => "Fast",
            VideoModel::HighQuality => "High Quality (HQ)",
        }
    }
}

impl FromStr for VideoModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "veo-3.0-fast-generate-001" => Ok(VideoModel::Fast),
            "veo-3.0-generate-001" => Ok(VideoModel::HighQuality),
            other => Err(format!("Unsupported video model: {}", other)),
        }
    }
}

impl fmt::Display for VideoModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_parsing() {
        assert_eq!("16:9".parse::<AspectRatio>(), Ok(AspectRatio::Widescreen));
        assert_eq!(" 9:16 ".parse::<AspectRatio>(), Ok(AspectRatio::Portrait));
        assert!("4:3".parse::<AspectRatio>().is_err());
        assert_eq!(AspectRatio::default().as_str(), "16:9");
    }

    #[test]
    fn test_video_model_parsing() {
        assert_eq!(
            "veo-3.0-generate-001".parse::<VideoModel>(),
            Ok(VideoModel::HighQuality)
        );
        assert!("veo-2".parse::<VideoModel>().is_err());
        assert_eq!(VideoModel::default().id(), "veo-3.0-fast-generate-001");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9:16\"");
        let model: VideoModel = serde_json::from_str("\"veo-3.0-fast-generate-001\"").unwrap();
        assert_eq!(model, VideoModel::Fast);
    }
}
