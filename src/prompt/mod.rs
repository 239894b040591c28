//! Storyboard prompt template.
//!
//! The wording lives here as plain data so it can be revised (and
//! `TEMPLATE_VERSION` bumped) without touching the planner's control flow.
//! Rendering is pure: the same idea and scene count always produce the same
//! system instruction.

pub mod taxonomy;

pub use taxonomy::{KeywordGroup, STORYBOARD_KEYWORDS};

pub const TEMPLATE_VERSION: u32 = 1;

/// Placeholders: `{story_idea}`, `{scene_count}`, `{keywords}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub version: u32,
    pub body: &'static str,
    pub keywords: &'static [KeywordGroup],
}

pub const STORYBOARD_TEMPLATE: PromptTemplate = PromptTemplate {
    version: TEMPLATE_VERSION,
    body: r#"You are a creative assistant for a film director. Your task is to generate a storyboard as a sequence of prompts for a video generation model.
The user wants a story about: "{story_idea}".
Generate a sequence of {scene_count} video prompts.
Each prompt must describe an 8-second video clip.
The prompts must connect logically to tell a coherent story.

Follow this exact structure for each prompt:
[Camera Angle] of [Character] doing [Action], in [Setting]. [Lighting] and [Emotion]. [Transition Keyword].

Use a variety of keywords from the following lists:
{keywords}

The final output should be a JSON array of strings, where each string is a complete prompt for one scene. Do not include any other text or explanations.
"#,
    keywords: STORYBOARD_KEYWORDS,
};

/// Renders the keyword groups as a bulleted list, one group per line.
pub fn render_keywords(groups: &[KeywordGroup]) -> String {
    groups
        .iter()
        .map(|group| format!("- {}: {}.", group.label, group.keywords.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(template: &PromptTemplate, story_idea: &str, scene_count: u32) -> String {
    // Keywords go in last so a story idea containing a placeholder is not expanded.
    template
        .body
        .replace("{scene_count}", &scene_count.to_string())
        .replace("{keywords}", &render_keywords(template.keywords))
        .replace("{story_idea}", story_idea)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_inputs() {
        let text = render(&STORYBOARD_TEMPLATE, "A robot learns to paint", 4);
        assert!(text.contains("The user wants a story about: \"A robot learns to paint\"."));
        assert!(text.contains("Generate a sequence of 4 video prompts."));
        assert!(text.contains("8-second video clip"));
        assert!(text.contains(
            "[Camera Angle] of [Character] doing [Action], in [Setting]. [Lighting] and [Emotion]. [Transition Keyword]."
        ));
        assert!(!text.contains("{keywords}"));
    }

    #[test]
    fn test_render_embeds_every_keyword_group() {
        let text = render(&STORYBOARD_TEMPLATE, "idea", 2);
        assert!(text.contains("- Camera Angle: wide shot, close-up, medium shot, dolly shot, POV shot."));
        assert!(text.contains("- Lighting: golden hour"));
        assert!(text.contains("- Movement/Transition: slowly pans left/right"));
        assert!(text.contains("- Emotion: sad, joyful, pensive, anxious, determined."));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(&STORYBOARD_TEMPLATE, "same idea", 5);
        let b = render(&STORYBOARD_TEMPLATE, "same idea", 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_story_idea_placeholders_are_left_alone() {
        let text = render(&STORYBOARD_TEMPLATE, "a {keywords} story", 1);
        assert!(text.contains("\"a {keywords} story\""));
    }
}
