use crate::{
    error::{Result, StoryboardError},
    models::text::{GenerativeRequest, ResponseSchema},
    prompt::{self, STORYBOARD_TEMPLATE},
};

pub const MIN_SCENES: u32 = 1;
pub const MAX_SCENES: u32 = 10;

/// Fixed user turn sent alongside the system instruction.
pub const STORYBOARD_USER_CONTENT: &str = "Generate the storyboard.";

/// Ordered scene prompts, one per 8-second clip.
pub type ScenePromptList = Vec<String>;

/// A validated, fully rendered storyboard request. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub story_idea: String,
    pub scene_count: u32,
    pub system_instruction: String,
    pub response_schema: ResponseSchema,
}

impl GenerationRequest {
    pub fn new(story_idea: &str, scene_count: u32) -> Result<Self> {
        if story_idea.trim().is_empty() {
            return Err(StoryboardError::InvalidInput(
                "story idea must not be empty".into(),
            ));
        }
        if !(MIN_SCENES..=MAX_SCENES).contains(&scene_count) {
            return Err(StoryboardError::InvalidInput(format!(
                "scene count must be between {} and {}, got {}",
                MIN_SCENES, MAX_SCENES, scene_count
            )));
        }

        Ok(Self {
            story_idea: story_idea.to_string(),
            scene_count,
            system_instruction: prompt::render(&STORYBOARD_TEMPLATE, story_idea, scene_count),
            response_schema: ResponseSchema::string_list(),
        })
    }

    pub fn to_generative_request(&self, model: &str) -> GenerativeRequest {
        GenerativeRequest::new(model, STORYBOARD_USER_CONTENT)
            .with_system_instruction(self.system_instruction.clone())
            .with_response_schema(self.response_schema.clone())
    }
}

/// Parses the service payload as a JSON array of strings, keeping order and
/// content untouched.
pub fn parse_scene_prompts(raw: &str) -> Result<ScenePromptList> {
    serde_json::from_str::<ScenePromptList>(raw.trim())
        .map_err(|e| StoryboardError::ResponseParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_story_idea() {
        assert!(matches!(
            GenerationRequest::new("   ", 3),
            Err(StoryboardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_scene_count() {
        assert!(GenerationRequest::new("a heist", 0).is_err());
        assert!(GenerationRequest::new("a heist", 11).is_err());
        assert!(GenerationRequest::new("a heist", 1).is_ok());
        assert!(GenerationRequest::new("a heist", 10).is_ok());
    }

    #[test]
    fn test_generative_request_carries_schema_and_fixed_user_content() {
        let request = GenerationRequest::new("a heist", 4).unwrap();
        let generative = request.to_generative_request("gemini-2.5-flash");
        assert_eq!(generative.model, "gemini-2.5-flash");
        assert_eq!(generative.user_content, "Generate the storyboard.");
        assert_eq!(generative.response_schema, Some(ResponseSchema::string_list()));
        assert_eq!(
            generative.system_instruction.as_deref(),
            Some(request.system_instruction.as_str())
        );
    }

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let prompts = parse_scene_prompts("\n  [\"b\", \"a\", \"c\"]  \n").unwrap();
        assert_eq!(prompts, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_does_not_enforce_length() {
        let prompts = parse_scene_prompts("[]").unwrap();
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for raw in ["{\"scenes\": []}", "[\"ok\", 3]", "Here you go: [\"a\"]", ""] {
            assert!(
                matches!(parse_scene_prompts(raw), Err(StoryboardError::ResponseParse(_))),
                "expected parse failure for {:?}",
                raw
            );
        }
    }
}
