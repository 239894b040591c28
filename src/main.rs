use rstoryboard::{
    logger::{self, LoggerConfig},
    ApiKeyProbe, CredentialStore, GeminiClient, LogNotifier, ScenePromptList, StoryboardHandler,
    StoryboardPromptPlanner, StoryboardSession, StudioConfig,
};
use std::env;
use std::sync::Arc;

const API_KEY_HELP_URL: &str = "https://ai.google.dev/gemini-api/docs/api-key";
const DEFAULT_SCENE_COUNT: u32 = 3;

struct PrintHandler;

impl StoryboardHandler for PrintHandler {
    fn on_submit(&self, prompts: ScenePromptList) {
        println!();
        for (i, prompt) in prompts.iter().enumerate() {
            println!("Scene {}: {}", i + 1, prompt);
        }
    }

    fn on_close(&self) {
        log::debug!("Storyboard session closed");
    }
}

fn usage() {
    eprintln!("Usage:");
    eprintln!("  rstoryboard <story idea> [scene count]");
    eprintln!("  rstoryboard --check-key");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let logger_config = match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => LoggerConfig::production(),
        _ => LoggerConfig::default(),
    };
    logger::init_with_config(logger_config)?;

    let studio = StudioConfig::from_env();
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &studio);

    if studio.get().is_none() {
        log::warn!(
            "To use generative features, please add your own Gemini API key (GEMINI_API_KEY). Get your key from Google AI Studio: {}",
            API_KEY_HELP_URL
        );
    }

    let gemini = GeminiClient::new(&studio.gemini)?;
    let service = Arc::new(gemini.text().clone());
    let notifier = Arc::new(LogNotifier::new());

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            usage();
            Ok(())
        }
        Some("--check-key") => {
            let api_key = studio.get().unwrap_or_default();
            let probe = ApiKeyProbe::new(service, notifier).with_model(gemini.model());
            probe.test(&api_key).await?;
            Ok(())
        }
        Some(story_idea) => {
            let scene_count = match args.get(1) {
                Some(raw) => raw.parse::<u32>().map_err(|e| {
                    log::error!("Scene count must be a whole number: {}", e);
                    e
                })?,
                None => DEFAULT_SCENE_COUNT,
            };

            let planner = StoryboardPromptPlanner::new(service, Arc::new(studio.clone()), notifier)
                .with_model(gemini.model());
            let session = StoryboardSession::new(planner, PrintHandler);
            let outcome = session.generate(story_idea, scene_count).await;
            session.close();
            outcome?;
            Ok(())
        }
    }
}
