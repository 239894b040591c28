pub mod credentials;
pub mod notifier;
pub mod traits;

pub use credentials::EnvCredentialStore;
pub use notifier::{LogNotifier, QueuedNotifier};
pub use traits::{CredentialStore, GenerativeTextService, NotificationSink, StoryboardHandler};
