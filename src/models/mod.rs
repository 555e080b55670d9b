pub mod completion;
pub mod model_choice;
pub mod prompt_components;
pub use completion::{CompletionRequest, CompletionResult, ParsedResult};
pub use model_choice::ModelChoice;
pub use prompt_components::PromptComponents;
