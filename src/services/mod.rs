pub mod prompt_enhancer;

// Re-export commonly used types
pub use prompt_enhancer::{EnhancementOutcome, EnhancementSubmission, PromptEnhancerService};
