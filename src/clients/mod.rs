pub mod completion_client;
pub mod openai;

#[cfg(test)]
pub mod mock_client;

pub use completion_client::{CompletionClient, ProviderError};
pub use openai::OpenAIClient;
