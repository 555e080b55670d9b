pub mod http_client;
pub mod prompt_utils;
pub mod section_splitter;
