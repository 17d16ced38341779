//! Completion adapter for the external language-model provider.

mod http_source;

pub use http_source::OpenAiAdviceSource;
