pub mod analysis_result;
pub mod analyzers;
pub mod chat_parser;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod llm;
pub mod prompts;
pub mod server;
