pub mod database_config;
pub mod gemini_config;
pub mod openai_config;
