use crate::config::EndpointConfig;

pub const ASK_PATH: &str = "/ask";
pub const HEALTH_PATH: &str = "/health";

pub fn api_url(config: &EndpointConfig, path: &str) -> String {
    config.resolve_endpoint(path)
}

/// URL for asking the bot a question, e.g. `<base>/ask?question=where%20is%20room%20204`.
pub fn ask_url(config: &EndpointConfig, question: &str) -> String {
    format!(
        "{}?question={}",
        api_url(config, ASK_PATH),
        urlencoding::encode(question)
    )
}

pub fn health_url(config: &EndpointConfig) -> String {
    api_url(config, HEALTH_PATH)
}
