use common::config::ApiConfig;

/// API configuration baked in at build time from `IGTF_API_BASE`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_env_value(option_env!("IGTF_API_BASE"))
}
