use crate::config::Config;
use crate::extract::ExtractOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Which optional pattern extractors run, resolved once from env toggles.
    pub extract_options: ExtractOptions,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let extract_options = ExtractOptions {
            email: config.extract_email,
            phone: config.extract_phone,
            socials: config.extract_socials,
            address: config.extract_address,
        };
        Self {
            config,
            extract_options,
        }
    }
}
