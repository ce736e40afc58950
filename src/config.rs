/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend address used when `BACKEND_URL` is not set at build time
    const DEFAULT_API_URL: &'static str = "http://localhost:8000";

    /// Base URL of the store backend. Wasm has no runtime environment, so
    /// the override is read at compile time: `BACKEND_URL=... trunk build`.
    pub const API_URL: &'static str = match option_env!("BACKEND_URL") {
        Some(url) => url,
        None => Self::DEFAULT_API_URL,
    };

    /// Placeholder cards shown while the product list loads
    pub const SKELETON_CARDS: usize = 6;
}
