use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Optional path to a JSON array of amenities; the built-in seed is used
    /// when unset.
    pub amenities_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            amenities_file: env::var("AMENITIES_FILE").ok(),
        }
    }
}
