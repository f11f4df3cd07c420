use std::env::var;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set"),
            port: var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
