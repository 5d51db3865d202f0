use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use teloxide::types::UserId;

pub const DEFAULT_GIFTS_FILE: &str = "gifts.json";

#[derive(Clone)]
pub struct Config {
    /// The one user allowed to mutate the list. No default: a missing or
    /// unparsable ADMIN_ID is a startup error, never a silent 0.
    pub admin_id: UserId,
    pub gifts_file: PathBuf,
}

impl Config {
    // Env loading (.env) happens once in `run()`; this only reads variables.
    pub fn from_env() -> Result<Self> {
        let admin_id = env::var("ADMIN_ID")
            .context("ADMIN_ID is not set")?
            .parse::<u64>()
            .context("ADMIN_ID is not a numeric Telegram user id")?;
        let gifts_file = env::var("GIFTS_FILE").unwrap_or_else(|_| DEFAULT_GIFTS_FILE.to_string());
        Ok(Self {
            admin_id: UserId(admin_id),
            gifts_file: gifts_file.into(),
        })
    }

    pub fn is_admin(&self, user: UserId) -> bool {
        user == self.admin_id
    }
}
