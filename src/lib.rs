use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

pub mod callback;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod session;
pub mod store;
pub mod text_utils;
pub mod utils;

pub use callback::Callback;
pub use commands::Command;
pub use config::Config;
pub use handlers::{callback_handler, format_gift_list, handle_free_text, main_menu, show_gifts};
pub use session::{PendingInput, SessionRegistry};
pub use store::{Gift, GiftStore};
pub use text_utils::parse_gift_line;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting gift list bot...");

    let cfg = Config::from_env()?;
    let bot = Bot::from_env();
    let store = GiftStore::new(&cfg.gifts_file);
    let sessions = SessionRegistry::new();

    tracing::info!(gifts_file = %cfg.gifts_file.display(), "Using gift store");

    // --- Handler Setup ---
    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot, msg: Message, cmd: Command, cfg: Config| async move {
                        cmd.dispatch(bot, msg, cfg).await
                    },
                ))
                .branch(dptree::endpoint(handle_free_text)),
        );

    // --- Dispatcher ---
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store, sessions, cfg])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
