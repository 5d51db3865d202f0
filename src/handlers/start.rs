use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup},
};

use crate::callback::Callback;
use crate::config::Config;
use crate::messages::{BTN_ADMIN_PANEL, BTN_SHOW_GIFTS, HELP_TEXT, WELCOME};

/// Main menu: the gift list for everyone, the admin panel for the admin.
pub fn main_menu(is_admin: bool) -> InlineKeyboardMarkup {
    let mut rows = vec![vec![InlineKeyboardButton::callback(
        BTN_SHOW_GIFTS,
        Callback::ShowGifts.tag(),
    )]];
    if is_admin {
        rows.push(vec![InlineKeyboardButton::callback(
            BTN_ADMIN_PANEL,
            Callback::AdminPanel.tag(),
        )]);
    }
    InlineKeyboardMarkup::new(rows)
}

pub async fn start(bot: Bot, msg: Message, cfg: Config) -> Result<()> {
    let is_admin = msg
        .from
        .as_ref()
        .map(|user| cfg.is_admin(user.id))
        .unwrap_or(false);
    tracing::debug!(chat_id = msg.chat.id.0, is_admin, "Sending main menu");
    bot.send_message(msg.chat.id, WELCOME)
        .reply_markup(main_menu(is_admin))
        .await?;
    Ok(())
}

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}
