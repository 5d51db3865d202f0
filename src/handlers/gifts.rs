use anyhow::Result;
use teloxide::{prelude::*, types::ChatId};

use crate::messages::{LIST_EMPTY, LIST_HEADER};
use crate::store::{Gift, GiftStore};

use super::storage::load_or_report;

/// Numbered plain-text rendering with a purchased marker.
pub fn format_gift_list(gifts: &[Gift]) -> String {
    let mut text = format!("{LIST_HEADER}\n\n");
    for (idx, gift) in gifts.iter().enumerate() {
        let mark = if gift.taken { "✅" } else { "•" };
        text.push_str(&format!("{}. {mark} {} — {}\n", idx + 1, gift.name, gift.url));
    }
    text
}

pub async fn show_gifts(bot: &Bot, chat_id: ChatId, store: &GiftStore) -> Result<()> {
    let gifts = load_or_report(bot, chat_id, store).await?;
    if gifts.is_empty() {
        bot.send_message(chat_id, LIST_EMPTY).await?;
        return Ok(());
    }
    bot.send_message(chat_id, format_gift_list(&gifts)).await?;
    Ok(())
}
