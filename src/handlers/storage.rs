// Store access with user-visible failure reporting. A load or save error is
// reported to the chat once, then propagated so the dispatcher logs it too.

use anyhow::Result;
use teloxide::{prelude::*, types::ChatId};

use crate::messages::STORAGE_ERROR;
use crate::store::{Gift, GiftStore};

pub async fn load_or_report(bot: &Bot, chat_id: ChatId, store: &GiftStore) -> Result<Vec<Gift>> {
    match store.load() {
        Ok(gifts) => Ok(gifts),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load gift list");
            bot.send_message(chat_id, STORAGE_ERROR).await?;
            Err(err)
        }
    }
}

pub async fn save_or_report(
    bot: &Bot,
    chat_id: ChatId,
    store: &GiftStore,
    gifts: &[Gift],
) -> Result<()> {
    match store.save(gifts) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!(error = %err, "Failed to save gift list");
            bot.send_message(chat_id, STORAGE_ERROR).await?;
            Err(err)
        }
    }
}
