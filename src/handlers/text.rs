use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::{gift_added, gift_updated, FORMAT_ERROR, GIFT_NOT_FOUND};
use crate::session::{PendingInput, SessionRegistry};
use crate::store::{edit_gift, Gift, GiftStore};
use crate::text_utils::parse_gift_line;

use super::storage::{load_or_report, save_or_report};

/// Free-text entry point. A message is only meaningful when the sender has a
/// pending input registered; everything else is ignored without a reply.
pub async fn handle_free_text(
    bot: Bot,
    msg: Message,
    store: GiftStore,
    sessions: SessionRegistry,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(pending) = sessions.take(user.id) else {
        tracing::debug!(user_id = user.id.0, "Ignoring unsolicited text");
        return Ok(());
    };

    let Some((name, url)) = parse_gift_line(text) else {
        tracing::warn!(user_id = user.id.0, "Malformed gift line");
        // Re-arm the same pending input so the user can retry in place.
        sessions.set(user.id, pending);
        bot.send_message(msg.chat.id, FORMAT_ERROR).await?;
        return Ok(());
    };

    match pending {
        PendingInput::AddGift => {
            let mut gifts = load_or_report(&bot, msg.chat.id, &store).await?;
            gifts.push(Gift::new(name.clone(), url));
            save_or_report(&bot, msg.chat.id, &store, &gifts).await?;
            tracing::info!(user_id = user.id.0, %name, "Gift added");
            bot.send_message(msg.chat.id, gift_added(&name)).await?;
        }
        PendingInput::EditGift { index } => {
            let mut gifts = load_or_report(&bot, msg.chat.id, &store).await?;
            if edit_gift(&mut gifts, index, &name, &url).is_none() {
                tracing::warn!(index, len = gifts.len(), "Stale edit index");
                bot.send_message(msg.chat.id, GIFT_NOT_FOUND).await?;
                return Ok(());
            }
            save_or_report(&bot, msg.chat.id, &store, &gifts).await?;
            tracing::info!(user_id = user.id.0, index, %name, "Gift updated");
            bot.send_message(msg.chat.id, gift_updated(&name)).await?;
        }
    }
    Ok(())
}
