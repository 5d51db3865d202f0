use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

use crate::messages::{chat_cleared, MESSAGE_DELETED, MESSAGE_DELETE_FAILED};
use crate::utils::try_delete_message;

/// How many recent messages an admin sweep attempts to delete at most.
pub const CLEAR_SWEEP_LIMIT: i32 = 50;

/// Admins sweep downward from the pressed message over the most recent ids,
/// tolerating per-message refusals and reporting the success count. Everyone
/// else only gets the single message that carried the button removed.
pub async fn clear_chat(
    bot: &Bot,
    chat_id: ChatId,
    from_message: MessageId,
    is_admin: bool,
) -> Result<()> {
    if is_admin {
        let mut deleted = 0usize;
        for offset in 0..CLEAR_SWEEP_LIMIT {
            let id = from_message.0 - offset;
            if id <= 0 {
                break;
            }
            if try_delete_message(bot, chat_id, MessageId(id)).await {
                deleted += 1;
            }
        }
        tracing::info!(chat_id = chat_id.0, deleted, "Cleared chat messages");
        bot.send_message(chat_id, chat_cleared(deleted)).await?;
    } else {
        let text = if try_delete_message(bot, chat_id, from_message).await {
            MESSAGE_DELETED
        } else {
            MESSAGE_DELETE_FAILED
        };
        bot.send_message(chat_id, text).await?;
    }
    Ok(())
}
