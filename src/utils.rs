use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

/// Attempt to delete a message, reporting whether the platform accepted it.
/// Refusals (already deleted, outside the deletion window) are logged and
/// tolerated; callers decide whether the outcome matters.
pub async fn try_delete_message(bot: &Bot, chat_id: ChatId, message_id: MessageId) -> bool {
    match bot.delete_message(chat_id, message_id).await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(
                error = %err,
                chat_id = chat_id.0,
                message_id = message_id.0,
                "Failed to delete message",
            );
            false
        }
    }
}
