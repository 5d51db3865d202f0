use anyhow::Result;
use teloxide::prelude::*;

use crate::callback::Callback;
use crate::config::Config;
use crate::session::SessionRegistry;
use crate::store::GiftStore;

use super::admin::{
    admin_panel, begin_add, begin_edit, delete_gift, edit_menu, remove_menu, toggle_gift,
    toggle_menu,
};
use super::clear::clear_chat;
use super::gifts::show_gifts;

/// Central button-press dispatcher. Admin-gated tags from other users fall
/// through to the silent arm; the callback query is still acknowledged so the
/// client stops its spinner, which is not a user-visible reply.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    store: GiftStore,
    sessions: SessionRegistry,
    cfg: Config,
) -> Result<()> {
    if let (Some(data), Some(msg)) = (q.data.as_deref(), q.message.as_ref()) {
        let chat_id = msg.chat().id;
        let is_admin = cfg.is_admin(q.from.id);
        tracing::debug!(user_id = q.from.id.0, data, is_admin, "Callback received");

        match Callback::parse(data) {
            Some(Callback::ShowGifts) => show_gifts(&bot, chat_id, &store).await?,
            Some(Callback::AdminPanel) if is_admin => admin_panel(&bot, chat_id).await?,
            Some(Callback::AddGift) if is_admin => {
                begin_add(&bot, chat_id, q.from.id, &sessions).await?
            }
            Some(Callback::RemoveGift) if is_admin => remove_menu(&bot, chat_id, &store).await?,
            Some(Callback::Delete(idx)) if is_admin => {
                delete_gift(&bot, chat_id, idx, &store).await?
            }
            Some(Callback::ToggleBuy) if is_admin => toggle_menu(&bot, chat_id, &store).await?,
            Some(Callback::Buy(idx)) if is_admin => {
                toggle_gift(&bot, chat_id, idx, &store).await?
            }
            Some(Callback::EditGift) if is_admin => edit_menu(&bot, chat_id, &store).await?,
            Some(Callback::Edit(idx)) if is_admin => {
                begin_edit(&bot, chat_id, q.from.id, idx, &store, &sessions).await?
            }
            Some(Callback::ClearChat) => clear_chat(&bot, chat_id, msg.id(), is_admin).await?,
            _ => {
                tracing::debug!(data, "Dropping unauthorized or unknown callback");
            }
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
