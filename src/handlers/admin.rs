// Admin panel and the index-addressed gift operations behind it.
//
// Indices on buttons refer to the list as it was rendered; every operation
// reloads the list and revalidates the index before touching anything, so a
// stale press degrades to a not-found reply.

use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, UserId},
};

use crate::callback::Callback;
use crate::messages::{
    gift_marked, gift_removed, prompt_edit, ADMIN_PANEL_TITLE, BTN_ADD_GIFT, BTN_CLEAR_CHAT,
    BTN_EDIT_GIFT, BTN_REMOVE_GIFT, BTN_SHOW_GIFTS, BTN_TOGGLE_BUY, GIFT_NOT_FOUND, LIST_EMPTY,
    PROMPT_ADD, SELECT_EDIT, SELECT_REMOVE, SELECT_TOGGLE,
};
use crate::session::{PendingInput, SessionRegistry};
use crate::store::{remove_gift, toggle_taken, Gift, GiftStore};

use super::keyboard::build_indexed_buttons;
use super::storage::{load_or_report, save_or_report};

pub fn admin_menu() -> InlineKeyboardMarkup {
    let rows = [
        (BTN_ADD_GIFT, Callback::AddGift),
        (BTN_EDIT_GIFT, Callback::EditGift),
        (BTN_TOGGLE_BUY, Callback::ToggleBuy),
        (BTN_REMOVE_GIFT, Callback::RemoveGift),
        (BTN_SHOW_GIFTS, Callback::ShowGifts),
        (BTN_CLEAR_CHAT, Callback::ClearChat),
    ]
    .into_iter()
    .map(|(label, cb)| vec![InlineKeyboardButton::callback(label, cb.tag())])
    .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

pub async fn admin_panel(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(chat_id, ADMIN_PANEL_TITLE)
        .reply_markup(admin_menu())
        .await?;
    Ok(())
}

async fn selection_menu<F>(
    bot: &Bot,
    chat_id: ChatId,
    store: &GiftStore,
    prompt: &str,
    label: F,
    tag: fn(usize) -> Callback,
) -> Result<()>
where
    F: Fn(&Gift) -> String,
{
    let gifts = load_or_report(bot, chat_id, store).await?;
    if gifts.is_empty() {
        bot.send_message(chat_id, LIST_EMPTY).await?;
        return Ok(());
    }
    let buttons = build_indexed_buttons(&gifts, |_, gift| label(gift), |idx, _| tag(idx).tag());
    bot.send_message(chat_id, prompt)
        .reply_markup(InlineKeyboardMarkup::new(buttons))
        .await?;
    Ok(())
}

pub async fn remove_menu(bot: &Bot, chat_id: ChatId, store: &GiftStore) -> Result<()> {
    selection_menu(
        bot,
        chat_id,
        store,
        SELECT_REMOVE,
        |gift| format!("«{}»", gift.name),
        Callback::Delete,
    )
    .await
}

pub async fn toggle_menu(bot: &Bot, chat_id: ChatId, store: &GiftStore) -> Result<()> {
    selection_menu(
        bot,
        chat_id,
        store,
        SELECT_TOGGLE,
        |gift| {
            let mark = if gift.taken { "✔" } else { "✗" };
            format!("{mark} {}", gift.name)
        },
        Callback::Buy,
    )
    .await
}

pub async fn edit_menu(bot: &Bot, chat_id: ChatId, store: &GiftStore) -> Result<()> {
    selection_menu(
        bot,
        chat_id,
        store,
        SELECT_EDIT,
        |gift| gift.name.clone(),
        Callback::Edit,
    )
    .await
}

pub async fn begin_add(
    bot: &Bot,
    chat_id: ChatId,
    user: UserId,
    sessions: &SessionRegistry,
) -> Result<()> {
    sessions.set(user, PendingInput::AddGift);
    bot.send_message(chat_id, PROMPT_ADD).await?;
    Ok(())
}

pub async fn begin_edit(
    bot: &Bot,
    chat_id: ChatId,
    user: UserId,
    index: usize,
    store: &GiftStore,
    sessions: &SessionRegistry,
) -> Result<()> {
    let gifts = load_or_report(bot, chat_id, store).await?;
    let Some(gift) = gifts.get(index) else {
        bot.send_message(chat_id, GIFT_NOT_FOUND).await?;
        return Ok(());
    };
    sessions.set(user, PendingInput::EditGift { index });
    bot.send_message(chat_id, prompt_edit(&gift.name)).await?;
    Ok(())
}

pub async fn delete_gift(bot: &Bot, chat_id: ChatId, index: usize, store: &GiftStore) -> Result<()> {
    let mut gifts = load_or_report(bot, chat_id, store).await?;
    let Some(removed) = remove_gift(&mut gifts, index) else {
        tracing::warn!(index, len = gifts.len(), "Stale delete index");
        bot.send_message(chat_id, GIFT_NOT_FOUND).await?;
        return Ok(());
    };
    save_or_report(bot, chat_id, store, &gifts).await?;
    bot.send_message(chat_id, gift_removed(&removed.name)).await?;
    Ok(())
}

pub async fn toggle_gift(bot: &Bot, chat_id: ChatId, index: usize, store: &GiftStore) -> Result<()> {
    let mut gifts = load_or_report(bot, chat_id, store).await?;
    let Some(taken) = toggle_taken(&mut gifts, index) else {
        tracing::warn!(index, len = gifts.len(), "Stale toggle index");
        bot.send_message(chat_id, GIFT_NOT_FOUND).await?;
        return Ok(());
    };
    save_or_report(bot, chat_id, store, &gifts).await?;
    bot.send_message(chat_id, gift_marked(&gifts[index].name, taken))
        .await?;
    Ok(())
}
