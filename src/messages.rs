//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and
//! are easy to update or translate.

pub const WELCOME: &str = "Welcome! 👋";

pub const BTN_SHOW_GIFTS: &str = "🎁 Gift list";
pub const BTN_ADMIN_PANEL: &str = "⚙️ Admin panel";
pub const BTN_ADD_GIFT: &str = "➕ Add gift";
pub const BTN_EDIT_GIFT: &str = "✏️ Edit gift";
pub const BTN_TOGGLE_BUY: &str = "🛒 Mark bought";
pub const BTN_REMOVE_GIFT: &str = "➖ Remove gift";
pub const BTN_CLEAR_CHAT: &str = "🧹 Clear chat";

pub const ADMIN_PANEL_TITLE: &str = "⚙️ Admin panel";

pub const LIST_EMPTY: &str = "🎁 The gift list is empty.";
pub const LIST_HEADER: &str = "🎁 Gift list:";

pub const SELECT_REMOVE: &str = "Select a gift to remove:";
pub const SELECT_TOGGLE: &str = "Select a gift to mark or unmark as bought:";
pub const SELECT_EDIT: &str = "Select a gift to edit:";

pub const PROMPT_ADD: &str = "Send the gift as: name | url";
pub fn prompt_edit(name: &str) -> String {
    format!("Send the new name | url for «{name}».")
}

pub const STORAGE_ERROR: &str =
    "⚠️ Could not access the gift list. Please try again.";

pub const FORMAT_ERROR: &str =
    "That doesn't look right. Send the gift as: name | url (with a | between them).";
pub const GIFT_NOT_FOUND: &str =
    "Gift not found. The list may have changed; open the menu again.";

pub fn gift_added(name: &str) -> String {
    format!("🎉 Gift added:\n{name}")
}
pub fn gift_removed(name: &str) -> String {
    format!("❌ Gift removed:\n{name}")
}
pub fn gift_updated(name: &str) -> String {
    format!("✏️ Gift updated:\n{name}")
}
pub fn gift_marked(name: &str, taken: bool) -> String {
    if taken {
        format!("✔ «{name}» marked as bought.")
    } else {
        format!("✗ «{name}» is available again.")
    }
}

pub fn chat_cleared(count: usize) -> String {
    format!("🧹 Deleted {count} message(s).")
}
pub const MESSAGE_DELETED: &str = "🗑 Message deleted.";
pub const MESSAGE_DELETE_FAILED: &str = "⚠️ Could not delete the message.";

pub const HELP_TEXT: &str = "Tap 🎁 Gift list to see the wishlist.\n\
         The admin can add, edit, remove and mark gifts from the ⚙️ Admin panel.\n\n\
         Commands:\n\
         /start - Show the main menu.\n\
         /help - Show this text.";
