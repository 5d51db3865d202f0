pub mod admin;
pub mod callback;
pub mod clear;
pub mod gifts;
pub mod keyboard;
pub mod start;
pub mod storage;
pub mod text;

pub use admin::{
    admin_panel, begin_add, begin_edit, delete_gift, edit_menu, remove_menu, toggle_gift,
    toggle_menu,
};
pub use callback::callback_handler;
pub use clear::clear_chat;
pub use gifts::{format_gift_list, show_gifts};
pub use start::{help, main_menu, start};
pub use text::handle_free_text;
