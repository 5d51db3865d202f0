// The fixed callback-tag vocabulary carried in inline keyboard buttons.

/// A parsed callback tag. Index-carrying variants address a position in the
/// gift list as it was rendered; handlers revalidate against a fresh load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    ShowGifts,
    AdminPanel,
    AddGift,
    RemoveGift,
    Delete(usize),
    ToggleBuy,
    Buy(usize),
    EditGift,
    Edit(usize),
    ClearChat,
}

impl Callback {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "show_gifts" => Some(Self::ShowGifts),
            "admin_panel" => Some(Self::AdminPanel),
            "add_gift" => Some(Self::AddGift),
            "remove_gift" => Some(Self::RemoveGift),
            "toggle_buy" => Some(Self::ToggleBuy),
            "edit_gift" => Some(Self::EditGift),
            "clear_chat" => Some(Self::ClearChat),
            _ => {
                if let Some(idx) = data.strip_prefix("del_") {
                    idx.parse().ok().map(Self::Delete)
                } else if let Some(idx) = data.strip_prefix("buy_") {
                    idx.parse().ok().map(Self::Buy)
                } else if let Some(idx) = data.strip_prefix("edit_") {
                    idx.parse().ok().map(Self::Edit)
                } else {
                    None
                }
            }
        }
    }

    /// The wire tag for this callback, the inverse of [`Callback::parse`].
    pub fn tag(&self) -> String {
        match self {
            Self::ShowGifts => "show_gifts".to_string(),
            Self::AdminPanel => "admin_panel".to_string(),
            Self::AddGift => "add_gift".to_string(),
            Self::RemoveGift => "remove_gift".to_string(),
            Self::Delete(idx) => format!("del_{idx}"),
            Self::ToggleBuy => "toggle_buy".to_string(),
            Self::Buy(idx) => format!("buy_{idx}"),
            Self::EditGift => "edit_gift".to_string(),
            Self::Edit(idx) => format!("edit_{idx}"),
            Self::ClearChat => "clear_chat".to_string(),
        }
    }
}
