use teloxide::types::InlineKeyboardButton;

/// One button row per item; the callback tag usually encodes the position.
pub fn build_indexed_buttons<T, F, G>(
    items: &[T],
    label: F,
    callback: G,
) -> Vec<Vec<InlineKeyboardButton>>
where
    F: Fn(usize, &T) -> String,
    G: Fn(usize, &T) -> String,
{
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            vec![InlineKeyboardButton::callback(
                label(idx, item),
                callback(idx, item),
            )]
        })
        .collect()
}
