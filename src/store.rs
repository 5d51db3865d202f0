// Gift list persistence: a single JSON document on local disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single wishlist entry. Identity is the position in the list, so every
/// index-addressed operation must run against a freshly loaded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub name: String,
    pub url: String,
    /// Documents written before this field existed simply omit it.
    #[serde(default)]
    pub taken: bool,
}

impl Gift {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            taken: false,
        }
    }
}

/// Whole-file load/save of the gift list. Single-writer by assumption; there
/// is no locking and no partial-write guarantee.
#[derive(Clone)]
pub struct GiftStore {
    path: PathBuf,
}

impl GiftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns an empty list when the file does not exist yet. Errors from an
    /// existing but unreadable or malformed file propagate.
    pub fn load(&self) -> Result<Vec<Gift>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Gift file missing, starting empty");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let gifts = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(gifts)
    }

    /// Overwrites the document wholesale.
    pub fn save(&self, gifts: &[Gift]) -> Result<()> {
        let data = serde_json::to_string_pretty(gifts)?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = gifts.len(), "Saved gift list");
        Ok(())
    }
}

/// Removes the gift at `index`, shifting later entries down. `None` when the
/// index is out of bounds; the list is untouched in that case.
pub fn remove_gift(gifts: &mut Vec<Gift>, index: usize) -> Option<Gift> {
    if index < gifts.len() {
        Some(gifts.remove(index))
    } else {
        None
    }
}

/// Flips the `taken` flag at `index` and returns the new value.
pub fn toggle_taken(gifts: &mut [Gift], index: usize) -> Option<bool> {
    let gift = gifts.get_mut(index)?;
    gift.taken = !gift.taken;
    Some(gift.taken)
}

/// Overwrites name and url at `index`, preserving `taken`.
pub fn edit_gift(gifts: &mut [Gift], index: usize, name: &str, url: &str) -> Option<()> {
    let gift = gifts.get_mut(index)?;
    gift.name = name.to_string();
    gift.url = url.to_string();
    Some(())
}
