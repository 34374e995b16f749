use std::collections::HashMap;

use crate::records::{AccountRecord, LevelRecord};

/// Lookup from an opaque id to its display name.
#[derive(Clone, Debug, Default)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    /// Later pairs overwrite earlier ones with the same id.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: pairs.into_iter().collect(),
        }
    }

    pub fn from_accounts(accounts: impl IntoIterator<Item = AccountRecord>) -> Self {
        Self::from_pairs(
            accounts
                .into_iter()
                .map(|account| (account.account_id, account.username)),
        )
    }

    pub fn from_levels(levels: impl IntoIterator<Item = LevelRecord>) -> Self {
        Self::from_pairs(levels.into_iter().map(|level| (level.level_uuid, level.name)))
    }

    /// The name registered for `id`, or `id` itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }
}
