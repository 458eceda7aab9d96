//! `[[users]]` contributor roster.
//!
//! Event and service pages refer to contributors through their `id`
//! (front matter `owners`), so ids must be unique.
//!
//! # Example
//!
//! ```toml
//! [[users]]
//! id = "dboyne"
//! name = "David Boyne"
//! avatarUrl = "https://pbs.twimg.com/profile_images/1262283153563140096/DYRDqKg6_400x400.png"
//! role = "Developer"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util};
use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A catalog contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "")]
pub struct UserConfig {
    /// Unique identifier referenced by `owners`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Free-form role, e.g. "Developer".
    pub role: String,
}

impl UserConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
            role: role.into(),
        }
    }

    /// Validate a single user located at `at`.
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        util::require_non_empty(diag, at.join(Self::FIELDS.id), &self.id);
        util::require_non_empty(diag, at.join(Self::FIELDS.name), &self.name);

        let avatar = at.join(Self::FIELDS.avatar_url);
        if util::require_non_empty(diag, avatar.clone(), &self.avatar_url) {
            util::check_url(diag, avatar, &self.avatar_url);
        }
    }
}

/// Validate every user and report duplicate ids.
///
/// Duplicates are reported at the later occurrence, naming the first one.
pub fn validate_users(users: &[UserConfig], at: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (i, user) in users.iter().enumerate() {
        let item = at.index(i);
        user.validate(&item, diag);

        if user.id.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(user.id.as_str()) {
            diag.error_with_hint(
                item.join(UserConfig::FIELDS.id),
                format!("duplicate user id `{}`", user.id),
                format!("already used by {}", at.index(*first).as_str()),
            );
        } else {
            seen.insert(user.id.as_str(), i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVATAR: &str = "https://randomuser.me/api/portraits/lego/3.jpg";

    #[test]
    fn avatar_url_key_is_camel_case() {
        assert_eq!(UserConfig::FIELDS.avatar_url.as_str(), "avatarUrl");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let users = vec![
            UserConfig::new("dboyne", "David Boyne", AVATAR, "Developer"),
            UserConfig::new("mSmith", "Matthew Smith", AVATAR, "Developer"),
            UserConfig::new("dboyne", "Someone Else", AVATAR, "Developer"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_users(&users, &FieldPath::new("users"), &mut diag);

        assert_eq!(diag.len(), 1);
        assert!(diag.names("users[2].id"));
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("already used by users[0]"));
    }

    #[test]
    fn malformed_avatar_is_rejected() {
        let users = vec![UserConfig::new("dboyne", "David Boyne", "not a url", "")];
        let mut diag = ConfigDiagnostics::new();
        validate_users(&users, &FieldPath::new("users"), &mut diag);
        assert!(diag.names("users[0].avatarUrl"));
    }

    #[test]
    fn empty_id_is_not_a_duplicate() {
        let users = vec![
            UserConfig::new("", "A", AVATAR, ""),
            UserConfig::new("", "B", AVATAR, ""),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_users(&users, &FieldPath::new("users"), &mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| !e.message.contains("duplicate")));
    }
}
