//! Acting user passed through request handling.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// The user on whose behalf a form is submitted.
///
/// The sales forms never interpret this; it exists so mods can make their own
/// authorization or auditing decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nick: String,
    #[serde(default)]
    pub admin: bool,
    /// Preferred language code (e.g. `es_ES`), if known.
    #[serde(default)]
    pub lang_code: Option<String>,
}

impl User {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            nick: nick.into(),
            admin: false,
            lang_code: None,
        }
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_lang_code(mut self, lang_code: impl Into<String>) -> Self {
        self.lang_code = Some(lang_code.into());
        self
    }
}
