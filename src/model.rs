use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account type GitHub reports for individual (non-bot, non-organization) accounts.
pub const USER_ACCOUNT: &str = "User";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
}

/// One entry of a repository's contributor list, as GitHub returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContributor {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl RawContributor {
    pub fn is_user(&self) -> bool {
        self.account_type == USER_ACCOUNT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
    pub repos: u32,
}

impl Contributor {
    pub fn new(raw: RawContributor) -> Self {
        Self {
            id: raw.id,
            login: raw.login,
            avatar_url: raw.avatar_url,
            contributions: raw.contributions,
            repos: 1,
        }
    }

    pub fn merge(&mut self, raw: &RawContributor) {
        self.contributions += raw.contributions;
        self.repos += 1;
    }
}

/// Login-keyed result of a run. Sorted so every output format is deterministic.
pub type Aggregate = BTreeMap<String, Contributor>;
