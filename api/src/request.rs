//! Query builders for the bridge and origin endpoints. Pure data; the
//! client resolves the endpoint against its configured base URL.

use crate::{Action, Platform};

/// Version of the bridge API this crate speaks.
pub const API_VERSION: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Stats and match history.
    Bridge,
    /// Origin account lookups.
    Origin,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Bridge => "bridge",
            Endpoint::Origin => "origin",
        }
    }
}

/// How a player is addressed: display name or platform uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Name(String),
    Uid(String),
}

impl Identity {
    pub fn name(name: impl Into<String>) -> Self {
        Identity::Name(name.into())
    }

    pub fn uid(uid: impl Into<String>) -> Self {
        Identity::Uid(uid.into())
    }

    fn param(&self) -> (&'static str, String) {
        match self {
            Identity::Name(name) => ("player", name.clone()),
            Identity::Uid(uid) => ("uid", uid.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl Query {
    fn bridge() -> Self {
        Self {
            endpoint: Endpoint::Bridge,
            params: vec![("version", API_VERSION.to_owned())],
        }
    }

    fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Basic stats for one player.
    pub fn player_stats(identity: &Identity, platform: Platform, skip_rank: bool) -> Self {
        let (key, value) = identity.param();
        let query = Self::bridge()
            .with("platform", platform.as_str())
            .with(key, value);
        if skip_rank {
            query.with("skipRank", "true")
        } else {
            query
        }
    }

    /// Match history operation for one player.
    pub fn events(identity: &Identity, platform: Platform, action: Action) -> Self {
        let (key, value) = identity.param();
        Self::bridge()
            .with("platform", platform.as_str())
            .with(key, value)
            .with("history", "1")
            .with("action", action.as_str())
    }

    /// Every identity tracked under the API key, regardless of platform.
    pub fn tracked_players() -> Self {
        Self::bridge()
            .with("history", "1")
            .with("action", Action::Info.as_str())
    }

    /// Origin account lookup; `show_all_hits` turns it into a search.
    pub fn origin(player_name: &str, show_all_hits: bool) -> Self {
        let query = Self {
            endpoint: Endpoint::Origin,
            params: vec![("player", player_name.to_owned())],
        };
        if show_all_hits {
            query.with("showAllHits", "true")
        } else {
            query
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
