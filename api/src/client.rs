use crate::decode::{Payload, decode_response};
use crate::mapping::{map_event, map_origin, map_player, map_tracked_identity};
use crate::request::{Endpoint, Identity, Query};
use crate::transport::{HttpTransport, Transport};
use crate::wire::{EventRecord, OriginRecord, StatsRecord, TrackedListRecord};
use crate::{Action, Event, OriginAccount, Platform, Player, TrackedIdentity};
use chrono::Utc;
use log::{debug, info, warn};
use std::time::Duration;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_BASE_URL: &str = "https://api.mozambiquehe.re";
pub const API_KEY_ENV_VAR: &str = "APEX_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "APEX_API_BASE_URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid request URL {0}")]
    InvalidUrl(String),

    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service reported an error: {0}")]
    Upstream(String),

    #[error("expected JSON records, got plain text: {0}")]
    Unstructured(String),

    #[error("unexpected record shape: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("unrecognised event type {0:?}")]
    UnknownEventType(String),

    #[error("unknown platform {0:?}")]
    UnknownPlatform(String),

    #[error("unknown history action {0:?}")]
    UnknownAction(String),

    #[error("could not render output: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("expected {expected} record(s), got {actual}")]
    UnexpectedCount { expected: usize, actual: usize },

    #[error("tracked list changed underneath us after deleting {name}: expected {expected} remaining, got {actual}")]
    LostUpdate {
        name: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    /// Host serving both `/bridge` and `/origin`.
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Read `APEX_API_KEY` (required) and `APEX_API_BASE_URL` (optional).
    pub fn from_env() -> ApiResult<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ApiError::MissingConfig(API_KEY_ENV_VAR))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR)
            && !base_url.trim().is_empty()
        {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

/// Apex Legends stats client. Every call is blocking and sequential; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct ApexApi<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl ApexApi<HttpTransport> {
    pub fn new(api_key: &str) -> ApiResult<Self> {
        Self::from_config(ApiConfig::new(api_key))
    }

    pub fn from_config(config: ApiConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(&config.api_key, config.timeout)?;
        Ok(Self::with_transport(transport, config.base_url))
    }
}

impl<T: Transport> ApexApi<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { transport, base_url }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    fn request(&self, query: &Query) -> ApiResult<Payload> {
        let url = self.url(query.endpoint);
        let response = self.transport.get(&url, &query.params)?;
        decode_response(response.status, &response.body)
    }

    // -----------------------------------------------------------------------
    // Raw operations: decoded records, no domain mapping
    // -----------------------------------------------------------------------

    /// Basic stats for a player by name.
    pub fn basic_player_stats(&self, player_name: &str, platform: Platform) -> ApiResult<Payload> {
        self.player_stats(&Identity::name(player_name), platform, false)
    }

    pub fn basic_player_stats_by_uid(&self, uid: &str, platform: Platform) -> ApiResult<Payload> {
        self.player_stats(&Identity::uid(uid), platform, false)
    }

    /// Stats with full control over addressing; `skip_rank` asks the service
    /// not to compute tracker ranks.
    pub fn player_stats(
        &self,
        identity: &Identity,
        platform: Platform,
        skip_rank: bool,
    ) -> ApiResult<Payload> {
        debug!("fetching stats for {identity:?} on {platform}");
        self.request(&Query::player_stats(identity, platform, skip_rank))
    }

    /// Match history operation for a player by name.
    ///
    /// History is only collected for identities the service tracks; use
    /// [`Action::Add`] to start tracking.
    pub fn events(&self, player_name: &str, platform: Platform, action: Action) -> ApiResult<Payload> {
        self.history(&Identity::name(player_name), platform, action)
    }

    pub fn events_by_uid(&self, uid: &str, platform: Platform, action: Action) -> ApiResult<Payload> {
        self.history(&Identity::uid(uid), platform, action)
    }

    fn history(&self, identity: &Identity, platform: Platform, action: Action) -> ApiResult<Payload> {
        debug!("history {action} for {identity:?} on {platform}");
        self.request(&Query::events(identity, platform, action))
    }

    /// Origin UID, real username, PID and avatar for a name. `show_all_hits`
    /// searches instead of matching exactly.
    pub fn get_player_origin(&self, player_name: &str, show_all_hits: bool) -> ApiResult<Payload> {
        debug!("origin lookup for {player_name} (all hits: {show_all_hits})");
        self.request(&Query::origin(player_name, show_all_hits))
    }

    // -----------------------------------------------------------------------
    // Typed operations
    // -----------------------------------------------------------------------

    /// Every identity tracked under this API key.
    pub fn tracked_players(&self) -> ApiResult<Vec<TrackedIdentity>> {
        let payload = self.request(&Query::tracked_players())?;
        tracked_list(payload)
    }

    pub fn event_history(&self, identity: &Identity, platform: Platform) -> ApiResult<Vec<Event>> {
        self.history(identity, platform, Action::Get)?
            .into_typed::<EventRecord>()?
            .into_iter()
            .map(map_event)
            .collect()
    }

    /// Start collecting history; returns the tracked list after the change.
    pub fn track_player(
        &self,
        identity: &Identity,
        platform: Platform,
    ) -> ApiResult<Vec<TrackedIdentity>> {
        tracked_list(self.history(identity, platform, Action::Add)?)
    }

    /// Stop collecting history; returns the tracked list after the change.
    pub fn untrack_player(
        &self,
        identity: &Identity,
        platform: Platform,
    ) -> ApiResult<Vec<TrackedIdentity>> {
        tracked_list(self.history(identity, platform, Action::Delete)?)
    }

    pub fn origin_accounts(
        &self,
        player_name: &str,
        show_all_hits: bool,
    ) -> ApiResult<Vec<OriginAccount>> {
        let records = self
            .get_player_origin(player_name, show_all_hits)?
            .into_typed::<OriginRecord>()?;
        Ok(records.into_iter().map(map_origin).collect())
    }

    // -----------------------------------------------------------------------
    // Composite operations
    // -----------------------------------------------------------------------

    /// Stats, origin account (PC only), tracking status and, when tracked, the
    /// full history for one player.
    pub fn get_player(&self, name: &str, platform: Platform) -> ApiResult<Player> {
        self.fetch_player(&Identity::name(name), platform)
    }

    pub fn get_player_by_uid(&self, uid: &str, platform: Platform) -> ApiResult<Player> {
        self.fetch_player(&Identity::uid(uid), platform)
    }

    fn fetch_player(&self, identity: &Identity, platform: Platform) -> ApiResult<Player> {
        let mut records = self
            .player_stats(identity, platform, false)?
            .into_typed::<StatsRecord>()?;
        if records.len() != 1 {
            return Err(ApiError::UnexpectedCount { expected: 1, actual: records.len() });
        }
        let stats = records.remove(0);

        let origin_info = if platform == Platform::Pc {
            let name = match identity {
                Identity::Name(name) => Some(name.clone()),
                Identity::Uid(_) => stats.global.as_ref().and_then(|g| g.name.clone()),
            };
            match name {
                Some(name) => self.single_origin(&name)?,
                None => None,
            }
        } else {
            None
        };

        let tracked = self.is_tracked(identity, platform)?;
        let events = if tracked {
            self.event_history(identity, platform)?
        } else {
            debug!("{identity:?} is not tracked, skipping history");
            Vec::new()
        };

        let mut player = map_player(stats, events, tracked, Utc::now());
        player.origin_info = origin_info;
        Ok(player)
    }

    fn single_origin(&self, name: &str) -> ApiResult<Option<OriginAccount>> {
        let mut accounts = self.origin_accounts(name, false)?;
        if accounts.len() != 1 {
            warn!("origin lookup for {name} returned {} accounts, leaving it unset", accounts.len());
            return Ok(None);
        }
        Ok(accounts.pop())
    }

    fn is_tracked(&self, identity: &Identity, platform: Platform) -> ApiResult<bool> {
        let tracked = tracked_list(self.history(identity, platform, Action::Info)?)?;
        Ok(tracked.iter().any(|t| {
            let same_identity = match identity {
                Identity::Name(name) => &t.name == name,
                Identity::Uid(uid) => &t.uid == uid,
            };
            same_identity && t.platform == platform.as_str()
        }))
    }

    /// Delete every tracked identity, checking after each delete that exactly
    /// one entry left the list. Cannot be undone. Returns how many were deleted.
    pub fn delete_all_tracked_players(&self) -> ApiResult<usize> {
        let tracked = self.tracked_players()?;
        let mut remaining = tracked.len();
        info!("deleting {remaining} tracked players");

        for player in &tracked {
            let platform: Platform = player.platform.parse()?;
            let identity = player.identity();
            let after = self.untrack_player(&identity, platform)?;
            remaining -= 1;
            if after.len() != remaining {
                let (Identity::Name(name) | Identity::Uid(name)) = identity;
                return Err(ApiError::LostUpdate {
                    name,
                    expected: remaining,
                    actual: after.len(),
                });
            }
            debug!("deleted {identity:?} ({platform}), {remaining} left");
        }

        Ok(tracked.len())
    }
}

fn tracked_list(payload: Payload) -> ApiResult<Vec<TrackedIdentity>> {
    Ok(payload
        .into_typed::<TrackedListRecord>()?
        .into_iter()
        .flat_map(|list| list.data)
        .map(map_tracked_identity)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use crate::{EventDetail, EventType};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const STATS_JSON: &str = include_str!("../tests/fixtures/basic_player_stats.json");
    const EVENTS_JSON: &str = include_str!("../tests/fixtures/events_get.json");
    const INFO_JSON: &str = include_str!("../tests/fixtures/events_info.json");
    const ORIGIN_JSON: &str = include_str!("../tests/fixtures/player_origin.json");

    type Call = (String, Vec<(&'static str, String)>);

    /// Replays canned responses in order and records every call.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<RawResponse>>,
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedTransport {
        fn new(responses: impl IntoIterator<Item = (u16, String)>) -> Self {
            Self {
                responses: RefCell::new(
                    responses
                        .into_iter()
                        .map(|(status, body)| RawResponse::new(status, body))
                        .collect(),
                ),
                calls: RefCell::default(),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn get(&self, url: &str, params: &[(&'static str, String)]) -> ApiResult<RawResponse> {
            self.calls.borrow_mut().push((url.to_owned(), params.to_vec()));
            Ok(self
                .responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected extra request"))
        }
    }

    fn api(responses: impl IntoIterator<Item = (u16, String)>) -> ApexApi<ScriptedTransport> {
        ApexApi::with_transport(ScriptedTransport::new(responses), "https://api.test/")
    }

    fn ok(body: &str) -> (u16, String) {
        (200, body.to_owned())
    }

    fn param<'a>(call: &'a Call, key: &str) -> Option<&'a str> {
        call.1.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    fn tracked_json(names: &[&str]) -> String {
        let data: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({ "name": n, "uid": "1", "platform": "PC" }))
            .collect();
        serde_json::json!({ "data": data }).to_string()
    }

    #[test]
    fn basic_player_stats_returns_records() {
        let api = api([ok(STATS_JSON)]);
        let payload = api.basic_player_stats("Player", Platform::Pc).unwrap();
        assert_eq!(payload.records()[0]["global"]["name"], "Player");

        let calls = api.transport.calls.borrow();
        assert_eq!(calls[0].0, "https://api.test/bridge");
        assert_eq!(param(&calls[0], "player"), Some("Player"));
        assert_eq!(param(&calls[0], "platform"), Some("PC"));
    }

    #[test]
    fn origin_lookup_uses_origin_endpoint() {
        let api = api([ok(r#"{"name": "Player", "uid": 1, "pid": 2}"#)]);
        let accounts = api.origin_accounts("Player", true).unwrap();
        assert_eq!(accounts[0].uid, "1");
        assert_eq!(accounts[0].pid, "2");

        let calls = api.transport.calls.borrow();
        assert_eq!(calls[0].0, "https://api.test/origin");
        assert_eq!(param(&calls[0], "showAllHits"), Some("true"));
    }

    #[test]
    fn non_200_surfaces_status_and_body() {
        let api = api([(404, "not found".to_owned())]);
        let err = api.get_player("Player", Platform::Pc).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 404, ref body } if body == "not found"
        ));
        assert_eq!(api.transport.calls.borrow().len(), 1);
    }

    #[test]
    fn get_player_fetches_history_when_tracked() {
        let api = api([ok(STATS_JSON), ok(ORIGIN_JSON), ok(INFO_JSON), ok(EVENTS_JSON)]);
        let player = api.get_player("Player", Platform::Pc).unwrap();

        assert_eq!(player.global.name, "Player");
        assert!(player.history_tracked);
        assert_eq!(player.events.len(), 4);
        assert_eq!(player.events[0].event_type(), EventType::Session);
        match &player.events[0].detail {
            EventDetail::Session(s) => assert_eq!(s.action.as_deref(), Some("leave")),
            other => panic!("expected session, got {other:?}"),
        }

        let origin = player.origin_info.as_ref().expect("PC player has origin info");
        assert_eq!(origin.pid, "1000575543323");

        let calls = api.transport.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(param(&calls[0], "history"), None);
        assert_eq!(calls[1].0, "https://api.test/origin");
        assert_eq!(param(&calls[1], "player"), Some("Player"));
        assert_eq!(param(&calls[1], "showAllHits"), None);
        assert_eq!(param(&calls[2], "action"), Some("info"));
        assert_eq!(param(&calls[3], "action"), Some("get"));
    }

    #[test]
    fn get_player_skips_history_when_untracked() {
        let api = api([
            ok(STATS_JSON),
            ok(ORIGIN_JSON),
            ok(&tracked_json(&["Someone Else"])),
        ]);
        let player = api.get_player("Player", Platform::Pc).unwrap();

        assert!(!player.history_tracked);
        assert!(player.events.is_empty());
        assert_eq!(api.transport.calls.borrow().len(), 3);
    }

    #[test]
    fn get_player_requires_matching_platform() {
        // same name, different platform
        let info = r#"{"data": [{"name": "Player", "uid": "1", "platform": "PS4"}]}"#;
        let api = api([ok(STATS_JSON), ok(ORIGIN_JSON), ok(info)]);
        let player = api.get_player("Player", Platform::Pc).unwrap();
        assert!(!player.history_tracked);
    }

    #[test]
    fn get_player_by_uid_matches_on_uid() {
        let api = api([ok(STATS_JSON), ok(ORIGIN_JSON), ok(INFO_JSON), ok(EVENTS_JSON)]);
        let player = api.get_player_by_uid("1000575543323", Platform::Pc).unwrap();
        assert!(player.history_tracked);
        assert!(player.origin_info.is_some());

        let calls = api.transport.calls.borrow();
        let (origin, bridge): (Vec<&Call>, Vec<&Call>) =
            calls.iter().partition(|c| c.0.ends_with("/origin"));
        // origin is looked up by the name the stats record reports
        assert_eq!(origin.len(), 1);
        assert_eq!(param(origin[0], "player"), Some("Player"));
        assert_eq!(bridge.len(), 3);
        assert!(bridge.iter().all(|c| param(c, "uid") == Some("1000575543323")));
        assert!(bridge.iter().all(|c| param(c, "player").is_none()));
    }

    #[test]
    fn get_player_skips_origin_off_pc() {
        let api = api([ok(STATS_JSON), ok(&tracked_json(&[]))]);
        let player = api.get_player("Player", Platform::Psn).unwrap();

        assert!(player.origin_info.is_none());
        let calls = api.transport.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.0.ends_with("/bridge")));
    }

    #[test]
    fn get_player_leaves_origin_unset_on_ambiguous_lookup() {
        let two = format!("[{ORIGIN_JSON}, {ORIGIN_JSON}]");
        let api = api([ok(STATS_JSON), ok(&two), ok(&tracked_json(&[]))]);
        let player = api.get_player("Player", Platform::Pc).unwrap();
        assert!(player.origin_info.is_none());
        assert_eq!(player.global.name, "Player");
    }

    #[test]
    fn get_player_rejects_multiple_stats_records() {
        let two = format!("[{STATS_JSON}, {STATS_JSON}]");
        let api = api([ok(&two)]);
        let err = api.get_player("Player", Platform::Pc).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedCount { expected: 1, actual: 2 }));
    }

    #[test]
    fn get_player_rejects_empty_stats() {
        let api = api([ok("[]")]);
        let err = api.get_player("Player", Platform::Pc).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedCount { expected: 1, actual: 0 }));
    }

    #[test]
    fn get_player_surfaces_in_band_error() {
        let api = api([ok(r#"{"Error": "Player Player not found"}"#)]);
        let err = api.get_player("Player", Platform::Pc).unwrap_err();
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[test]
    fn event_history_fails_on_unknown_kind() {
        let body = r#"[{"eventType": "Purchase", "event": {}}]"#;
        let api = api([ok(body)]);
        let err = api
            .event_history(&Identity::name("Player"), Platform::Pc)
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownEventType(_)));
    }

    #[test]
    fn delete_all_tracked_players_deletes_each_in_turn() {
        let api = api([
            ok(&tracked_json(&["A", "B"])),
            ok(&tracked_json(&["B"])),
            ok(&tracked_json(&[])),
        ]);
        assert_eq!(api.delete_all_tracked_players().unwrap(), 2);

        let calls = api.transport.calls.borrow();
        assert_eq!(param(&calls[0], "action"), Some("info"));
        assert_eq!(param(&calls[0], "player"), None);
        assert_eq!(param(&calls[1], "action"), Some("delete"));
        assert_eq!(param(&calls[1], "player"), Some("A"));
        assert_eq!(param(&calls[2], "player"), Some("B"));
    }

    #[test]
    fn delete_all_detects_lost_update() {
        // someone else added a player between our calls
        let api = api([
            ok(&tracked_json(&["A", "B"])),
            ok(&tracked_json(&["B", "C"])),
        ]);
        let err = api.delete_all_tracked_players().unwrap_err();
        match err {
            ApiError::LostUpdate { name, expected, actual } => {
                assert_eq!(name, "A");
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected LostUpdate, got {other:?}"),
        }
    }

    #[test]
    fn delete_all_addresses_nameless_entries_by_uid() {
        let list = r#"{"data": [{"name": "", "uid": 1000575543323, "platform": "X1"}]}"#;
        let api = api([ok(list), ok(&tracked_json(&[]))]);
        assert_eq!(api.delete_all_tracked_players().unwrap(), 1);

        let calls = api.transport.calls.borrow();
        assert_eq!(param(&calls[1], "action"), Some("delete"));
        assert_eq!(param(&calls[1], "uid"), Some("1000575543323"));
        assert_eq!(param(&calls[1], "player"), None);
        assert_eq!(param(&calls[1], "platform"), Some("X1"));
    }

    #[test]
    fn delete_all_rejects_unknown_platform() {
        let list = r#"{"data": [{"name": "A", "uid": "1", "platform": "SWITCH"}]}"#;
        let api = api([ok(list)]);
        let err = api.delete_all_tracked_players().unwrap_err();
        assert!(matches!(err, ApiError::UnknownPlatform(p) if p == "SWITCH"));
    }

    #[test]
    fn delete_all_with_nothing_tracked_is_a_no_op() {
        let api = api([ok(&tracked_json(&[]))]);
        assert_eq!(api.delete_all_tracked_players().unwrap(), 0);
        assert_eq!(api.transport.calls.borrow().len(), 1);
    }

    #[test]
    fn config_defaults() {
        let config = ApiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    // Tests below mutate process environment; they hold this lock so they
    // never interleave with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<R>(vars: &[(&str, Option<&str>)], test: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect();
        for (k, v) in vars {
            set_env(k, *v);
        }
        let result = test();
        for (k, v) in &saved {
            set_env(k, v.as_deref());
        }
        result
    }

    fn set_env(key: &str, value: Option<&str>) {
        // SAFETY: only called while ENV_LOCK is held.
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn from_env_requires_api_key() {
        let err = with_env(&[(API_KEY_ENV_VAR, None)], ApiConfig::from_env).unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig(var) if var == API_KEY_ENV_VAR));

        let blank = with_env(&[(API_KEY_ENV_VAR, Some("  "))], ApiConfig::from_env);
        assert!(matches!(blank, Err(ApiError::MissingConfig(_))));
    }

    #[test]
    fn from_env_ignores_blank_base_url() {
        let config = with_env(
            &[(API_KEY_ENV_VAR, Some("key")), (BASE_URL_ENV_VAR, Some(""))],
            ApiConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_applies_base_url_override() {
        let config = with_env(
            &[
                (API_KEY_ENV_VAR, Some("key")),
                (BASE_URL_ENV_VAR, Some("http://localhost:8080")),
            ],
            ApiConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
