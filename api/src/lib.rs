pub mod client;
pub mod decode;
pub mod describe;
pub mod mapping;
pub mod request;
pub mod transport;
pub mod wire;

pub use client::{ApexApi, ApiConfig, ApiError, ApiResult};
pub use decode::Payload;
pub use describe::describe;
pub use request::{Endpoint, Identity, Query};
pub use transport::{HttpTransport, RawResponse, Transport};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Enumerations: closed value sets shared by requests and responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "X1")]
    Xbox,
    #[serde(rename = "PS4")]
    Psn,
    #[serde(rename = "PC")]
    Pc,
}

impl Platform {
    /// Code used by the service on the wire ("X1", "PS4", "PC").
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Xbox => "X1",
            Platform::Psn => "PS4",
            Platform::Pc => "PC",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X1" | "XBOX" => Ok(Platform::Xbox),
            "PS4" | "PSN" => Ok(Platform::Psn),
            "PC" => Ok(Platform::Pc),
            _ => Err(ApiError::UnknownPlatform(s.to_owned())),
        }
    }
}

/// Server-side history tracking operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Info,   // list the identities currently tracked
    Get,    // all recorded events for one identity
    Add,    // start collecting history for an identity
    Delete, // stop collecting history for an identity
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Info => "info",
            Action::Get => "get",
            Action::Add => "add",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Action::Info),
            "get" => Ok(Action::Get),
            "add" => Ok(Action::Add),
            "delete" => Ok(Action::Delete),
            _ => Err(ApiError::UnknownAction(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    Session,
    Game,
    Level,
    Rank,
}

impl EventType {
    /// Tag as it appears in the `eventType` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Session => "Session",
            EventType::Game => "Game",
            EventType::Level => "Level",
            EventType::Rank => "Rank",
        }
    }
}

impl FromStr for EventType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Session" => Ok(EventType::Session),
            "Game" => Ok(EventType::Game),
            "Level" => Ok(EventType::Level),
            "Rank" => Ok(EventType::Rank),
            other => Err(ApiError::UnknownEventType(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the bridge wire format
// ---------------------------------------------------------------------------

/// Everything known about one player at the moment of retrieval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub global: GlobalInfo,
    pub realtime: RealtimeInfo,
    pub selected_legend: Option<Legend>,
    pub all_legends: Vec<Legend>,
    pub events: Vec<Event>,
    /// False when the service is not collecting history for this identity,
    /// in which case `events` is empty without any lookup having been made.
    pub history_tracked: bool,
    /// Origin account behind the name; looked up for PC players only.
    pub origin_info: Option<OriginAccount>,
    pub retrieved_at: DateTime<Utc>,
}

impl Player {
    /// Find a legend by name (case-insensitive).
    pub fn legend(&self, name: &str) -> Option<&Legend> {
        self.all_legends
            .iter()
            .chain(self.selected_legend.iter())
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalInfo {
    pub name: String,
    pub uid: String,
    pub avatar: Option<String>,
    pub platform: Option<Platform>,
    pub level: u32,
    pub to_next_level_percent: f64,
    pub bans: Bans,
    pub rank: Rank,
    pub badges: Option<Vec<Badge>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bans {
    pub reason: Option<String>,
    pub is_active: bool,
    pub remaining_seconds: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rank {
    pub score: i64,
    pub name: String,
    /// Roman numeral "I".."IV", empty when the service reports no division.
    pub division: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Badge {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RealtimeInfo {
    pub lobby_state: String,
    pub is_online: bool,
    pub is_in_game: bool,
    pub can_join: bool,
    pub party_full: bool,
    pub selected_legend: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub name: String,
    pub trackers: Vec<DataTracker>,
    pub images: ImageAssets,
    /// Cosmetics; only present for legends the payload carries them for.
    pub game_info: Option<GameInfo>,
}

impl Legend {
    /// First tracker whose category matches, so special-event and regular
    /// variants of a stat resolve to the same lookup.
    pub fn tracker(&self, category: &str) -> Option<&DataTracker> {
        self.trackers.iter().find(|t| t.category == category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageAssets {
    pub icon: Option<String>,
    pub banner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameInfo {
    pub skin: Option<String>,
    pub frame: Option<String>,
    pub pose: Option<String>,
    pub intro: Option<String>,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTracker {
    pub name: String,
    pub value: f64,
    pub key: String,
    pub category: String,
    pub rank: TrackerRank,
}

/// Position of a stat relative to the whole player population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackerRank {
    pub position: i64,
    pub percent: f64,
}

impl TrackerRank {
    /// Sentinel meaning "not ranked in this query".
    pub const UNRANKED: TrackerRank = TrackerRank { position: -1, percent: -1.0 };

    pub fn is_ranked(&self) -> bool {
        *self != Self::UNRANKED
    }
}

impl Default for TrackerRank {
    fn default() -> Self {
        Self::UNRANKED
    }
}

/// One historical occurrence for a tracked identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub origin_id: Option<String>,
    pub player: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub detail: EventDetail,
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self.detail {
            EventDetail::Session(_) => EventType::Session,
            EventDetail::Game(_) => EventType::Game,
            EventDetail::Level(_) => EventType::Level,
            EventDetail::Rank(_) => EventType::Rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventDetail {
    Session(SessionEvent),
    Game(GameEvent),
    Level(LevelEvent),
    Rank(RankEvent),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionEvent {
    pub action: Option<String>, // "join" | "leave"
    pub session_duration: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameEvent {
    pub xp_progress: Option<i64>,
    pub game_length: Option<i64>,
    pub legend_played: Option<String>,
    pub rank_score_change: Option<i64>,
    pub trackers: Vec<DataTracker>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelEvent {
    pub new_level: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankEvent {
    pub new_rank: Option<String>,
}

/// An identity the service collects history for.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackedIdentity {
    pub name: String,
    pub uid: String,
    pub platform: String, // wire code, validated only where a request is built from it
}

impl TrackedIdentity {
    /// How to address this entry in a request: by name, or by uid when the
    /// service left the name blank.
    pub fn identity(&self) -> Identity {
        if self.name.trim().is_empty() {
            Identity::uid(self.uid.as_str())
        } else {
            Identity::name(self.name.as_str())
        }
    }
}

/// Origin (EA) account behind a PC player name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OriginAccount {
    pub name: String,
    pub uid: String,
    pub pid: String,
    pub avatar: Option<String>,
}
