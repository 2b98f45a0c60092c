/// Bridge API raw wire types: serde shapes for deserializing service responses.
/// These map to the clean domain types via the functions in mapping.rs.
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Lenient field decoders. The service is loose about scalar types: ids come
// back as numbers, flags as 0/1, ranks as strings when not yet computed.
// ---------------------------------------------------------------------------

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn de_opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0),
        Some(Value::String(s)) => match s.as_str() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Collections the service sometimes sends as `null` instead of leaving out.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ---------------------------------------------------------------------------
// Player stats  (bridge, no history flag)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StatsRecord {
    pub global: Option<GlobalRecord>,
    pub realtime: Option<RealtimeRecord>,
    pub legends: Option<LegendsRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRecord {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub uid: Option<String>,
    pub avatar: Option<String>,
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub to_next_level_percent: Option<f64>,
    pub bans: Option<BansRecord>,
    pub rank: Option<RankRecord>,
    pub badges: Option<Vec<BadgeRecord>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BansRecord {
    #[serde(rename = "isActive", default, deserialize_with = "de_opt_flag")]
    pub is_active: Option<bool>,
    #[serde(rename = "remainingSeconds", default, deserialize_with = "de_opt_i64")]
    pub remaining_seconds: Option<i64>,
    #[serde(rename = "last_banReason")]
    pub last_ban_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankRecord {
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub rank_score: Option<i64>,
    pub rank_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub rank_div: Option<i64>,
    pub rank_img: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BadgeRecord {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub value: Option<i64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeRecord {
    pub lobby_state: Option<String>,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub is_online: Option<bool>,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub is_in_game: Option<bool>,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub can_join: Option<bool>,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub party_full: Option<bool>,
    pub selected_legend: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LegendsRecord {
    pub selected: Option<SelectedLegendRecord>,
    /// Keyed by legend name.
    #[serde(default, deserialize_with = "de_null_default")]
    pub all: BTreeMap<String, LegendRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SelectedLegendRecord {
    #[serde(rename = "LegendName")]
    pub legend_name: Option<String>,
    #[serde(flatten)]
    pub legend: LegendRecord,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LegendRecord {
    #[serde(default, deserialize_with = "de_null_default")]
    pub data: Vec<TrackerRecord>,
    #[serde(rename = "gameInfo")]
    pub game_info: Option<GameInfoRecord>,
    #[serde(rename = "ImgAssets")]
    pub img_assets: Option<ImgAssetsRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GameInfoRecord {
    pub skin: Option<String>,
    pub frame: Option<String>,
    pub pose: Option<String>,
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub badges: Vec<BadgeRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ImgAssetsRecord {
    pub icon: Option<String>,
    pub banner: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TrackerRecord {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub value: Option<f64>,
    pub key: Option<String>,
    pub rank: Option<TrackerRankRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrackerRankRecord {
    /// Strings such as "NOT_CALCULATED_YET" decode to None.
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub rank_pos: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub top_percent: Option<f64>,
}

// ---------------------------------------------------------------------------
// Match history  (bridge, history=1)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub uid: Option<String>,
    pub player: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub timestamp: Option<i64>,
    pub event_type: Option<String>,
    pub event: Option<EventDetailRecord>,
}

/// Union of every kind-specific field; the mapper reads only the ones that
/// belong to the record's `eventType`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailRecord {
    pub action: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub session_duration: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub xp_progress: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub game_length: Option<i64>,
    pub legend_played: Option<String>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub rank_score_change: Option<i64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub game_data: Vec<TrackerRecord>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub new_level: Option<i64>,
    pub new_rank: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TrackedListRecord {
    #[serde(default, deserialize_with = "de_null_default")]
    pub data: Vec<TrackedIdentityRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TrackedIdentityRecord {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub uid: Option<String>,
    pub platform: Option<String>,
}

// ---------------------------------------------------------------------------
// Origin lookup  (origin host)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OriginRecord {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub pid: Option<String>,
    pub avatar: Option<String>,
}
