//! Mapping: bridge wire types → clean domain types.
//!
//! Every function here is pure. Missing optional sections become `None` or
//! the field's default; the only hard failure is an event tag the mapper does
//! not know.

use crate::client::ApiResult;
use crate::wire::{
    BadgeRecord, BansRecord, EventRecord, GameInfoRecord, GlobalRecord, ImgAssetsRecord,
    LegendRecord, OriginRecord, RankRecord, RealtimeRecord, StatsRecord, TrackedIdentityRecord,
    TrackerRankRecord, TrackerRecord,
};
use crate::{
    Badge, Bans, DataTracker, Event, EventDetail, EventType, GameEvent, GameInfo, GlobalInfo,
    ImageAssets, Legend, LevelEvent, OriginAccount, Platform, Player, Rank, RankEvent,
    RealtimeInfo, SessionEvent, TrackedIdentity, TrackerRank,
};
use chrono::{DateTime, Utc};
use log::warn;

/// Prefix the service puts on trackers that belong to a limited-time event.
pub const SPECIAL_EVENT_PREFIX: &str = "specialEvent_";

/// Assemble a player from one stats record plus whatever history was fetched.
pub fn map_player(
    stats: StatsRecord,
    events: Vec<Event>,
    history_tracked: bool,
    retrieved_at: DateTime<Utc>,
) -> Player {
    let legends = stats.legends.unwrap_or_default();

    let selected_legend = legends.selected.map(|selected| {
        let name = selected.legend_name.unwrap_or_default();
        map_legend(name, selected.legend)
    });

    let all_legends = legends
        .all
        .into_iter()
        .map(|(name, legend)| map_legend(name, legend))
        .collect();

    Player {
        global: stats.global.map(map_global).unwrap_or_default(),
        realtime: stats.realtime.map(map_realtime).unwrap_or_default(),
        selected_legend,
        all_legends,
        events,
        history_tracked,
        origin_info: None,
        retrieved_at,
    }
}

pub fn map_global(g: GlobalRecord) -> GlobalInfo {
    let platform = g.platform.as_deref().and_then(|code| match code.parse::<Platform>() {
        Ok(p) => Some(p),
        Err(_) => {
            warn!("stats record carries unknown platform tag {code:?}");
            None
        }
    });

    GlobalInfo {
        name: g.name.unwrap_or_default(),
        uid: g.uid.unwrap_or_default(),
        avatar: g.avatar,
        platform,
        level: g.level.and_then(|l| u32::try_from(l).ok()).unwrap_or_default(),
        to_next_level_percent: g.to_next_level_percent.unwrap_or_default(),
        bans: g.bans.map(map_bans).unwrap_or_default(),
        rank: g.rank.map(map_rank).unwrap_or_default(),
        badges: g.badges.map(|badges| badges.into_iter().map(map_badge).collect()),
    }
}

fn map_bans(b: BansRecord) -> Bans {
    Bans {
        reason: b.last_ban_reason,
        is_active: b.is_active.unwrap_or_default(),
        remaining_seconds: b.remaining_seconds.unwrap_or_default(),
    }
}

fn map_rank(r: RankRecord) -> Rank {
    Rank {
        score: r.rank_score.unwrap_or_default(),
        name: r.rank_name.unwrap_or_default(),
        division: r.rank_div.map(division_numeral).unwrap_or_default().to_owned(),
        image: r.rank_img,
    }
}

/// Rank division as a roman numeral; anything outside 1..=4 means the
/// service has no division to report.
pub fn division_numeral(division: i64) -> &'static str {
    match division {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        _ => "",
    }
}

fn map_badge(b: BadgeRecord) -> Badge {
    Badge {
        name: b.name.unwrap_or_default(),
        value: b.value.unwrap_or_default(),
    }
}

pub fn map_realtime(r: RealtimeRecord) -> RealtimeInfo {
    RealtimeInfo {
        lobby_state: r.lobby_state.unwrap_or_default(),
        is_online: r.is_online.unwrap_or_default(),
        is_in_game: r.is_in_game.unwrap_or_default(),
        can_join: r.can_join.unwrap_or_default(),
        party_full: r.party_full.unwrap_or_default(),
        selected_legend: r.selected_legend.unwrap_or_default(),
    }
}

pub fn map_legend(name: String, l: LegendRecord) -> Legend {
    Legend {
        name,
        trackers: l.data.into_iter().map(map_tracker).collect(),
        images: l.img_assets.map(map_images).unwrap_or_default(),
        game_info: l.game_info.map(map_game_info),
    }
}

fn map_images(i: ImgAssetsRecord) -> ImageAssets {
    ImageAssets { icon: i.icon, banner: i.banner }
}

fn map_game_info(g: GameInfoRecord) -> GameInfo {
    GameInfo {
        skin: g.skin,
        frame: g.frame,
        pose: g.pose,
        intro: g.intro,
        badges: g.badges.into_iter().map(map_badge).collect(),
    }
}

pub fn map_tracker(t: TrackerRecord) -> DataTracker {
    let key = t.key.unwrap_or_default();
    DataTracker {
        name: t.name.unwrap_or_default(),
        value: t.value.unwrap_or_default(),
        category: tracker_category(&key).to_owned(),
        key,
        rank: t.rank.map(map_tracker_rank).unwrap_or_default(),
    }
}

fn map_tracker_rank(r: TrackerRankRecord) -> TrackerRank {
    TrackerRank {
        position: r.rank_pos.unwrap_or(TrackerRank::UNRANKED.position),
        percent: r.top_percent.unwrap_or(TrackerRank::UNRANKED.percent),
    }
}

/// Tracker key with the special-event prefix stripped, so "specialEvent_kills"
/// and "kills" aggregate together.
pub fn tracker_category(key: &str) -> &str {
    key.strip_prefix(SPECIAL_EVENT_PREFIX).unwrap_or(key)
}

/// Decode one history record, dispatching on its `eventType` tag.
pub fn map_event(e: EventRecord) -> ApiResult<Event> {
    let event_type: EventType = e.event_type.as_deref().unwrap_or_default().parse()?;
    let raw = e.event.unwrap_or_default();

    let detail = match event_type {
        EventType::Session => EventDetail::Session(SessionEvent {
            action: raw.action,
            session_duration: raw.session_duration,
        }),
        EventType::Game => EventDetail::Game(GameEvent {
            xp_progress: raw.xp_progress,
            game_length: raw.game_length,
            legend_played: raw.legend_played,
            rank_score_change: raw.rank_score_change,
            trackers: raw.game_data.into_iter().map(map_tracker).collect(),
        }),
        EventType::Level => EventDetail::Level(LevelEvent { new_level: raw.new_level }),
        EventType::Rank => EventDetail::Rank(RankEvent { new_rank: raw.new_rank }),
    };

    Ok(Event {
        origin_id: e.uid,
        player: e.player,
        timestamp: e.timestamp.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        detail,
    })
}

pub fn map_tracked_identity(t: TrackedIdentityRecord) -> TrackedIdentity {
    TrackedIdentity {
        name: t.name.unwrap_or_default(),
        uid: t.uid.unwrap_or_default(),
        platform: t.platform.unwrap_or_default(),
    }
}

pub fn map_origin(o: OriginRecord) -> OriginAccount {
    OriginAccount {
        name: o.name.unwrap_or_default(),
        uid: o.uid.unwrap_or_default(),
        pid: o.pid.unwrap_or_default(),
        avatar: o.avatar,
    }
}
