//! Mock room metrics dataset
//!
//! The demo animates aggregates derived from this fixed in-memory dataset.
//! A JSON file with the same shape can be substituted via `--data`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One room's metrics snapshot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomRecord {
    pub id: u32,
    pub name: String,
    pub api_calls: i64,
    /// Percent of quota left, 0..=100
    pub quota_remaining: i64,
    pub last_login: String,
    pub daily_usage: [i64; 7],
}

pub fn builtin_rooms() -> Vec<RoomRecord> {
    vec![
        RoomRecord {
            id: 1,
            name: "atlas".to_string(),
            api_calls: 412_009,
            quota_remaining: 63,
            last_login: "2026-08-06T09:14:00Z".to_string(),
            daily_usage: [4_210, 5_804, 3_998, 6_120, 5_233, 2_901, 4_410],
        },
        RoomRecord {
            id: 2,
            name: "borealis".to_string(),
            api_calls: 268_554,
            quota_remaining: 81,
            last_login: "2026-08-05T17:42:00Z".to_string(),
            daily_usage: [2_120, 1_944, 2_871, 3_402, 2_650, 1_208, 2_533],
        },
        RoomRecord {
            id: 3,
            name: "cascade".to_string(),
            api_calls: 731_220,
            quota_remaining: 37,
            last_login: "2026-08-07T06:03:00Z".to_string(),
            daily_usage: [8_904, 9_412, 7_730, 8_150, 9_001, 6_414, 8_267],
        },
        RoomRecord {
            id: 4,
            name: "dune".to_string(),
            api_calls: 95_477,
            quota_remaining: 92,
            last_login: "2026-08-02T11:20:00Z".to_string(),
            daily_usage: [812, 1_033, 970, 1_241, 884, 655, 1_102],
        },
        RoomRecord {
            id: 5,
            name: "ember".to_string(),
            api_calls: 523_861,
            quota_remaining: 54,
            last_login: "2026-08-06T22:55:00Z".to_string(),
            daily_usage: [5_530, 6_208, 5_977, 6_841, 6_004, 4_312, 5_766],
        },
    ]
}

pub fn load_rooms(path: &Path) -> Result<Vec<RoomRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read room data from {}", path.display()))?;
    let rooms: Vec<RoomRecord> =
        serde_json::from_str(&raw).context("room data is not valid JSON")?;
    Ok(rooms)
}

// Headline aggregates. Plain folds; the numbers only exist to feed the
// tween engine.

pub fn total_api_calls(rooms: &[RoomRecord]) -> i64 {
    rooms.iter().map(|r| r.api_calls).sum()
}

pub fn average_quota(rooms: &[RoomRecord]) -> i64 {
    if rooms.is_empty() {
        return 0;
    }
    rooms.iter().map(|r| r.quota_remaining).sum::<i64>() / rooms.len() as i64
}

pub fn peak_daily_usage(rooms: &[RoomRecord]) -> i64 {
    rooms
        .iter()
        .flat_map(|r| r.daily_usage)
        .max()
        .unwrap_or(0)
}
