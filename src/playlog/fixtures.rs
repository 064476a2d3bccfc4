//! Play-log builders shared by unit tests.

use super::models::PlayLog;
use serde_json::{json, Value};

pub const ME: i64 = 1;
pub const ALICE: i64 = 2;
pub const BOB: i64 = 3;
pub const ANON: i64 = 4;

pub const FAB: i64 = 100;
pub const AZUL: i64 = 101;
pub const EXPANSION: i64 = 102;

/// A log with a fixed roster and catalog around the given plays.
pub fn log_with(plays: Value) -> PlayLog {
    serde_json::from_value(json!({
        "userInfo": { "meRefId": ME },
        "players": [
            { "id": ME, "name": "Me", "isAnonymous": false },
            { "id": ALICE, "name": "Alice", "isAnonymous": false },
            { "id": BOB, "name": "Bob", "isAnonymous": false },
            { "id": ANON, "name": "Anonymous", "isAnonymous": true }
        ],
        "games": [
            { "id": FAB, "name": "Flesh and Blood", "minPlayTime": 20, "maxPlayTime": 40 },
            { "id": AZUL, "name": "Azul", "minPlayTime": 30, "maxPlayTime": 45 },
            { "id": EXPANSION, "name": "Azul: Crystal Mosaic", "minPlayTime": 30, "maxPlayTime": 45 }
        ],
        "locations": [
            { "id": 7, "name": "Home" },
            { "id": 8, "name": "Game Store" }
        ],
        "plays": plays
    }))
    .expect("fixture log should deserialize")
}

pub fn score(player: i64, role: &str, winner: bool, start: bool) -> Value {
    json!({
        "playerRefId": player,
        "role": role,
        "winner": winner,
        "startPlayer": start,
        "newPlayer": false
    })
}

/// A Flesh and Blood play in the given format.
pub fn fab_play(uuid: &str, format: &str, scores: Vec<Value>) -> Value {
    json!({
        "uuid": uuid,
        "gameRefId": FAB,
        "locationRefId": 8,
        "playDate": "2024-05-04 19:30:00",
        "ignored": false,
        "playerScores": scores,
        "board": format
    })
}
