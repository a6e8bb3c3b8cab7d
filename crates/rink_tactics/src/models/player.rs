//! Tracked player samples and frames, as supplied by the tracking pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Tracking id of a player
pub type PlayerId = u32;

/// Rink-relative (x, y) position
pub type RinkPoint = (f32, f32);

/// Team label within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::A => "A",
            TeamSide::B => "B",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked player at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSample {
    pub id: PlayerId,
    pub team: TeamSide,
    /// Absent when the tracker could not place the player on the rink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rink_position: Option<RinkPoint>,
}

impl PlayerSample {
    pub fn positioned(id: PlayerId, team: TeamSide, x: f32, y: f32) -> Self {
        Self {
            id,
            team,
            rink_position: Some((x, y)),
        }
    }

    pub fn unpositioned(id: PlayerId, team: TeamSide) -> Self {
        Self {
            id,
            team,
            rink_position: None,
        }
    }

    /// Player with a position, if it has one.
    pub fn to_positioned(&self) -> Option<PositionedPlayer> {
        self.rink_position.map(|(x, y)| PositionedPlayer { id: self.id, x, y })
    }
}

/// A player that takes part in formation geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedPlayer {
    pub id: PlayerId,
    pub x: f32,
    pub y: f32,
}

impl PositionedPlayer {
    pub fn new(id: PlayerId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Snapshot of both teams at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub frame_number: u64,
    #[serde(default)]
    pub players: Vec<PlayerSample>,
}

impl Frame {
    pub fn new(frame_number: u64, players: Vec<PlayerSample>) -> Self {
        Self {
            frame_number,
            players,
        }
    }

    /// Decode a JSON array of frames.
    pub fn parse_many(json: &str) -> Result<Vec<Frame>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Positioned players of one team, in frame order.
    pub fn positioned_players(&self, team: TeamSide) -> Vec<PositionedPlayer> {
        self.players
            .iter()
            .filter(|p| p.team == team)
            .filter_map(PlayerSample::to_positioned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_parses_tracking_json() {
        let raw = r#"{
            "frame_number": 12,
            "players": [
                {"id": 1, "team": "A", "rink_position": [10.0, 40.5]},
                {"id": 2, "team": "B"},
                {"id": 3, "team": "B", "rink_position": [-3.0, 120.0]}
            ]
        }"#;
        let frame: Frame = serde_json::from_str(raw).unwrap();
        assert_eq!(frame.frame_number, 12);
        assert_eq!(frame.players.len(), 3);
        assert_eq!(frame.players[0].rink_position, Some((10.0, 40.5)));
        assert_eq!(frame.players[1].rink_position, None);
    }

    #[test]
    fn test_frame_defaults_when_fields_missing() {
        let frame: Frame = serde_json::from_str("{}").unwrap();
        assert_eq!(frame.frame_number, 0);
        assert!(frame.players.is_empty());
    }

    #[test]
    fn test_positioned_players_skips_unplaced() {
        let frame = Frame::new(
            0,
            vec![
                PlayerSample::positioned(1, TeamSide::A, 0.0, 1.0),
                PlayerSample::unpositioned(2, TeamSide::A),
                PlayerSample::positioned(3, TeamSide::B, 5.0, 5.0),
            ],
        );
        let team_a = frame.positioned_players(TeamSide::A);
        assert_eq!(team_a, vec![PositionedPlayer::new(1, 0.0, 1.0)]);
        assert_eq!(frame.positioned_players(TeamSide::B).len(), 1);
    }

    #[test]
    fn test_parse_many() {
        let frames = Frame::parse_many(r#"[{"frame_number": 1}, {"frame_number": 2, "players": []}]"#).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].frame_number, 2);
        assert!(Frame::parse_many("{").is_err());
    }

    #[test]
    fn test_unknown_team_label_is_rejected() {
        let raw = r#"{"id": 1, "team": "C"}"#;
        assert!(serde_json::from_str::<PlayerSample>(raw).is_err());
    }
}
