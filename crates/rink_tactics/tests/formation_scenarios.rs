use std::fs;
use std::path::PathBuf;

use rink_tactics::analysis::summarize_parallel;
use rink_tactics::{
    get_formation_summary, FormationBasis, FormationType, Frame, FrameTacticsAnalyzer,
    PlayerSample, RinkGeometry, TeamFormationClassifier, TeamSide, Zone,
};
use rink_tactics::models::PositionedPlayer;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn game_frames() -> Vec<Frame> {
    Frame::parse_many(&read_fixture("game_frames.json")).expect("fixture should parse")
}

#[test]
fn offensive_1_2_2_forecheck_scenario() {
    let classifier = TeamFormationClassifier::default();
    let players = vec![
        PositionedPlayer::new(1, -30.0, 40.0),
        PositionedPlayer::new(2, -30.0, 0.0),
        PositionedPlayer::new(3, 0.0, 0.0),
        PositionedPlayer::new(4, 30.0, 0.0),
        PositionedPlayer::new(5, 30.0, -40.0),
    ];
    let formation = classifier.analyze_team_formation(&players, Zone::Offensive);
    assert_eq!(formation.formation_type, FormationType::Forecheck122);
    assert_eq!(formation.confidence, 0.85);
}

#[test]
fn defensive_box_scenario() {
    let classifier = TeamFormationClassifier::default();
    let players = vec![
        PositionedPlayer::new(1, -40.0, 30.0),
        PositionedPlayer::new(2, 40.0, 30.0),
        PositionedPlayer::new(3, -40.0, 30.0),
        PositionedPlayer::new(4, 40.0, -90.0),
    ];
    let formation = classifier.analyze_team_formation(&players, Zone::Defensive);
    assert_eq!(formation.formation_type, FormationType::DefenseBox);
    assert_eq!(formation.confidence, 0.85);
    assert_eq!(formation.basis, FormationBasis::Signature);
}

#[test]
fn team_with_no_positions_scenario() {
    let analyzer = FrameTacticsAnalyzer::default();
    let frame = &game_frames()[1];
    let tactics = analyzer.analyze_frame_tactics(frame);

    assert!(tactics.team_a.formation.is_some());
    assert_eq!(tactics.team_a.player_count, 5);
    assert!(tactics.team_b.formation.is_none());
    assert!(tactics.team_b.zone.is_none());
    assert_eq!(tactics.team_b.player_count, 0);
}

#[test]
fn empty_game_scenario() {
    let summary = get_formation_summary(&[]);
    assert!(summary.team_a.is_empty());
    assert!(summary.team_b.is_empty());
}

#[test]
fn fixture_game_classifications() {
    let analyzer = FrameTacticsAnalyzer::default();
    let tactics = analyzer.analyze_game(&game_frames());
    assert_eq!(tactics.len(), 3);

    // frame 0: team A forechecks deep in the offensive zone, team B boxes up at home
    let a0 = tactics[0].team_a.formation.as_ref().unwrap();
    assert_eq!(a0.formation_type, FormationType::Forecheck122);
    assert_eq!(a0.players_involved, vec![11, 12, 13, 14, 15]);
    let b0 = tactics[0].team_b.formation.as_ref().unwrap();
    assert_eq!(tactics[0].team_b.zone, Some(Zone::Defensive));
    assert_eq!(b0.formation_type, FormationType::DefenseBox);
    assert_eq!(b0.confidence, 0.85);
    assert_eq!(tactics[0].team_b.player_count, 4);

    // frame 1: neutral zone 1-3-1
    let a1 = tactics[1].team_a.formation.as_ref().unwrap();
    assert_eq!(tactics[1].team_a.zone, Some(Zone::Neutral));
    assert_eq!(a1.formation_type, FormationType::NeutralZone131);

    // frame 2: 2-1-2 forecheck against a defensive diamond
    let a2 = tactics[2].team_a.formation.as_ref().unwrap();
    assert_eq!(a2.formation_type, FormationType::Forecheck212);
    let b2 = tactics[2].team_b.formation.as_ref().unwrap();
    assert_eq!(b2.formation_type, FormationType::DefenseDiamond);
}

#[test]
fn fixture_game_summary() {
    let analyzer = FrameTacticsAnalyzer::default();
    let tactics = analyzer.analyze_game(&game_frames());
    let summary = get_formation_summary(&tactics);

    assert_eq!(summary.team_a.classified_frames(), 3);
    assert_eq!(summary.team_b.classified_frames(), 2);
    assert_eq!(summary.team_a.get(FormationType::Forecheck122).unwrap().count, 1);
    assert_eq!(summary.team_b.get(FormationType::DefenseBox).unwrap().count, 1);
    assert_eq!(summarize_parallel(&tactics), summary);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["team_b"]["Diamond Defense"]["zones"], serde_json::json!(["DZ"]));
}

#[test]
fn classification_is_idempotent() {
    let analyzer = FrameTacticsAnalyzer::default();
    for frame in game_frames() {
        let first = analyzer.analyze_frame_tactics(&frame);
        let second = analyzer.analyze_frame_tactics(&frame);
        assert_eq!(first, second);
    }
}

#[test]
fn explicit_blue_lines_shift_zones() {
    let dims = rink_tactics::RinkDimensions::with_zone_lines(85.0, 200.0, 10.0, 190.0).unwrap();
    let analyzer = FrameTacticsAnalyzer::new(RinkGeometry::new(dims), TeamFormationClassifier::default());
    let tactics = analyzer.analyze_frame_tactics(&game_frames()[0]);
    // team A mean y = 20 is now inside the neutral zone
    assert_eq!(tactics.team_a.zone, Some(Zone::Neutral));
}

#[test]
fn frame_tactics_serialize_with_nulls() {
    let analyzer = FrameTacticsAnalyzer::default();
    let frame = Frame::new(
        3,
        vec![
            PlayerSample::positioned(1, TeamSide::A, 0.0, 100.0),
            PlayerSample::unpositioned(2, TeamSide::B),
        ],
    );
    let json = serde_json::to_value(analyzer.analyze_frame_tactics(&frame)).unwrap();
    assert_eq!(json["frame_number"], 3);
    assert_eq!(json["team_a"]["zone"], "NZ");
    assert_eq!(json["team_a"]["formation"]["type"], "Unknown Formation");
    assert_eq!(json["team_a"]["formation"]["confidence"], 0.0);
    assert!(json["team_b"]["formation"].is_null());
    assert!(json["team_b"]["zone"].is_null());
    assert_eq!(json["team_b"]["player_count"], 0);
}
