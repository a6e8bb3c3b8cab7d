//! Rink Tactics CLI
//!
//! Tracking frames JSON → per-frame formations / game formation summary.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rink_tactics::{
    get_formation_summary, summarize_parallel, ClassifierConfig, Frame, FrameTactics,
    FrameTacticsAnalyzer, RinkDimensions, RinkGeometry,
};

#[derive(Parser)]
#[command(name = "rink_cli")]
#[command(about = "Detect hockey formations in tracked frames", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every frame and print the per-frame results
    Frames(AnalyzeArgs),

    /// Summarize formation usage per team over the whole input
    Summary(AnalyzeArgs),

    /// Print the default classifier config as YAML
    Config,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Input JSON file with an array of frames
    #[arg(long)]
    r#in: PathBuf,

    /// Rink coordinates JSON ({"width", "height", "blue_lines"})
    #[arg(long)]
    rink: Option<PathBuf>,

    /// Classifier config YAML (defaults to $RINK_TACTICS_CONFIG or built-in)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analyze frames on all cores
    #[arg(long, default_value = "false")]
    parallel: bool,

    /// Write JSON here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Frames(args) => {
            let tactics = run_analysis(&args)?;
            emit(&serde_json::to_string_pretty(&tactics)?, args.out.as_deref())?;
        }
        Commands::Summary(args) => {
            let tactics = run_analysis(&args)?;
            let summary = if args.parallel {
                summarize_parallel(&tactics)
            } else {
                get_formation_summary(&tactics)
            };
            emit(&serde_json::to_string_pretty(&summary)?, args.out.as_deref())?;
        }
        Commands::Config => {
            print!("{}", ClassifierConfig::default().to_yaml()?);
        }
    }

    Ok(())
}

fn run_analysis(args: &AnalyzeArgs) -> Result<Vec<FrameTactics>> {
    let frames = load_frames(&args.r#in)?;
    let analyzer = build_analyzer(args.rink.as_deref(), args.config.as_deref())?;

    info!(frames = frames.len(), input = %args.r#in.display(), "analyzing frames");
    let tactics = if args.parallel {
        analyzer.analyze_game_parallel(&frames)
    } else {
        analyzer.analyze_game(&frames)
    };
    Ok(tactics)
}

fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frames file: {}", path.display()))?;
    Frame::parse_many(&raw).with_context(|| format!("Failed to parse frames JSON: {}", path.display()))
}

fn build_analyzer(rink: Option<&Path>, config: Option<&Path>) -> Result<FrameTacticsAnalyzer> {
    let dimensions = match rink {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read rink file: {}", path.display()))?;
            serde_json::from_str::<RinkDimensions>(&raw)
                .with_context(|| format!("Invalid rink coordinates: {}", path.display()))?
        }
        None => RinkDimensions::default(),
    };

    let config = match config {
        Some(path) => ClassifierConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load classifier config: {}", path.display()))?,
        None => ClassifierConfig::from_env_or_default(),
    };

    Ok(FrameTacticsAnalyzer::with_config(RinkGeometry::new(dimensions), &config))
}

fn emit(json: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(output = %path.display(), "wrote results");
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rink_tactics::Zone;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_frames_reports_path_on_error() {
        let file = write_temp("not json");
        let err = load_frames(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse frames JSON"));
    }

    #[test]
    fn test_build_analyzer_with_rink_file() {
        let rink = write_temp(r#"{"height": 100, "blue_lines": [70, 30]}"#);
        let analyzer = build_analyzer(Some(rink.path()), None).unwrap();
        assert_eq!(analyzer.geometry().zone_lines(), (30.0, 70.0));
        assert_eq!(analyzer.geometry().determine_zone(80.0), Zone::Defensive);
    }

    #[test]
    fn test_build_analyzer_rejects_bad_rink() {
        let rink = write_temp(r#"{"height": 100, "blue_lines": [30, 170]}"#);
        assert!(build_analyzer(Some(rink.path()), None).is_err());
    }

    #[test]
    fn test_build_analyzer_with_config_file() {
        let mut config = ClassifierConfig::default();
        config.min_players = 5;
        let file = write_temp(&config.to_yaml().unwrap());
        let analyzer = build_analyzer(None, Some(file.path())).unwrap();
        assert_eq!(analyzer.classifier().min_players(), 5);
    }

    #[test]
    fn test_run_analysis_end_to_end() {
        let frames = write_temp(
            r#"[{"frame_number": 4, "players": [
                {"id": 1, "team": "A", "rink_position": [0.0, 100.0]},
                {"id": 2, "team": "A", "rink_position": [20.0, 100.0]},
                {"id": 3, "team": "A", "rink_position": [-20.0, 100.0]}
            ]}]"#,
        );
        let args = AnalyzeArgs {
            r#in: frames.path().to_path_buf(),
            rink: None,
            config: None,
            parallel: true,
            out: None,
        };
        let tactics = run_analysis(&args).unwrap();
        assert_eq!(tactics.len(), 1);
        assert_eq!(tactics[0].frame_number, 4);
        assert_eq!(tactics[0].team_a.zone, Some(Zone::Neutral));
        assert!(tactics[0].team_b.formation.is_none());
    }
}
