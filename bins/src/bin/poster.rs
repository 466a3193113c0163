// SPDX-License-Identifier: MIT

//!
//! *Part of the wider GPX Poster project*
//!
//! Draw a poster of tracks as an SVG
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use gpx_poster_core::{Track, Units, YearRange};
use gpx_poster_renderer::{CalendarDrawer, Colour, ConfigError, Poster, PosterConfig};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for drawing a poster
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("gpx_poster")
        .add_filter_allow_str("poster")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    match draw_poster(&args) {
        Ok(()) => println!("Wrote poster to {}", args.output.display()),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

/// Load the config & tracks, then draw and save the poster
fn draw_poster(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.poster_config()?;
    let mut poster = Poster::new(config)?;

    let tracks = load_tracks(&args.tracks)?;
    info!("Loaded {} tracks", tracks.len());
    poster.set_tracks(tracks);

    let drawer = CalendarDrawer::new(&poster);
    poster.save_svg(&drawer, &args.output)?;
    Ok(())
}

/// Load tracks from a JSON array of `{"start_time": ..., "length": ...}`
fn load_tracks(path: &Path) -> Result<Vec<Track>, Box<dyn std::error::Error>> {
    info!("Loading tracks from {}", path.display());
    let data = fs::read_to_string(path)?;
    let tracks = serde_json::from_str(&data)?;
    Ok(tracks)
}

/// GPX Poster CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Draw a poster of your tracks",
    after_help = "Options given on the command line override those in the config file"
)]
pub struct Cli {
    /// Path to the JSON file of tracks
    pub tracks: PathBuf,

    /// Where to write the SVG poster
    #[arg(long, default_value = "poster.svg")]
    pub output: PathBuf,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Poster title
    #[arg(long)]
    pub title: Option<String>,

    /// Athlete name shown in the footer
    #[arg(long)]
    pub athlete: Option<String>,

    /// Years to draw tracks for (`all`, `2016`, or `2016-2018`)
    #[arg(long)]
    pub year: Option<YearRange>,

    /// Unit system for the statistics
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Poster width (mm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Poster height (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Background colour (e.g. `#222222`)
    #[arg(long)]
    pub background_colour: Option<Colour>,

    /// Text colour (e.g. `#ffffff`)
    #[arg(long)]
    pub text_colour: Option<Colour>,

    /// Colour of notable tracks (e.g. `#ffff00`)
    #[arg(long)]
    pub special_colour: Option<Colour>,

    /// Track colour (e.g. `#4dd2ff`)
    #[arg(long)]
    pub track_colour: Option<Colour>,

    /// Log what's going on
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// The config file (or default config) with command line overrides
    fn poster_config(&self) -> Result<PosterConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PosterConfig::load(path)?,
            None => PosterConfig::default(),
        };
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(athlete) = &self.athlete {
            config.athlete = Some(athlete.clone());
        }
        if let Some(year) = &self.year {
            config.year = Some(year.to_string());
        }
        if let Some(units) = &self.units {
            config.units = units.into();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        let colours = &mut config.colours;
        let overrides = [
            (&mut colours.background, self.background_colour),
            (&mut colours.text, self.text_colour),
            (&mut colours.special, self.special_colour),
            (&mut colours.track, self.track_colour),
        ];
        for (colour, colour_override) in overrides {
            if let Some(colour_override) = colour_override {
                *colour = colour_override;
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<&UnitsArg> for Units {
    fn from(value: &UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

impl ValueEnum for UnitsArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Metric, Self::Imperial]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            UnitsArg::Metric => Some(PossibleValue::new("metric").help("Kilometers")),
            UnitsArg::Imperial => Some(PossibleValue::new("imperial").help("Miles")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides() {
        let args = Cli::parse_from([
            "poster",
            "tracks.json",
            "--title",
            "Rides",
            "--year",
            "2016-2018",
            "--units",
            "imperial",
            "--width",
            "250",
            "--track-colour",
            "#ff0000",
        ]);
        let config = args.poster_config().unwrap();
        assert_eq!(config.title, "Rides");
        assert_eq!(config.year.as_deref(), Some("2016-2018"));
        assert_eq!(config.units, Units::Imperial);
        assert_eq!(config.width, 250.0);
        assert_eq!(config.height, 300.0);
        assert_eq!(config.colours.track, Colour::from_rgb(0xff, 0, 0));
        assert_eq!(args.output, PathBuf::from("poster.svg"));
    }

    #[test]
    fn rejects_bad_values() {
        for bad in [
            ["poster", "tracks.json", "--year", "2018-2016"],
            ["poster", "tracks.json", "--units", "furlongs"],
            ["poster", "tracks.json", "--text-colour", "white"],
        ] {
            assert!(Cli::try_parse_from(bad).is_err());
        }
    }
}
