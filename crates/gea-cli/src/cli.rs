//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use gea_model::{DEFAULT_COUNTRY, EducationLevel, Gender, RankingMode};

#[derive(Debug, Parser)]
#[command(
    name = "gea",
    version,
    about = "Gender-equality analytics: render dashboard chart specifications"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(flatten)]
    pub color: Color,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every chart specification to JSON files.
    Render(RenderArgs),
    /// Print the country feature panel and curiosity text.
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory for the figure JSON files.
    #[arg(long, default_value = "out")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// The dashboard controls, as flags.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Assets directory holding the data files.
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Primary country.
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Optional comparison country for the education chart.
    #[arg(long)]
    pub secondary: Option<String>,

    /// Year; defaults to the newest year in the data and is clamped to
    /// the data's range.
    #[arg(long)]
    pub year: Option<i32>,

    /// Education level for the education chart.
    #[arg(long, default_value = "advanced")]
    pub education: EducationLevel,

    /// Gender checklist entries; repeat the flag to select both.
    #[arg(long = "gender", default_values_t = [Gender::Female])]
    pub genders: Vec<Gender>,

    /// Which end of the growth ranking to show.
    #[arg(long, default_value = "top")]
    pub mode: RankingMode,

    /// Country hovered on the map.
    #[arg(long)]
    pub hover: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
