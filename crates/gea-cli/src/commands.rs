//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use gea_charts::{
    country_table, curiosity_panel, education_chart, growth_bar_chart, law_index_gauge,
    management_donut, parliament_donut, participation_badge, population_map, wage_gap_chart,
};
use gea_core::{
    DashboardData, ENTERPRISE_REFERENCE_YEAR, SENTINEL, StatisticsTable, decimal_label,
    education_series, employment_growth, law_index_average, millions_label, population_by_country,
    snapshot, wage_gap, yes_no_label,
};
use gea_model::Selection;

use crate::cli::{RenderArgs, SelectionArgs, SummaryArgs};

/// What `render` wrote, for the terminal summary.
pub struct RenderSummary {
    pub out_dir: PathBuf,
    pub files: Vec<String>,
    pub country: String,
    pub year: i32,
}

/// The feature panel `summary` prints.
pub struct CountryPanel {
    pub country: String,
    pub year: i32,
    pub rows: Vec<(String, String)>,
    pub curiosity: String,
}

/// Builds a selection from the flags, clamping the year to the data's
/// range as the slider would.
fn build_selection(args: &SelectionArgs, statistics: &StatisticsTable) -> Result<Selection> {
    let (min_year, max_year) = statistics.year_range()?;
    let year = args.year.unwrap_or(max_year).clamp(min_year, max_year);
    let mut selection = Selection::new(year)
        .with_country(args.country.as_str())
        .with_education(args.education)
        .with_genders(args.genders.clone())
        .with_ranking(args.mode);
    if let Some(secondary) = &args.secondary {
        selection = selection.with_secondary_country(secondary.as_str());
    }
    if let Some(hover) = &args.hover {
        selection = selection.with_hovered_country(hover.as_str());
    }
    Ok(selection)
}

pub fn run_render(args: &RenderArgs) -> Result<RenderSummary> {
    let data = DashboardData::load(&args.selection.assets).context("load dashboard assets")?;
    let selection = build_selection(&args.selection, &data.statistics)?;
    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory {}", args.out.display()))?;

    let mut files = Vec::new();

    // Overview panels keyed on (primary country, year).
    let overview = snapshot(&data.statistics, &selection.country, selection.year).ok();
    let average = law_index_average(&data.statistics, selection.year)?;
    write_spec(
        &args.out,
        "participation_badge",
        &participation_badge(overview.as_ref()),
        &mut files,
    )?;
    write_spec(
        &args.out,
        "law_index_gauge",
        &law_index_gauge(overview.as_ref(), average),
        &mut files,
    )?;
    write_spec(
        &args.out,
        "management_donut",
        &management_donut(overview.as_ref()),
        &mut files,
    )?;
    write_spec(
        &args.out,
        "parliament_donut",
        &parliament_donut(overview.as_ref()),
        &mut files,
    )?;

    let ranked = employment_growth(&data.statistics, selection.ranking)?;
    write_spec(&args.out, "growth_chart", &growth_bar_chart(&ranked), &mut files)?;

    let education = education_series(&data.statistics, &selection)?;
    write_spec(
        &args.out,
        "education_chart",
        &education_chart(&education),
        &mut files,
    )?;

    let wages = wage_gap(&data.wages, &selection.country)?;
    write_spec(&args.out, "wage_gap_chart", &wage_gap_chart(&wages), &mut files)?;

    // Enterprise page, pinned to its reference year.
    let population = population_by_country(&data.statistics, ENTERPRISE_REFERENCE_YEAR)?;
    write_spec(&args.out, "population_map", &population_map(&population), &mut files)?;

    let hovered = selection.hovered_or_default().to_string();
    let hovered_snapshot = snapshot(&data.statistics, &hovered, ENTERPRISE_REFERENCE_YEAR).ok();
    write_spec(
        &args.out,
        "country_table",
        &country_table(&hovered, ENTERPRISE_REFERENCE_YEAR, hovered_snapshot.as_ref()),
        &mut files,
    )?;
    write_spec(
        &args.out,
        "curiosity_panel",
        &curiosity_panel(&hovered, data.curiosity(&hovered)),
        &mut files,
    )?;

    info!(
        figures = files.len(),
        out = %args.out.display(),
        "rendered chart specifications"
    );
    Ok(RenderSummary {
        out_dir: args.out.clone(),
        files,
        country: selection.country,
        year: selection.year,
    })
}

pub fn run_summary(args: &SummaryArgs) -> Result<CountryPanel> {
    let data = DashboardData::load(&args.selection.assets).context("load dashboard assets")?;
    let selection = build_selection(&args.selection, &data.statistics)?;

    let country = selection.hovered_or_default().to_string();
    let snap = snapshot(&data.statistics, &country, ENTERPRISE_REFERENCE_YEAR).ok();
    let rows = vec![
        (
            "Total Population (M)".to_string(),
            millions_label(snap.as_ref().and_then(|s| s.total_population)),
        ),
        (
            "Female Business Owners (%)".to_string(),
            decimal_label(snap.as_ref().and_then(|s| s.business_owners)),
        ),
        (
            "Female directors (%)".to_string(),
            decimal_label(snap.as_ref().and_then(|s| s.directors)),
        ),
        (
            "Female Sole Proprietors (%)".to_string(),
            decimal_label(snap.as_ref().and_then(|s| s.sole_proprietors)),
        ),
        (
            "Law mandates wages equality".to_string(),
            yes_no_label(snap.as_ref().and_then(|s| s.law_mandates_equal_pay)),
        ),
    ];
    let curiosity = data.curiosity(&country).unwrap_or(SENTINEL).to_string();
    Ok(CountryPanel {
        country,
        year: ENTERPRISE_REFERENCE_YEAR,
        rows,
        curiosity,
    })
}

fn write_spec<T: Serialize>(
    dir: &Path,
    name: &str,
    spec: &T,
    files: &mut Vec<String>,
) -> Result<()> {
    let file_name = format!("{name}.json");
    let path = dir.join(&file_name);
    let json =
        serde_json::to_string_pretty(spec).with_context(|| format!("serialize {name}"))?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    files.push(file_name);
    Ok(())
}
