pub mod error;
pub mod format;
pub mod growth;
pub mod lookup;
pub mod population;
pub mod series;
pub mod tables;
pub mod wage_gap;

pub use error::PipelineError;
pub use format::{
    SENTINEL, decimal_label, growth_label, millions_label, percent_label, yes_no_label,
};
pub use growth::{GROWTH_END_YEAR, GROWTH_START_YEAR, GrowthEntry, employment_growth};
pub use lookup::{StatSnapshot, law_index_average, snapshot};
pub use population::{ENTERPRISE_REFERENCE_YEAR, PopulationEntry, population_by_country};
pub use series::{EducationSeries, SERIES_END_YEAR, SERIES_START_YEAR, education_series};
pub use tables::{DashboardData, StatisticsTable, WageTable};
pub use wage_gap::{GapConnector, GenderWageSeries, WageGapSeries, WagePoint, wage_gap};
