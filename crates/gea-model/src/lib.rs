pub mod columns;
pub mod enums;
pub mod selection;

pub use columns::{
    EXPECTED_STATISTICS_COLUMNS, EXPECTED_WAGE_COLUMNS, RENAME_MAP, education_column,
};
pub use enums::{EducationLevel, Gender, RankingMode};
pub use selection::{DEFAULT_COUNTRY, Selection};
