pub mod curiosities;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod value;

pub use curiosities::load_curiosities;
pub use dataset::{load_statistics, load_wages, read_csv};
pub use error::LoadError;
pub use normalize::normalize_columns;
pub use value::{any_to_f64, any_to_i64, any_to_string, parse_f64};
