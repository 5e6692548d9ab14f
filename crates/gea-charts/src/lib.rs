pub mod education;
pub mod figure;
pub mod gauge;
pub mod growth;
pub mod leadership;
pub mod map;
pub mod participation;
pub mod table;
pub mod theme;
pub mod wage_gap;

pub use education::education_chart;
pub use figure::{Figure, Layout, Trace};
pub use gauge::law_index_gauge;
pub use growth::growth_bar_chart;
pub use leadership::{management_donut, parliament_donut};
pub use map::population_map;
pub use participation::{ParticipationBadge, participation_badge};
pub use table::{CuriosityPanel, country_table, curiosity_panel};
pub use wage_gap::wage_gap_chart;
