//! The dashboard palette and typography constants.

use gea_model::Gender;

/// Payne's Gray, the primary text and accent color.
pub const PAYNES_GRAY: &str = "#555B6E";
/// Apricot, the male series color.
pub const APRICOT: &str = "#FFD6BA";
/// Mint Green, the female series color.
pub const MINT_GREEN: &str = "#BEE3DB";
/// Cambridge Blue, secondary accent.
pub const CAMBRIDGE_BLUE: &str = "#89B0AE";
/// Seasalt, the chart paper background.
pub const SEASALT: &str = "#FAF9F9";
/// Light gray used by the side panels and table cells.
pub const PANEL_GRAY: &str = "#f3f1f1";

/// Two-stop scale for the population choropleth.
pub const MAP_SCALE_LOW: &str = "#b3efe2";
pub const MAP_SCALE_HIGH: &str = "#1f7a67";

pub const FONT_FAMILY: &str = "Roboto";
pub const BASE_FONT_SIZE: u32 = 15;

/// Line color of a gender series on the education chart.
pub fn gender_color(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => MINT_GREEN,
        Gender::Male => APRICOT,
    }
}

/// Marker colors of the wage chart's gender traces, by emission order.
pub const WAGE_SERIES_COLORS: [&str; 2] = [APRICOT, MINT_GREEN];
