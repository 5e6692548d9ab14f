//! Column normalization: long source indicator labels to short display
//! labels.

use polars::prelude::DataFrame;

use gea_model::columns::RENAME_MAP;

/// Applies the fixed rename map to a table.
///
/// Mapped columns that are absent are skipped and unmapped columns pass
/// through unchanged, so the pass is idempotent: applying it to an
/// already-normalized table is a no-op. Every consumer reads the table
/// through the display labels, so this runs exactly once, inside the
/// loader.
pub fn normalize_columns(mut df: DataFrame) -> DataFrame {
    for (source, display) in RENAME_MAP {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        if names.iter().any(|n| n == source) && !names.iter().any(|n| n == display) {
            // Cannot fail: the source column exists and the display name is free.
            let _ = df.rename(source, (*display).into());
        }
    }
    df
}
