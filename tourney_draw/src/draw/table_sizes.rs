//! Table size planning for a single round.

use super::config::DrawConfig;

/// Plan the seat count of every table in a round.
///
/// Tables of `config.table_size` are preferred. A remainder is absorbed by
/// growing some tables by one seat; when there are too few tables to absorb
/// it, one more table is opened and the competitors are spread evenly, which
/// yields smaller tables (e.g. 7 competitors become `[4, 3]`). The table count
/// never exceeds `config.max_tables`; past that point tables grow instead.
///
/// Sizes are returned largest first and always sum to `active_count`.
///
/// # Examples
///
/// ```
/// use tourney_draw::draw::{DrawConfig, build_round_table_sizes};
///
/// let sizes = build_round_table_sizes(101, &DrawConfig::default());
/// assert_eq!(sizes.len(), 25);
/// assert_eq!(sizes.iter().sum::<usize>(), 101);
/// ```
pub fn build_round_table_sizes(active_count: usize, config: &DrawConfig) -> Vec<usize> {
    if active_count == 0 {
        return Vec::new();
    }

    let preferred = config.table_size.max(1);
    let full_tables = active_count / preferred;
    let remainder = active_count % preferred;

    let table_count = if remainder <= full_tables {
        full_tables
    } else {
        full_tables + 1
    };
    let table_count = table_count.clamp(1, config.max_tables.max(1));

    let base = active_count / table_count;
    let larger = active_count % table_count;

    (0..table_count)
        .map(|idx| if idx < larger { base + 1 } else { base })
        .collect()
}
