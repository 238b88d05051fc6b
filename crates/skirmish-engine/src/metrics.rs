//! Per-tick scheduling metrics.
//!
//! [`UpdateMetrics`] captures what one `on_update` call did, enabling
//! telemetry and budget tuning. The battlefield populates a fresh value
//! each tick; consumers read the most recent one.

/// Counters collected during a single `on_update` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Queued unit moves processed this tick.
    pub moves_processed: u32,
    /// Bubble overlaps added across all cells this tick.
    pub bubbles_added: u32,
    /// Bubble overlaps withdrawn across all cells this tick.
    pub bubbles_removed: u32,
    /// Cells whose tracker was created this tick.
    pub cells_activated: u32,
    /// Trackers destroyed by the cleanup pass this tick.
    pub cells_cleaned: u32,
    /// Elements promoted (deaggregated or shown) this tick.
    pub promotions: u32,
    /// Elements demoted (re-aggregated or hidden) this tick.
    pub demotions: u32,
    /// Active cells remaining after the cleanup pass.
    pub active_cells: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = UpdateMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.moves_processed, 0);
        assert_eq!(m.bubbles_added, 0);
        assert_eq!(m.bubbles_removed, 0);
        assert_eq!(m.cells_activated, 0);
        assert_eq!(m.cells_cleaned, 0);
        assert_eq!(m.promotions, 0);
        assert_eq!(m.demotions, 0);
        assert_eq!(m.active_cells, 0);
    }
}
