//! Strike-zone heatmap counts.
//!
//! Pure aggregation: each swing in the subset is counted in its strike
//! zone. Where the zones sit on screen is the renderer's business.

use otr_swing_model::{SwingRecord, ZoneGrid, ZoneId};

/// Builds a [`ZoneGrid`] from a filtered swing subset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneHeatmapBuilder;

impl ZoneHeatmapBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Count swings per zone. Swings without a zone are skipped.
    pub fn build<'a>(&self, swings: impl IntoIterator<Item = &'a SwingRecord>) -> ZoneGrid {
        let mut counts = [0u32; ZoneId::MAX as usize];
        let mut unzoned = 0usize;

        for swing in swings {
            let Some(zone) = swing.strike_zone else {
                unzoned += 1;
                continue;
            };
            counts[(zone.get() - ZoneId::MIN) as usize] += 1;
        }

        if unzoned > 0 {
            tracing::debug!(unzoned, "Swings without a strike zone left out of heatmap");
        }

        ZoneGrid::from_counts(ZoneId::all().zip(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_zone(id: u8) -> SwingRecord {
        SwingRecord::batted_ball(Some(95.0), Some(15.0), Some(320.0), ZoneId::new(id))
    }

    #[test]
    fn heatmap_tracks_hot_zone() {
        let swings = vec![in_zone(5), in_zone(5), in_zone(5), in_zone(11), in_zone(1)];
        let grid = ZoneHeatmapBuilder::new().build(&swings);

        let middle = ZoneId::new(5).unwrap();
        assert_eq!(grid.count(middle), 3);
        assert_eq!(grid.max_count, 3);
        assert_eq!(grid.normalized(middle), 1.0);
        assert_eq!(grid.count(ZoneId::new(11).unwrap()), 1);
    }

    #[test]
    fn unvisited_zones_report_zero() {
        let grid = ZoneHeatmapBuilder::new().build(&[in_zone(7)]);
        assert_eq!(grid.counts.len(), 13);
        for zone in ZoneId::all().filter(|z| z.get() != 7) {
            assert_eq!(grid.counts.get(&zone), Some(&0));
        }
    }

    #[test]
    fn heatmap_empty_subset_is_zeroed() {
        let grid = ZoneHeatmapBuilder::new().build(std::iter::empty());
        assert_eq!(grid.max_count, 0);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn swings_without_zone_are_not_counted() {
        let swings = vec![
            in_zone(2),
            SwingRecord::batted_ball(Some(99.0), Some(20.0), Some(350.0), None),
        ];
        let grid = ZoneHeatmapBuilder::new().build(&swings);
        assert_eq!(grid.total(), 1);
    }

    proptest! {
        #[test]
        fn zone_counts_sum_to_zoned_swings(zones in prop::collection::vec(prop::option::of(1u8..=13), 0..80)) {
            let swings: Vec<SwingRecord> = zones
                .iter()
                .map(|z| SwingRecord::batted_ball(Some(90.0), None, None, z.and_then(ZoneId::new)))
                .collect();
            let grid = ZoneHeatmapBuilder::new().build(&swings);

            let zoned = zones.iter().filter(|z| z.is_some()).count() as u32;
            prop_assert_eq!(grid.total(), zoned);
            prop_assert_eq!(grid.counts.len(), 13);
            prop_assert!(grid.counts.values().all(|c| *c <= grid.max_count));
        }
    }
}
