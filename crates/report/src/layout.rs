//! Strike-zone display layout.
//!
//! Nine in-zone cells form the middle 3x3 block. The chase zones sit in the
//! corners of the rows above and below it, with blank cells between them.

use otr_swing_model::{ZoneGrid, ZoneId};

/// Zone ids by display row, top to bottom. `None` is a blank cell.
pub const ZONE_LAYOUT: [[Option<u8>; 3]; 5] = [
    [Some(10), None, Some(11)],
    [Some(1), Some(2), Some(3)],
    [Some(4), Some(5), Some(6)],
    [Some(7), Some(8), Some(9)],
    [Some(12), None, Some(13)],
];

/// Color intensity of a cell in `[0.0, 1.0]`.
///
/// Empty zones are 0. Any visited zone starts at 0.2 so a single swing is
/// still visible, scaling to 1.0 for the busiest zone.
pub fn intensity(count: u32, max_count: u32) -> f64 {
    if count == 0 || max_count == 0 {
        return 0.0;
    }
    0.2 + 0.8 * (count as f64 / max_count as f64)
}

/// One drawable zone cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneCell {
    pub zone: ZoneId,
    pub count: u32,
    pub intensity: f64,
}

/// The grid laid out for display.
pub fn zone_rows(grid: &ZoneGrid) -> Vec<[Option<ZoneCell>; 3]> {
    ZONE_LAYOUT
        .iter()
        .map(|&row| {
            row.map(|id| {
                let zone = ZoneId::new(id?)?;
                let count = grid.count(zone);
                Some(ZoneCell {
                    zone,
                    count,
                    intensity: intensity(count, grid.max_count),
                })
            })
        })
        .collect()
}
