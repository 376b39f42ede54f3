//! Cell materialization: one positioned, colored rectangle per record.

use crate::color::Rgb;
use crate::dataset::{Dataset, VarianceRecord};
use crate::scale::ScaleSet;

/// Stable identity for a cell. Pointer handlers carry only this key (plus
/// the surface generation) and resolve everything else at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub year: i32,
    pub month: u32,
}

/// One drawn cell. Regenerated on every render pass, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub key: CellKey,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub absolute_temperature: f64,
    pub record: VarianceRecord,
}

/// Build one cell per record. Input order is preserved, so a duplicate
/// (year, month) paints over the earlier one.
pub fn build_cells(dataset: &Dataset, scales: &ScaleSet) -> Vec<CellView> {
    dataset
        .records
        .iter()
        .filter_map(|record| {
            let x = scales.year.position(record.year)?;
            let y = scales.month.position(record.month as i32)?;
            let absolute_temperature = record.absolute_temperature(dataset.base_temperature);
            Some(CellView {
                key: CellKey {
                    year: record.year,
                    month: record.month,
                },
                x,
                y,
                width: scales.year.bandwidth(),
                height: scales.month.bandwidth(),
                color: scales.color.color(absolute_temperature),
                absolute_temperature,
                record: *record,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::VarianceRecord;
    use crate::layout;
    use crate::scale::ScaleSet;

    fn dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            records: vec![
                VarianceRecord {
                    year: 1753,
                    month: 0,
                    variance: -1.366,
                },
                VarianceRecord {
                    year: 2015,
                    month: 11,
                    variance: 2.322,
                },
            ],
        }
    }

    #[test]
    fn test_one_cell_per_record() {
        let dataset = dataset();
        let scales = ScaleSet::derive(&dataset).unwrap();
        let cells = build_cells(&dataset, &scales);
        assert_eq!(cells.len(), 2);

        let first = &cells[0];
        assert_eq!(first.key, CellKey { year: 1753, month: 0 });
        assert_eq!(first.x, 0.0);
        // January sits at the bottom band of the plot.
        assert!((first.y - (layout::PLOT_HEIGHT - scales.month.bandwidth())).abs() < 1e-9);
        assert!((first.width - scales.year.bandwidth()).abs() < 1e-9);
        assert!((first.height - scales.month.bandwidth()).abs() < 1e-9);
        assert!((first.absolute_temperature - 7.294).abs() < 1e-9);
        // Domain minimum maps to the ramp start.
        assert_eq!(first.color.to_hex(), "#6e40aa");

        let last = &cells[1];
        assert_eq!(last.y, 0.0);
        assert_eq!(last.color.to_hex(), "#aff05b");
    }

    #[test]
    fn test_cell_colors_cover_domain() {
        let dataset = dataset();
        let scales = ScaleSet::derive(&dataset).unwrap();
        for cell in build_cells(&dataset, &scales) {
            // u8 channels are always defined; check the mapping agrees with
            // the scale for the cell's own temperature.
            assert_eq!(cell.color, scales.color.color(cell.absolute_temperature));
        }
    }
}
