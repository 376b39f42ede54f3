//! Positional and color scales derived from a dataset.
//!
//! Derivation is pure: the same dataset always yields the same `ScaleSet`,
//! and nothing is retained beyond the returned value.

use crate::color::{cool, Rgb};
use crate::dataset::{Dataset, MONTHS_PER_YEAR};
use crate::layout;

/// Discrete positional scale: each integer in an inclusive domain gets an
/// equal-width slot within a continuous range. Years absent from the data
/// still occupy a slot, so the domain has no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain_start: i32,
    count: u32,
    range: f64,
    inverted: bool,
}

impl BandScale {
    /// Band scale over `[domain_start, domain_end]` inclusive, slot 0 at
    /// range position 0.
    pub fn new(domain_start: i32, domain_end: i32, range: f64) -> BandScale {
        BandScale {
            domain_start,
            count: (domain_end - domain_start).max(0) as u32 + 1,
            range,
            inverted: false,
        }
    }

    /// Inverted variant: the lowest domain value takes the slot at the far
    /// end of the range (month 0 renders at the bottom of the plot).
    pub fn inverted(domain_start: i32, domain_end: i32, range: f64) -> BandScale {
        BandScale {
            inverted: true,
            ..BandScale::new(domain_start, domain_end, range)
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.range / self.count as f64
    }

    /// Slot origin for a domain value, or None outside the domain.
    pub fn position(&self, value: i32) -> Option<f64> {
        let index = value.wrapping_sub(self.domain_start);
        if index < 0 || index as u32 >= self.count {
            return None;
        }
        let slot = if self.inverted {
            self.count - 1 - index as u32
        } else {
            index as u32
        };
        Some(slot as f64 * self.bandwidth())
    }

    pub fn domain_start(&self) -> i32 {
        self.domain_start
    }

    pub fn domain_end(&self) -> i32 {
        self.domain_start + self.count as i32 - 1
    }

    /// Domain values in ascending order.
    pub fn domain(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.count).map(move |i| self.domain_start + i as i32)
    }
}

/// Continuous mapping from an inclusive numeric domain onto the cool ramp.
///
/// Out-of-domain inputs are a caller contract violation: scales are derived
/// from the same dataset they render. Debug builds assert; release builds
/// clamp to the nearest endpoint and log a warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    min: f64,
    max: f64,
}

impl SequentialScale {
    pub fn new(min: f64, max: f64) -> SequentialScale {
        SequentialScale { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn color(&self, value: f64) -> Rgb {
        debug_assert!(
            value >= self.min && value <= self.max,
            "value {} outside color domain [{}, {}]",
            value,
            self.min,
            self.max
        );
        if value < self.min || value > self.max {
            log::warn!(
                "clamping value {} to color domain [{}, {}]",
                value,
                self.min,
                self.max
            );
        }
        let span = self.max - self.min;
        // A single-valued domain maps everything to the ramp midpoint.
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.min) / span
        };
        cool(t)
    }

    /// `count` evenly spaced sample values spanning the domain, endpoints
    /// included, in ascending order. The last sample is pinned to the
    /// domain maximum so accumulated rounding never lands outside it.
    pub fn samples(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let last = count - 1;
                let step = (self.max - self.min) / last as f64;
                (0..count)
                    .map(|i| {
                        if i == last {
                            self.max
                        } else {
                            self.min + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

pub const LEGEND_SAMPLE_COUNT: usize = 5;

/// The four derived mappings every renderer consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet {
    pub year: BandScale,
    pub month: BandScale,
    pub color: SequentialScale,
    /// Legend sample values paired with their mapped colors, ascending.
    pub legend_samples: Vec<(f64, Rgb)>,
}

impl ScaleSet {
    /// Derive all scales from a dataset. None when there are no records;
    /// renderers treat that as "nothing to draw".
    pub fn derive(dataset: &Dataset) -> Option<ScaleSet> {
        let (min_year, max_year) = dataset.year_extent()?;
        let (min_variance, max_variance) = dataset.variance_extent()?;
        let year = BandScale::new(min_year, max_year, layout::PLOT_WIDTH);
        let month = BandScale::inverted(0, MONTHS_PER_YEAR as i32 - 1, layout::PLOT_HEIGHT);
        let color = SequentialScale::new(
            dataset.base_temperature + min_variance,
            dataset.base_temperature + max_variance,
        );
        let legend_samples = color
            .samples(LEGEND_SAMPLE_COUNT)
            .into_iter()
            .map(|value| (value, color.color(value)))
            .collect();
        Some(ScaleSet {
            year,
            month,
            color,
            legend_samples,
        })
    }
}
