//! Tick derivation for the year and month axes. Pure functions of the
//! scales; no interaction, no retained state.

use crate::dataset::month_name;
use crate::scale::BandScale;

/// One tick: position along the axis (slot center) plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Ticks for every decade year (`year % 10 == 0`) in the domain. A domain
/// without any multiple of ten yields no ticks.
pub fn year_ticks(scale: &BandScale) -> Vec<Tick> {
    scale
        .domain()
        .filter(|year| year % 10 == 0)
        .filter_map(|year| {
            let position = scale.position(year)? + scale.bandwidth() / 2.0;
            Some(Tick {
                position,
                label: year.to_string(),
            })
        })
        .collect()
}

/// Ticks for all twelve months with English names.
pub fn month_ticks(scale: &BandScale) -> Vec<Tick> {
    scale
        .domain()
        .filter_map(|month| {
            let position = scale.position(month)? + scale.bandwidth() / 2.0;
            Some(Tick {
                position,
                label: month_name(month as u32).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn test_year_ticks_are_decades() {
        let scale = BandScale::new(1753, 2015, layout::PLOT_WIDTH);
        let ticks = year_ticks(&scale);
        assert_eq!(ticks.first().unwrap().label, "1760");
        assert_eq!(ticks.last().unwrap().label, "2010");
        // 1760, 1770, ..., 2010
        assert_eq!(ticks.len(), 26);
    }

    #[test]
    fn test_narrow_domain_has_no_year_ticks() {
        let scale = BandScale::new(2013, 2015, layout::PLOT_WIDTH);
        assert!(year_ticks(&scale).is_empty());
    }

    #[test]
    fn test_month_ticks() {
        let scale = BandScale::inverted(0, 11, layout::PLOT_HEIGHT);
        let ticks = month_ticks(&scale);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "January");
        assert_eq!(ticks[11].label, "December");
        // January renders below December.
        assert!(ticks[0].position > ticks[11].position);
    }
}
