//! The "cool" sequential color ramp: a long-path cubehelix interpolation
//! matching d3's `interpolateCool`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A point in cubehelix space: hue in degrees, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubehelix {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// Cubehelix basis coefficients (Green 2011, as used by d3-color).
const A: f64 = -0.14861;
const B: f64 = 1.78277;
const C: f64 = -0.29227;
const D: f64 = -0.90649;
const E: f64 = 1.97294;

impl Cubehelix {
    pub fn to_rgb(&self) -> Rgb {
        let h = (self.h + 120.0).to_radians();
        let l = self.l;
        let a = self.s * l * (1.0 - l);
        let (sin_h, cos_h) = h.sin_cos();
        Rgb {
            r: channel(l + a * (A * cos_h + B * sin_h)),
            g: channel(l + a * (C * cos_h + D * sin_h)),
            b: channel(l + a * (E * cos_h)),
        }
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Ramp endpoints for `interpolateCool`.
pub const COOL_START: Cubehelix = Cubehelix {
    h: 260.0,
    s: 0.75,
    l: 0.35,
};
pub const COOL_END: Cubehelix = Cubehelix {
    h: 80.0,
    s: 1.50,
    l: 0.80,
};

/// Sample the cool ramp at `t`. Inputs outside [0, 1] are clamped.
pub fn cool(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Cubehelix {
        h: COOL_START.h + t * (COOL_END.h - COOL_START.h),
        s: COOL_START.s + t * (COOL_END.s - COOL_START.s),
        l: COOL_START.l + t * (COOL_END.l - COOL_START.l),
    }
    .to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cool_endpoints_match_d3() {
        // d3.interpolateCool(0) and (1)
        assert_eq!(cool(0.0), Rgb { r: 110, g: 64, b: 170 });
        assert_eq!(cool(1.0), Rgb { r: 175, g: 240, b: 91 });
    }

    #[test]
    fn test_cool_midpoint_matches_d3() {
        // d3.interpolateCool(0.5) === "rgb(26, 199, 194)"
        assert_eq!(cool(0.5), Rgb { r: 26, g: 199, b: 194 });
    }

    #[test]
    fn test_out_of_range_t_clamps() {
        assert_eq!(cool(-0.5), cool(0.0));
        assert_eq!(cool(1.5), cool(1.0));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(cool(0.0).to_hex(), "#6e40aa");
        assert_eq!(cool(1.0).to_hex(), "#aff05b");
    }
}
