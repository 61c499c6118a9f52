use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Sequential colour scales
// ---------------------------------------------------------------------------

/// Continuous sequential scales (ColorBrewer stops, light → dark).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    #[default]
    Reds,
    Blues,
    Greens,
}

const REDS: [[u8; 3]; 9] = [
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];

const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];

const GREENS: [[u8; 3]; 9] = [
    [247, 252, 245],
    [229, 245, 224],
    [199, 233, 192],
    [161, 217, 155],
    [116, 196, 118],
    [65, 171, 93],
    [35, 139, 69],
    [0, 109, 44],
    [0, 68, 27],
];

impl ColorScale {
    fn stops(self) -> &'static [[u8; 3]; 9] {
        match self {
            ColorScale::Reds => &REDS,
            ColorScale::Blues => &BLUES,
            ColorScale::Greens => &GREENS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScale::Reds => "reds",
            ColorScale::Blues => "blues",
            ColorScale::Greens => "greens",
        }
    }

    /// Colour at position `t` in `[0, 1]`; values outside are clamped.
    /// Neighbouring stops are blended in linear RGB.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let frac = (scaled - lower as f64) as f32;
        if lower >= stops.len() - 1 || frac == 0.0 {
            let [r, g, b] = stops[lower.min(stops.len() - 1)];
            return Color32::from_rgb(r, g, b);
        }

        let a = to_linear(stops[lower]);
        let b = to_linear(stops[lower + 1]);
        let mixed: Srgb<u8> = Srgb::from_linear(a.mix(b, frac));
        Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
    }
}

fn to_linear([r, g, b]: [u8; 3]) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

// ---------------------------------------------------------------------------
// Value → colour over a data range
// ---------------------------------------------------------------------------

/// Maps numeric values in `[min, max]` onto a [`ColorScale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousColorMap {
    pub scale: ColorScale,
    pub min: f64,
    pub max: f64,
}

impl ContinuousColorMap {
    pub fn new(scale: ColorScale, min: f64, max: f64) -> Self {
        Self { scale, min, max }
    }

    /// Look up the colour for a value.  A degenerate range maps to the
    /// middle of the scale.
    pub fn color_for(&self, value: f64) -> Color32 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return self.scale.sample(0.5);
        }
        self.scale.sample((value - self.min) / span)
    }

    /// `n` evenly spaced (value, colour) pairs for a legend strip.
    pub fn legend_stops(&self, n: usize) -> Vec<(f64, Color32)> {
        if n < 2 {
            return vec![(self.min, self.color_for(self.min))];
        }
        (0..n)
            .map(|i| {
                let v = self.min + (self.max - self.min) * i as f64 / (n - 1) as f64;
                (v, self.color_for(v))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: Color32) -> [u8; 3] {
        [c.r(), c.g(), c.b()]
    }

    #[test]
    fn endpoints_match_first_and_last_stops() {
        for scale in [ColorScale::Reds, ColorScale::Blues, ColorScale::Greens] {
            let stops = scale.stops();
            assert_eq!(rgb(scale.sample(0.0)), stops[0], "{}", scale.name());
            assert_eq!(rgb(scale.sample(1.0)), stops[8], "{}", scale.name());
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        let s = ColorScale::Reds;
        assert_eq!(s.sample(-3.0), s.sample(0.0));
        assert_eq!(s.sample(7.0), s.sample(1.0));
        assert_eq!(s.sample(f64::NAN), s.sample(0.0));
    }

    #[test]
    fn reds_darken_as_value_grows() {
        let map = ContinuousColorMap::new(ColorScale::Reds, 8.0, 20.0);
        let greens: Vec<u8> = [8.0, 11.0, 14.0, 17.0, 20.0]
            .iter()
            .map(|&v| map.color_for(v).g())
            .collect();
        assert!(greens.windows(2).all(|w| w[0] >= w[1]), "{greens:?}");
    }

    #[test]
    fn degenerate_range_uses_mid_scale() {
        let map = ContinuousColorMap::new(ColorScale::Blues, 12.0, 12.0);
        assert_eq!(map.color_for(12.0), ColorScale::Blues.sample(0.5));
    }

    #[test]
    fn legend_spans_the_range() {
        let map = ContinuousColorMap::new(ColorScale::Greens, 10.0, 20.0);
        let stops = map.legend_stops(5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].0, 10.0);
        assert_eq!(stops[4].0, 20.0);
    }

    #[test]
    fn scale_names_parse_from_config() {
        let scale: ColorScale = serde_json::from_str("\"blues\"").unwrap();
        assert_eq!(scale, ColorScale::Blues);
    }
}
