use glam::Vec2;
use rand::Rng;

/// Layout and animation-timing parameters for the ambient field.
///
/// `size_span_px` and `duration_span_s` are the random spans added on top of
/// the minimums; observed variants of the effect scale these differently
/// from viewport dimensions, so they are parameters rather than formulas.
#[derive(Clone, Debug)]
pub struct FieldLayout {
    /// Grid step along both axes, in px. Controls caustic density.
    pub spacing_px: f32,
    /// Minimum element width, in px.
    pub min_size_px: f32,
    /// Random span added to the minimum width.
    pub size_span_px: f32,
    /// Minimum rotation duration, in seconds.
    pub min_duration_s: f32,
    /// Random span added to the minimum duration.
    pub duration_span_s: f32,
    /// Maximum amount below 1.0 an element's opacity can fall.
    pub alpha_adjust: f32,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            spacing_px: 132.0,
            min_size_px: 132.0,
            size_span_px: 120.0,
            min_duration_s: 3.0,
            duration_span_s: 10.0,
            alpha_adjust: 0.2,
        }
    }
}

/// One ambient grid element, immutable once generated. Height is 1.5x the
/// width so the rotating shape reads as an elongated light band.
#[derive(Clone, Debug, PartialEq)]
pub struct CausticSpec {
    pub position: Vec2,
    pub width_px: f32,
    pub height_px: f32,
    /// Always negative, so every element starts mid-animation.
    pub delay_s: f32,
    pub duration_s: f32,
    pub reversed: bool,
    pub opacity: f32,
}

/// Lay out the ambient grid for a viewport. The grid origin is offset by
/// `-spacing` so coverage extends slightly past every edge; cells whose
/// coordinates reach the viewport bound are not generated.
pub fn generate(viewport: Vec2, layout: &FieldLayout, rng: &mut impl Rng) -> Vec<CausticSpec> {
    let mut out = Vec::new();
    let step = layout.spacing_px;
    let mut x = -step;
    while x < viewport.x {
        let mut y = -step;
        while y < viewport.y {
            out.push(cell(Vec2::new(x.round(), y.round()), layout, rng));
            y += step;
        }
        x += step;
    }
    out
}

fn cell(position: Vec2, layout: &FieldLayout, rng: &mut impl Rng) -> CausticSpec {
    let r: f32 = rng.gen();
    let width = (r * layout.size_span_px).ceil() + layout.min_size_px;
    // Second independent draw for opacity.
    let fade: f32 = rng.gen();
    CausticSpec {
        position,
        width_px: width,
        height_px: width * 1.5,
        delay_s: (-5.0 * r).floor() - 5.0,
        duration_s: r * layout.duration_span_s + layout.min_duration_s,
        reversed: r < 0.5,
        opacity: 1.0 - (fade * layout.alpha_adjust * 100.0).round() / 100.0,
    }
}
