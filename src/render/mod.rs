mod constellation;
mod contributions;
mod header;
mod stats;
mod tech_stack;

pub use constellation::render_constellation;
pub use contributions::render_contributions;
pub use header::render_header;
pub use stats::render_stats_card;
pub use tech_stack::render_tech_stack;

use crate::error::RenderError;
use crate::random::deterministic_sequence;
use crate::svg::{Element, fmt_num};
use crate::theme::Theme;

pub(crate) const FONT_MONO: &str = "monospace";
pub(crate) const FONT_SANS: &str = "sans-serif";

// Monospace width heuristic; close enough for label offsets without a
// font database.
pub(crate) const CHAR_WIDTH_RATIO: f64 = 0.62;

pub(crate) const ACCENT_ROLES: [&str; 3] = ["synapse_cyan", "dendrite_violet", "axon_amber"];

pub(crate) fn accents(theme: &Theme) -> Result<[&str; 3], RenderError> {
    Ok([
        theme.color(ACCENT_ROLES[0])?,
        theme.color(ACCENT_ROLES[1])?,
        theme.color(ACCENT_ROLES[2])?,
    ])
}

pub(crate) fn estimated_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO
}

/// Normalize a series to exactly `window` entries: keep the most recent
/// values, left-pad with zeros when short.
pub(crate) fn normalize_window(counts: &[u64], window: usize) -> Vec<u64> {
    if counts.len() >= window {
        counts[counts.len() - window..].to_vec()
    } else {
        let mut padded = vec![0; window - counts.len()];
        padded.extend_from_slice(counts);
        padded
    }
}

/// Scale a positive magnitude into a visual extent. The denominator is
/// clamped so an all-zero window never divides by zero, and the result is
/// clamped so present-but-small values stay visible.
pub(crate) fn scaled_extent(value: u64, window_max: u64, max_extent: f64, min_extent: f64) -> f64 {
    let extent = value as f64 / window_max.max(1) as f64 * max_extent;
    extent.max(min_extent)
}

pub(crate) fn stagger(index: usize, step_secs: f64) -> String {
    format!("{}s", fmt_num(index as f64 * step_secs))
}

pub(crate) fn secs(value: f64) -> String {
    format!("{}s", fmt_num(value))
}

/// One-shot reveal: animate an attribute once, then hold the end value.
pub(crate) fn reveal(attribute: &'static str, from: f64, to: f64, dur: f64, begin: &str) -> Element {
    Element::new("animate")
        .attr("attributeName", attribute)
        .attr("from", fmt_num(from))
        .attr("to", fmt_num(to))
        .attr("dur", secs(dur))
        .attr("begin", begin)
        .attr("fill", "freeze")
}

/// Ambient loop: cycle an attribute through `values` forever. Period is
/// fixed, independent of data size.
pub(crate) fn ambient(attribute: &'static str, values: &str, dur: f64, begin: &str) -> Element {
    Element::new("animate")
        .attr("attributeName", attribute)
        .attr("values", values)
        .attr("dur", secs(dur))
        .attr("begin", begin)
        .attr("repeatCount", "indefinite")
}

/// Rounded card background shared by every artifact.
pub(crate) fn frame(width: f64, height: f64, theme: &Theme) -> Result<Element, RenderError> {
    Ok(Element::new("rect")
        .attr_num("x", 0.5)
        .attr_num("y", 0.5)
        .attr_num("width", width - 1.0)
        .attr_num("height", height - 1.0)
        .attr("rx", "12")
        .attr("ry", "12")
        .attr("fill", theme.color("nebula")?)
        .attr("stroke", theme.color("star_dust")?)
        .attr("stroke-width", "1"))
}

pub(crate) fn caption(x: f64, y: f64, text: &str, theme: &Theme) -> Result<Element, RenderError> {
    Ok(Element::new("text")
        .attr_num("x", x)
        .attr_num("y", y)
        .attr("fill", theme.color("text_faint")?)
        .attr("font-size", "11")
        .attr("font-family", FONT_MONO)
        .attr("letter-spacing", "3")
        .text(text))
}

/// Scattered twinkling background stars. Positions, sizes, opacities and
/// periods all come from the deterministic generator, so the field is
/// stable for a given seed prefix.
pub(crate) fn star_field(
    seed_prefix: &str,
    count: usize,
    width: f64,
    height: f64,
    theme: &Theme,
) -> Result<Vec<Element>, RenderError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let xs = deterministic_sequence(&format!("{seed_prefix}-x"), count, 40.0, width - 40.0)?;
    let ys = deterministic_sequence(&format!("{seed_prefix}-y"), count, 40.0, height - 40.0)?;
    let radii = deterministic_sequence(&format!("{seed_prefix}-r"), count, 0.5, 1.5)?;
    let opacities = deterministic_sequence(&format!("{seed_prefix}-o"), count, 0.05, 0.2)?;
    let periods = deterministic_sequence(&format!("{seed_prefix}-d"), count, 3.0, 6.0)?;

    let [cyan, violet, amber] = accents(theme)?;
    let colors = [cyan, violet, amber, theme.color("text_dim")?];

    let mut stars = Vec::with_capacity(count);
    for i in 0..count {
        let base = opacities[i];
        let peak = (base * 2.5).min(0.4);
        let twinkle = format!("{};{};{}", fmt_num(base), fmt_num(peak), fmt_num(base));
        stars.push(
            Element::new("circle")
                .attr_num("cx", xs[i])
                .attr_num("cy", ys[i])
                .attr_num("r", radii[i])
                .attr("fill", colors[i % colors.len()])
                .attr_num("opacity", base)
                .child(ambient("opacity", &twinkle, periods[i], "0s")),
        );
    }
    Ok(stars)
}
