use crate::config::ActivityLayout;
use crate::data::Contributions;
use crate::error::RenderError;
use crate::random::deterministic_sequence;
use crate::svg::{Document, Element, fmt_num};
use crate::theme::Theme;

use super::{
    FONT_MONO, FONT_SANS, accents, ambient, caption, estimated_text_width, frame,
    normalize_window, reveal, scaled_extent, secs, stagger, star_field,
};

const STAT_VALUE_SIZE: f64 = 32.0;

pub fn render_contributions(
    contributions: &Contributions,
    theme: &Theme,
    layout: &ActivityLayout,
) -> Result<Document, RenderError> {
    let width = layout.width;
    let height = layout.height;
    let window = normalize_window(&contributions.counts, layout.granularity.window());
    let window_max = window.iter().copied().max().unwrap_or(0);

    let mut doc = Document::new(width, height);
    doc.push(defs(&window, theme, layout)?);
    doc.push(frame(width, height, theme)?);
    doc.extend(star_field("contrib-star", 20, width, height, theme)?);
    doc.extend(grid_overlay(width, height, theme)?);
    doc.extend(neural_connections(width, theme)?);

    doc.push(caption(30.0, 38.0, "NEURAL ACTIVITY PATTERN", theme)?);
    doc.push(
        Element::new("circle")
            .attr_num("cx", 235.0)
            .attr_num("cy", 34.0)
            .attr("r", "3")
            .attr("fill", theme.color("axon_amber")?)
            .child(ambient("opacity", "0.4;1;0.4", 2.0, "0s")),
    );
    doc.push(
        Element::new("text")
            .attr_num("x", width - 30.0)
            .attr_num("y", 38.0)
            .attr("fill", theme.color("text_faint")?)
            .attr("font-size", "10")
            .attr("font-family", FONT_MONO)
            .attr("text-anchor", "end")
            .attr("opacity", "0.5")
            .text(layout.granularity.range_label()),
    );

    doc.extend(activity_bars(&window, window_max, theme, layout)?);
    doc.extend(readouts(contributions.total, contributions.streak, theme)?);

    // Scanning sweep across the plot region.
    doc.push(
        Element::new("rect")
            .attr_num("x", 30.0)
            .attr_num("y", 50.0)
            .attr("width", "2")
            .attr("height", "160")
            .attr("fill", theme.color("synapse_cyan")?)
            .attr("opacity", "0.15")
            .child(sweep_animation(width)),
    );
    doc.push(
        Element::new("line")
            .attr_num("x1", layout.plot_start_x)
            .attr_num("y1", layout.baseline_y)
            .attr_num("x2", width - layout.plot_start_x)
            .attr_num("y2", layout.baseline_y)
            .attr("stroke", theme.color("star_dust")?)
            .attr("stroke-width", "1.5")
            .attr("opacity", "0.4"),
    );

    Ok(doc)
}

fn sweep_animation(width: f64) -> Element {
    Element::new("animate")
        .attr("attributeName", "x")
        .attr("from", "30")
        .attr("to", fmt_num(width - 30.0))
        .attr("dur", "4s")
        .attr("repeatCount", "indefinite")
}

fn defs(
    window: &[u64],
    theme: &Theme,
    layout: &ActivityLayout,
) -> Result<Element, RenderError> {
    let mut defs = Element::new("defs").child(Element::new("style").text(
        "@keyframes pulse-glow { 0%, 100% { opacity: 0.6; } 50% { opacity: 1; } } \
         .stat-group text { animation: pulse-glow 3s ease-in-out infinite; }",
    ));
    if layout.granularity.glow_filters() {
        let palette = accents(theme)?;
        for (i, count) in window.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            let color = palette[layout.granularity.color_bucket(i) % palette.len()];
            defs = defs.child(glow_filter(i, color));
        }
    }
    Ok(defs)
}

fn glow_filter(index: usize, color: &str) -> Element {
    Element::new("filter")
        .attr("id", format!("bar-glow-{index}"))
        .attr("x", "-100%")
        .attr("y", "-100%")
        .attr("width", "300%")
        .attr("height", "300%")
        .child(
            Element::new("feGaussianBlur")
                .attr("stdDeviation", "2")
                .attr("result", "blur"),
        )
        .child(
            Element::new("feFlood")
                .attr("flood-color", color)
                .attr("flood-opacity", "0.6"),
        )
        .child(
            Element::new("feComposite")
                .attr("in2", "blur")
                .attr("operator", "in"),
        )
        .child(
            Element::new("feMerge")
                .child(Element::new("feMergeNode"))
                .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
        )
}

fn activity_bars(
    window: &[u64],
    window_max: u64,
    theme: &Theme,
    layout: &ActivityLayout,
) -> Result<Vec<Element>, RenderError> {
    let palette = accents(theme)?;
    let spacing = layout.bar_spacing();
    let bar_width = layout.bar_width();
    let base_y = layout.baseline_y;
    let top_dots = bar_width >= 4.0;

    let mut bars = Vec::new();
    for (i, count) in window.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let x = layout.plot_start_x + i as f64 * spacing;
        let bar_height = scaled_extent(*count, window_max, layout.max_bar_height, layout.min_bar_height);
        let color = palette[layout.granularity.color_bucket(i) % palette.len()];
        let delay = stagger(i, layout.stagger_step_secs);

        let mut bar = Element::new("rect")
            .attr_num("x", x)
            .attr_num("y", base_y)
            .attr_num("width", bar_width)
            .attr("height", "0")
            .attr("fill", color)
            .attr("opacity", "0.8")
            .attr("rx", "2");
        if layout.granularity.glow_filters() {
            bar = bar.attr("filter", format!("url(#bar-glow-{i})"));
        }
        bars.push(
            bar.child(reveal("height", 0.0, bar_height, layout.grow_secs, &delay))
                .child(reveal("y", base_y, base_y - bar_height, layout.grow_secs, &delay))
                .child(ambient("opacity", "0.6;1;0.6", 2.0, &delay)),
        );

        if top_dots {
            let dot_begin = secs(i as f64 * layout.stagger_step_secs + layout.grow_secs);
            bars.push(
                Element::new("circle")
                    .attr_num("cx", x + bar_width / 2.0)
                    .attr_num("cy", base_y)
                    .attr("r", "2")
                    .attr("fill", color)
                    .attr("opacity", "0")
                    .child(reveal("cy", base_y, base_y - bar_height, layout.grow_secs, &delay))
                    .child(ambient("opacity", "0;1;0.7;1;0.7", 2.0, &dot_begin)),
            );
        }
    }
    Ok(bars)
}

fn readouts(total: u64, streak: u64, theme: &Theme) -> Result<Vec<Element>, RenderError> {
    let faint = theme.color("text_faint")?;
    let mut groups = Vec::new();

    groups.push(
        Element::new("g")
            .attr("class", "stat-group")
            .child(stat_label(60.0, 240.0, "TOTAL CONTRIBUTIONS", faint))
            .child(stat_value(60.0, 265.0, total, theme.color("synapse_cyan")?, "0.5s")),
    );

    // The "days" suffix trails the streak digits; its x offset follows the
    // estimated width of the rendered number.
    let streak_text = streak.to_string();
    let days_x = 280.0 + estimated_text_width(&streak_text, STAT_VALUE_SIZE) + 10.0;
    groups.push(
        Element::new("g")
            .attr("class", "stat-group")
            .child(stat_label(280.0, 240.0, "CURRENT STREAK", faint))
            .child(stat_value(280.0, 265.0, streak, theme.color("dendrite_violet")?, "0.7s"))
            .child(
                Element::new("text")
                    .attr_num("x", days_x)
                    .attr_num("y", 265.0)
                    .attr("fill", theme.color("text_dim")?)
                    .attr("font-size", "16")
                    .attr("font-family", FONT_SANS)
                    .attr("opacity", "0")
                    .text("days")
                    .child(reveal("opacity", 0.0, 0.6, 0.6, "0.7s")),
            ),
    );
    Ok(groups)
}

fn stat_label(x: f64, y: f64, text: &str, color: &str) -> Element {
    Element::new("text")
        .attr_num("x", x)
        .attr_num("y", y)
        .attr("fill", color)
        .attr("font-size", "10")
        .attr("font-family", FONT_MONO)
        .attr("letter-spacing", "1")
        .text(text)
}

fn stat_value(x: f64, y: f64, value: u64, color: &str, begin: &str) -> Element {
    Element::new("text")
        .attr_num("x", x)
        .attr_num("y", y)
        .attr("fill", color)
        .attr("font-size", fmt_num(STAT_VALUE_SIZE))
        .attr("font-weight", "bold")
        .attr("font-family", FONT_SANS)
        .attr("opacity", "0")
        .text(value.to_string())
        .child(reveal("opacity", 0.0, 1.0, 0.6, begin))
}

fn grid_overlay(width: f64, height: f64, theme: &Theme) -> Result<Vec<Element>, RenderError> {
    let faint = theme.color("text_faint")?;
    let mut lines = Vec::new();
    let mut y = 60;
    while y < height as i64 - 20 {
        lines.push(
            Element::new("line")
                .attr("x1", "30")
                .attr_num("y1", y as f64)
                .attr_num("x2", width - 30.0)
                .attr_num("y2", y as f64)
                .attr("stroke", faint)
                .attr("stroke-width", "0.5")
                .attr("stroke-dasharray", "4,8")
                .attr("opacity", "0.08"),
        );
        y += 40;
    }
    let mut x = 100;
    while x < width as i64 - 50 {
        lines.push(
            Element::new("line")
                .attr_num("x1", x as f64)
                .attr("y1", "50")
                .attr_num("x2", x as f64)
                .attr("y2", "210")
                .attr("stroke", faint)
                .attr("stroke-width", "0.5")
                .attr("stroke-dasharray", "4,8")
                .attr("opacity", "0.06"),
        );
        x += 100;
    }
    Ok(lines)
}

/// Faint synapse lines wandering through the upper region, node dots at
/// each joint.
fn neural_connections(width: f64, theme: &Theme) -> Result<Vec<Element>, RenderError> {
    let xs = deterministic_sequence("neural-x", 8, 100.0, width - 100.0)?;
    let ys = deterministic_sequence("neural-y", 8, 60.0, 160.0)?;
    let cyan = theme.color("synapse_cyan")?;
    let violet = theme.color("dendrite_violet")?;

    let mut elements = Vec::new();
    for i in 0..xs.len() - 1 {
        let color = if i % 2 == 0 { cyan } else { violet };
        let delay = stagger(i, 0.4);
        elements.push(
            Element::new("line")
                .attr_num("x1", xs[i])
                .attr_num("y1", ys[i])
                .attr_num("x2", xs[i + 1])
                .attr_num("y2", ys[i + 1])
                .attr("stroke", color)
                .attr("stroke-width", "1")
                .attr("opacity", "0")
                .attr("stroke-dasharray", "5,5")
                .child(ambient("opacity", "0;0.15;0", 3.0, &delay)),
        );
        elements.push(
            Element::new("circle")
                .attr_num("cx", xs[i])
                .attr_num("cy", ys[i])
                .attr("r", "2")
                .attr("fill", color)
                .attr("opacity", "0")
                .child(ambient("opacity", "0;0.4;0", 3.0, &delay)),
        );
    }
    Ok(elements)
}
