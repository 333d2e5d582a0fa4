use crate::config::{LanguagesConfig, TechStackLayout};
use crate::data::Languages;
use crate::error::RenderError;
use crate::svg::{Document, Element, fmt_num};
use crate::theme::Theme;

use super::{
    FONT_MONO, FONT_SANS, accents, ambient, caption, frame, reveal, scaled_extent, stagger,
    star_field,
};

const BAR_X: f64 = 180.0;
const FIRST_ROW_Y: f64 = 76.0;

pub fn render_tech_stack(
    languages: &Languages,
    theme: &Theme,
    layout: &TechStackLayout,
    options: &LanguagesConfig,
) -> Result<Document, RenderError> {
    let width = layout.width;
    let height = layout.height;
    let display = display_list(languages, options);
    let max_bytes = display.iter().map(|(_, bytes)| *bytes).max().unwrap_or(0);
    let total_bytes: u64 = display.iter().map(|(_, bytes)| *bytes).sum();
    let palette = accents(theme)?;

    let mut doc = Document::new(width, height);
    doc.push(frame(width, height, theme)?);
    doc.extend(star_field("tech-star", layout.star_count, width, height, theme)?);
    doc.push(caption(30.0, 38.0, "TECH STACK SPECTRUM", theme)?);
    doc.push(
        Element::new("text")
            .attr_num("x", width - 30.0)
            .attr_num("y", 38.0)
            .attr("fill", theme.color("text_faint")?)
            .attr("font-size", "10")
            .attr("font-family", FONT_MONO)
            .attr("text-anchor", "end")
            .attr("opacity", "0.5")
            .text("BYTES BY LANGUAGE"),
    );

    for (i, (name, bytes)) in display.iter().enumerate() {
        let y = FIRST_ROW_Y + i as f64 * layout.row_height;
        let color = palette[i % palette.len()];
        let delay = stagger(i, layout.reveal_step_secs);
        let length = scaled_extent(*bytes, max_bytes, layout.bar_max_length, layout.bar_min_length);
        let share = *bytes as f64 / total_bytes.max(1) as f64 * 100.0;

        doc.push(
            Element::new("text")
                .attr_num("x", 30.0)
                .attr_num("y", y)
                .attr("fill", theme.color("text_bright")?)
                .attr("font-size", "12")
                .attr("font-family", FONT_SANS)
                .text(name.as_str()),
        );
        doc.push(
            Element::new("rect")
                .attr_num("x", BAR_X)
                .attr_num("y", y - 8.0)
                .attr("width", "0")
                .attr("height", "6")
                .attr("rx", "3")
                .attr("fill", color)
                .attr("opacity", "0.85")
                .child(reveal("width", 0.0, length, 0.8, &delay))
                .child(ambient("opacity", "0.7;1;0.7", 2.5, &delay)),
        );
        // Percentage sits just past the fully-grown bar end.
        doc.push(
            Element::new("text")
                .attr_num("x", BAR_X + length + 8.0)
                .attr_num("y", y)
                .attr("fill", theme.color("text_dim")?)
                .attr("font-size", "10")
                .attr("font-family", FONT_MONO)
                .attr("opacity", "0")
                .text(format!("{share:.1}%"))
                .child(reveal("opacity", 0.0, 0.8, 0.4, &stagger(i + 2, layout.reveal_step_secs))),
        );
        doc.push(
            Element::new("text")
                .attr_num("x", width - 30.0)
                .attr_num("y", y)
                .attr("fill", theme.color("text_faint")?)
                .attr("font-size", "9")
                .attr("font-family", FONT_MONO)
                .attr("text-anchor", "end")
                .text(human_bytes(*bytes)),
        );
    }

    Ok(doc)
}

/// Deterministic display list: excluded names dropped, exact-zero counts
/// dropped, sorted by byte count descending (name ascending on ties),
/// capped at `max_display`.
fn display_list(languages: &Languages, options: &LanguagesConfig) -> Vec<(String, u64)> {
    let mut display: Vec<(String, u64)> = languages
        .iter()
        .filter(|(name, bytes)| **bytes > 0 && !options.exclude.contains(*name))
        .map(|(name, bytes)| (name.clone(), *bytes))
        .collect();
    display.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    display.truncate(options.max_display.max(1));
    display
}

fn human_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{} MB", fmt_num(bytes as f64 / 1_000_000.0))
    } else if bytes >= 1_000 {
        format!("{} KB", fmt_num(bytes as f64 / 1_000.0))
    } else {
        format!("{bytes} B")
    }
}
