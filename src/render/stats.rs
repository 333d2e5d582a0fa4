use crate::config::StatsCardLayout;
use crate::data::Stats;
use crate::error::RenderError;
use crate::svg::{Document, Element};
use crate::theme::Theme;

use super::{FONT_MONO, FONT_SANS, accents, ambient, caption, frame, reveal, stagger, star_field};

const VALUE_Y: f64 = 124.0;
const LABEL_Y: f64 = 148.0;
const MARKER_Y: f64 = 88.0;

pub fn render_stats_card(
    stats: &Stats,
    metrics: &[String],
    theme: &Theme,
    layout: &StatsCardLayout,
) -> Result<Document, RenderError> {
    let width = layout.width;
    let height = layout.height;
    let palette = accents(theme)?;

    let mut doc = Document::new(width, height);
    doc.push(frame(width, height, theme)?);
    doc.extend(star_field("stats-star", layout.star_count, width, height, theme)?);
    doc.push(caption(30.0, 38.0, "CORE TELEMETRY", theme)?);
    doc.push(
        Element::new("circle")
            .attr_num("cx", 190.0)
            .attr_num("cy", 34.0)
            .attr("r", "3")
            .attr("fill", theme.color("axon_amber")?)
            .child(ambient("opacity", "0.4;1;0.4", 2.0, "0s")),
    );

    if metrics.is_empty() {
        return Ok(doc);
    }

    let cell_width = (width - 60.0) / metrics.len() as f64;
    for (i, metric) in metrics.iter().enumerate() {
        let x = 30.0 + i as f64 * cell_width;
        let color = palette[i % palette.len()];
        let delay = stagger(i, layout.reveal_step_secs);
        let value = stats.get(metric);

        doc.push(
            Element::new("circle")
                .attr_num("cx", x + 3.0)
                .attr_num("cy", MARKER_Y)
                .attr("r", "3")
                .attr("fill", color)
                .attr("opacity", "0.3")
                .child(ambient("opacity", "0.3;0.9;0.3", 2.6, &delay)),
        );
        doc.push(
            Element::new("text")
                .attr_num("x", x)
                .attr_num("y", VALUE_Y)
                .attr("fill", color)
                .attr("font-size", "28")
                .attr("font-weight", "bold")
                .attr("font-family", FONT_SANS)
                .attr("opacity", "0")
                .text(group_digits(value))
                .child(reveal("opacity", 0.0, 1.0, 0.6, &delay)),
        );
        doc.push(
            Element::new("text")
                .attr_num("x", x)
                .attr_num("y", LABEL_Y)
                .attr("fill", theme.color("text_faint")?)
                .attr("font-size", "10")
                .attr("font-family", FONT_MONO)
                .attr("letter-spacing", "1")
                .text(metric_label(metric)),
        );
    }

    Ok(doc)
}

fn metric_label(metric: &str) -> String {
    match metric {
        "commits" => "COMMITS".to_string(),
        "stars" => "STARS".to_string(),
        "prs" => "PULL REQUESTS".to_string(),
        "issues" => "ISSUES".to_string(),
        "repos" => "REPOSITORIES".to_string(),
        other => other.to_uppercase(),
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_list(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn renders_one_cell_per_configured_metric() {
        let mut stats = Stats::default();
        stats.set("commits", 1847);
        stats.set("stars", 342);
        let metrics = metric_list(&["commits", "stars", "prs"]);
        let theme = Theme::galaxy_core();
        let doc =
            render_stats_card(&stats, &metrics, &theme, &StatsCardLayout::default()).unwrap();

        let texts: Vec<&str> = doc
            .find_all("text")
            .into_iter()
            .filter_map(|t| t.text_content())
            .collect();
        assert!(texts.contains(&"1,847"));
        assert!(texts.contains(&"342"));
        // Missing bundle key renders as zero, not an error.
        assert!(texts.contains(&"0"));
        assert!(texts.contains(&"PULL REQUESTS"));
    }

    #[test]
    fn unknown_metric_id_gets_uppercased_label() {
        let stats = Stats::default();
        let metrics = metric_list(&["sponsors"]);
        let theme = Theme::galaxy_core();
        let doc =
            render_stats_card(&stats, &metrics, &theme, &StatsCardLayout::default()).unwrap();
        assert!(doc.to_svg().contains("SPONSORS"));
    }

    #[test]
    fn empty_metric_list_is_minimal() {
        let theme = Theme::galaxy_core();
        let doc = render_stats_card(&Stats::default(), &[], &theme, &StatsCardLayout::default())
            .unwrap();
        assert!(doc.to_svg().contains("CORE TELEMETRY"));
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1847), "1,847");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
