use crate::config::{GalaxyArm, HeaderLayout, Project};
use crate::error::RenderError;
use crate::random::deterministic_sequence;
use crate::svg::{Document, Element, fmt_num};
use crate::theme::Theme;

use super::{FONT_MONO, FONT_SANS, accents, ambient, caption, frame, reveal, stagger, star_field};

pub fn render_header(
    username: &str,
    tagline: Option<&str>,
    arms: &[GalaxyArm],
    projects: &[Project],
    theme: &Theme,
    layout: &HeaderLayout,
) -> Result<Document, RenderError> {
    let width = layout.width;
    let height = layout.height;
    let core_x = width * 0.78;
    let core_y = height * 0.5;

    let mut doc = Document::new(width, height);
    doc.push(frame(width, height, theme)?);
    doc.extend(star_field("header-star", layout.star_count, width, height, theme)?);
    doc.extend(galaxy_core(core_x, core_y, theme)?);
    doc.extend(spiral_arms(arms, core_x, core_y, theme, layout)?);

    doc.push(caption(40.0, 44.0, "GALAXY PROFILE", theme)?);
    doc.push(
        Element::new("text")
            .attr_num("x", 40.0)
            .attr_num("y", 116.0)
            .attr("fill", theme.color("text_bright")?)
            .attr("font-size", "40")
            .attr("font-weight", "bold")
            .attr("font-family", FONT_SANS)
            .attr("opacity", "0")
            .text(format!("@{username}"))
            .child(reveal("opacity", 0.0, 1.0, 0.8, "0.2s")),
    );
    if let Some(tagline) = tagline {
        doc.push(
            Element::new("text")
                .attr_num("x", 40.0)
                .attr_num("y", 146.0)
                .attr("fill", theme.color("text_dim")?)
                .attr("font-size", "14")
                .attr("font-family", FONT_SANS)
                .attr("opacity", "0")
                .text(tagline)
                .child(reveal("opacity", 0.0, 0.8, 0.8, "0.5s")),
        );
    }
    doc.push(
        Element::new("line")
            .attr_num("x1", 40.0)
            .attr_num("y1", 164.0)
            .attr_num("x2", 360.0)
            .attr_num("y2", 164.0)
            .attr("stroke", theme.color("star_dust")?)
            .attr("stroke-width", "1")
            .attr("opacity", "0.6"),
    );
    doc.extend(arm_tags(arms, theme)?);

    let shown = project_stars(projects, core_x, core_y, width, height, theme, &mut doc)?;
    doc.push(caption(
        40.0,
        height - 26.0,
        &format!("ACTIVE PROJECTS: {} // ARMS: {}", shown, arms.len()),
        theme,
    )?);

    Ok(doc)
}

fn galaxy_core(core_x: f64, core_y: f64, theme: &Theme) -> Result<Vec<Element>, RenderError> {
    let glow = theme.color("core_glow")?;
    Ok(vec![
        Element::new("circle")
            .attr_num("cx", core_x)
            .attr_num("cy", core_y)
            .attr("r", "26")
            .attr("fill", glow)
            .attr("opacity", "0.15")
            .child(ambient("opacity", "0.15;0.3;0.15", 5.0, "0s")),
        Element::new("circle")
            .attr_num("cx", core_x)
            .attr_num("cy", core_y)
            .attr("r", "8")
            .attr("fill", glow)
            .attr("opacity", "0.8")
            .child(ambient("r", "8;10;8", 4.0, "0s")),
    ])
}

/// Dashed elliptical orbits around the core, one per arm, slowly
/// rotating. A configured angle fixes the starting orientation.
fn spiral_arms(
    arms: &[GalaxyArm],
    core_x: f64,
    core_y: f64,
    theme: &Theme,
    layout: &HeaderLayout,
) -> Result<Vec<Element>, RenderError> {
    let palette = accents(theme)?;
    let mut elements = Vec::new();
    for (i, arm) in arms.iter().enumerate() {
        let base_angle = arm
            .angle
            .unwrap_or(i as f64 * 360.0 / arms.len().max(1) as f64);
        let color = palette[i % palette.len()];
        let spin = Element::new("animateTransform")
            .attr("attributeName", "transform")
            .attr("type", "rotate")
            .attr(
                "from",
                format!("{} {} {}", fmt_num(base_angle), fmt_num(core_x), fmt_num(core_y)),
            )
            .attr(
                "to",
                format!(
                    "{} {} {}",
                    fmt_num(base_angle + 360.0),
                    fmt_num(core_x),
                    fmt_num(core_y)
                ),
            )
            .attr("dur", format!("{}s", fmt_num(layout.arm_rotation_secs)))
            .attr("repeatCount", "indefinite");
        elements.push(
            Element::new("ellipse")
                .attr_num("cx", core_x)
                .attr_num("cy", core_y)
                .attr_num("rx", 130.0)
                .attr_num("ry", 38.0 + i as f64 * 8.0)
                .attr("fill", "none")
                .attr("stroke", color)
                .attr("stroke-width", "1")
                .attr("stroke-dasharray", "3,9")
                .attr("opacity", "0.3")
                .child(spin),
        );
    }
    Ok(elements)
}

fn arm_tags(arms: &[GalaxyArm], theme: &Theme) -> Result<Vec<Element>, RenderError> {
    let palette = accents(theme)?;
    let mut tags = Vec::new();
    let mut x = 40.0;
    for (i, arm) in arms.iter().enumerate() {
        let tag = format!("[{}]", arm.name.to_uppercase());
        tags.push(
            Element::new("text")
                .attr_num("x", x)
                .attr_num("y", 188.0)
                .attr("fill", palette[i % palette.len()])
                .attr("font-size", "10")
                .attr("font-family", FONT_MONO)
                .attr("letter-spacing", "1")
                .attr("opacity", "0")
                .text(tag.clone())
                .child(reveal("opacity", 0.0, 0.7, 0.5, &stagger(i, 0.15))),
        );
        x += super::estimated_text_width(&tag, 10.0) + 14.0;
    }
    Ok(tags)
}

/// Each project is a twinkling star near the core; returns how many were
/// emitted (an explicit zero magnitude hides a project).
fn project_stars(
    projects: &[Project],
    core_x: f64,
    core_y: f64,
    width: f64,
    height: f64,
    theme: &Theme,
    doc: &mut Document,
) -> Result<usize, RenderError> {
    let visible: Vec<&Project> = projects
        .iter()
        .filter(|project| project.magnitude.unwrap_or(1.0) > 0.0)
        .collect();
    if visible.is_empty() {
        return Ok(0);
    }

    let count = visible.len();
    let xs = deterministic_sequence("header-proj-x", count, width * 0.58, width - 60.0)?;
    let ys = deterministic_sequence("header-proj-y", count, 50.0, height - 50.0)?;
    let palette = accents(theme)?;
    let max_magnitude = visible
        .iter()
        .map(|project| project.magnitude.unwrap_or(1.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    for (i, project) in visible.iter().enumerate() {
        let magnitude = project.magnitude.unwrap_or(1.0);
        let radius = (magnitude / max_magnitude * 4.0).max(1.5);
        // Keep project stars off the core itself.
        let (x, y) = if (xs[i] - core_x).abs() < 30.0 && (ys[i] - core_y).abs() < 30.0 {
            (xs[i], core_y - 60.0)
        } else {
            (xs[i], ys[i])
        };
        doc.push(
            Element::new("circle")
                .attr_num("cx", x)
                .attr_num("cy", y)
                .attr_num("r", radius)
                .attr("fill", palette[i % palette.len()])
                .attr("opacity", "0.35")
                .child(ambient("opacity", "0.35;0.9;0.35", 3.0, &stagger(i, 0.3))),
        );
    }
    Ok(count)
}
