use crate::config::{ConstellationLayout, GalaxyArm, Project};
use crate::error::RenderError;
use crate::random::deterministic_sequence;
use crate::svg::{Document, Element, fmt_num};
use crate::theme::Theme;

use super::{
    FONT_MONO, FONT_SANS, accents, ambient, caption, estimated_text_width, frame, stagger,
    star_field,
};

// Vertical squash so arm chains fit the wide canvas.
const VERTICAL_SCALE: f64 = 0.72;
const UNASSIGNED_ARM: &str = "outer rim";

struct PlacedStar {
    x: f64,
    y: f64,
    radius: f64,
    name: String,
}

pub fn render_constellation(
    projects: &[Project],
    arms: &[GalaxyArm],
    theme: &Theme,
    layout: &ConstellationLayout,
) -> Result<Document, RenderError> {
    let width = layout.width;
    let height = layout.height;
    let center_x = width / 2.0;
    let center_y = height / 2.0 + 10.0;
    let palette = accents(theme)?;

    let groups = group_by_arm(projects, arms);
    let visible_count: usize = groups.iter().map(|(_, members)| members.len()).sum();

    let mut doc = Document::new(width, height);
    doc.push(frame(width, height, theme)?);
    doc.extend(star_field("constellation-star", layout.star_count, width, height, theme)?);
    doc.push(caption(30.0, 38.0, "PROJECT CONSTELLATION", theme)?);
    doc.push(
        Element::new("text")
            .attr_num("x", width - 30.0)
            .attr_num("y", 38.0)
            .attr("fill", theme.color("text_faint")?)
            .attr("font-size", "10")
            .attr("font-family", FONT_MONO)
            .attr("text-anchor", "end")
            .attr("opacity", "0.5")
            .text(format!("{visible_count} SYSTEMS CHARTED")),
    );

    // Core glow at the hub of every arm.
    let glow = theme.color("core_glow")?;
    doc.push(
        Element::new("circle")
            .attr_num("cx", center_x)
            .attr_num("cy", center_y)
            .attr("r", "6")
            .attr("fill", glow)
            .attr("opacity", "0.7")
            .child(ambient("opacity", "0.7;1;0.7", 4.0, "0s")),
    );

    let max_magnitude = groups
        .iter()
        .flat_map(|(_, members)| members.iter())
        .map(|project| project.magnitude.unwrap_or(1.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let group_count = groups.len().max(1);
    for (gi, (arm, members)) in groups.iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        let color = palette[gi % palette.len()];
        let base_angle = arm
            .angle
            .unwrap_or(gi as f64 * 360.0 / group_count as f64)
            .to_radians();
        let jitter = deterministic_sequence(
            &format!("constellation-{}", arm.name),
            members.len() * 2,
            -layout.jitter,
            layout.jitter,
        )?;

        let mut placed: Vec<PlacedStar> = Vec::with_capacity(members.len());
        for (k, project) in members.iter().enumerate() {
            let orbit = layout.inner_radius + k as f64 * layout.ring_step;
            let magnitude = project.magnitude.unwrap_or(1.0);
            let radius = (magnitude / max_magnitude * layout.max_star_radius)
                .max(layout.min_star_radius);
            placed.push(PlacedStar {
                x: center_x + base_angle.cos() * orbit + jitter[k * 2],
                y: center_y + base_angle.sin() * orbit * VERTICAL_SCALE + jitter[k * 2 + 1],
                radius,
                name: project.name.clone(),
            });
        }

        doc.push(chain_line(center_x, center_y, &placed, color, gi));
        for (k, star) in placed.iter().enumerate() {
            let delay = stagger(gi * 3 + k, 0.2);
            doc.push(
                Element::new("circle")
                    .attr_num("cx", star.x)
                    .attr_num("cy", star.y)
                    .attr_num("r", star.radius)
                    .attr("fill", color)
                    .attr("opacity", "0.9")
                    .child(ambient("opacity", "0.6;1;0.6", 3.0, &delay)),
            );
            doc.push(
                Element::new("text")
                    .attr_num("x", star.x + star.radius + 5.0)
                    .attr_num("y", star.y + 4.0)
                    .attr("fill", theme.color("text_bright")?)
                    .attr("font-size", "11")
                    .attr("font-family", FONT_SANS)
                    .text(star.name.as_str()),
            );
        }

        if let Some(last) = placed.last() {
            let label = arm.name.to_uppercase();
            let label_x =
                last.x - estimated_text_width(&label, 10.0) / 2.0 + base_angle.cos() * 20.0;
            doc.push(
                Element::new("text")
                    .attr_num("x", label_x)
                    .attr_num("y", last.y + base_angle.sin() * 24.0 * VERTICAL_SCALE + 22.0)
                    .attr("fill", color)
                    .attr("font-size", "10")
                    .attr("font-family", FONT_MONO)
                    .attr("letter-spacing", "2")
                    .attr("opacity", "0.6")
                    .text(label),
            );
        }
    }

    Ok(doc)
}

fn chain_line(
    center_x: f64,
    center_y: f64,
    placed: &[PlacedStar],
    color: &str,
    group_index: usize,
) -> Element {
    let mut points = format!("{},{}", fmt_num(center_x), fmt_num(center_y));
    for star in placed {
        points.push_str(&format!(" {},{}", fmt_num(star.x), fmt_num(star.y)));
    }
    Element::new("polyline")
        .attr("points", points)
        .attr("fill", "none")
        .attr("stroke", color)
        .attr("stroke-width", "1")
        .attr("stroke-dasharray", "4,6")
        .attr("opacity", "0")
        .child(ambient("opacity", "0;0.3;0", 4.0, &stagger(group_index, 0.4)))
}

/// Configured arms in declaration order, each with its visible projects,
/// then a trailing group for projects with no (or an unknown) arm so
/// nothing silently disappears.
fn group_by_arm<'a>(
    projects: &'a [Project],
    arms: &[GalaxyArm],
) -> Vec<(GalaxyArm, Vec<&'a Project>)> {
    let visible = |project: &&Project| project.magnitude.unwrap_or(1.0) > 0.0;
    let mut groups: Vec<(GalaxyArm, Vec<&Project>)> = arms
        .iter()
        .map(|arm| {
            let members = projects
                .iter()
                .filter(visible)
                .filter(|project| project.arm.as_deref() == Some(arm.name.as_str()))
                .collect();
            (arm.clone(), members)
        })
        .collect();

    let known: Vec<&str> = arms.iter().map(|arm| arm.name.as_str()).collect();
    let stray: Vec<&Project> = projects
        .iter()
        .filter(visible)
        .filter(|project| {
            project
                .arm
                .as_deref()
                .is_none_or(|arm| !known.contains(&arm))
        })
        .collect();
    if !stray.is_empty() {
        groups.push((
            GalaxyArm {
                name: UNASSIGNED_ARM.to_string(),
                angle: None,
            },
            stray,
        ));
    }
    groups
}
