use std::collections::BTreeMap;

use crate::config::Config;
use crate::data::{Contributions, Languages, Stats};
use crate::error::RenderError;
use crate::render::{
    render_constellation, render_contributions, render_header, render_stats_card,
    render_tech_stack,
};

pub const ARTIFACT_NAMES: [&str; 5] = [
    "galaxy-header",
    "stats-card",
    "tech-stack",
    "projects-constellation",
    "contributions-heatmap",
];

/// Holds one generation pass worth of inputs and slices them into the
/// template renderers. Methods are independent and side-effect free; call
/// them in any order, any number of times.
pub struct SvgBuilder {
    config: Config,
    stats: Stats,
    languages: Languages,
    contributions: Contributions,
}

impl SvgBuilder {
    pub fn new(
        config: Config,
        stats: Stats,
        languages: Languages,
        contributions: Contributions,
    ) -> Self {
        Self {
            config,
            stats,
            languages,
            contributions,
        }
    }

    pub fn render_galaxy_header(&self) -> Result<String, RenderError> {
        render_header(
            &self.config.username,
            self.config.tagline.as_deref(),
            &self.config.galaxy_arms,
            &self.config.projects,
            &self.config.theme,
            &self.config.layout.header,
        )
        .map(|doc| doc.to_svg())
    }

    pub fn render_stats_card(&self) -> Result<String, RenderError> {
        render_stats_card(
            &self.stats,
            &self.config.stats.metrics,
            &self.config.theme,
            &self.config.layout.stats_card,
        )
        .map(|doc| doc.to_svg())
    }

    pub fn render_tech_stack(&self) -> Result<String, RenderError> {
        render_tech_stack(
            &self.languages,
            &self.config.theme,
            &self.config.layout.tech_stack,
            &self.config.languages,
        )
        .map(|doc| doc.to_svg())
    }

    pub fn render_projects_constellation(&self) -> Result<String, RenderError> {
        render_constellation(
            &self.config.projects,
            &self.config.galaxy_arms,
            &self.config.theme,
            &self.config.layout.constellation,
        )
        .map(|doc| doc.to_svg())
    }

    pub fn render_contributions_heatmap(&self) -> Result<String, RenderError> {
        render_contributions(
            &self.contributions,
            &self.config.theme,
            &self.config.layout.activity,
        )
        .map(|doc| doc.to_svg())
    }

    /// All five artifacts keyed by output file stem.
    pub fn render_all(&self) -> Result<BTreeMap<&'static str, String>, RenderError> {
        let mut artifacts = BTreeMap::new();
        artifacts.insert(ARTIFACT_NAMES[0], self.render_galaxy_header()?);
        artifacts.insert(ARTIFACT_NAMES[1], self.render_stats_card()?);
        artifacts.insert(ARTIFACT_NAMES[2], self.render_tech_stack()?);
        artifacts.insert(ARTIFACT_NAMES[3], self.render_projects_constellation()?);
        artifacts.insert(ARTIFACT_NAMES[4], self.render_contributions_heatmap()?);
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::theme::Theme;
    use std::collections::BTreeMap as Map;

    fn empty_builder() -> SvgBuilder {
        SvgBuilder::new(
            Config::new("nova"),
            Stats::default(),
            Languages::new(),
            Contributions::default(),
        )
    }

    #[test]
    fn all_empty_inputs_still_render_every_artifact() {
        let artifacts = empty_builder().render_all().unwrap();
        assert_eq!(artifacts.len(), 5);
        for (name, svg) in &artifacts {
            assert!(svg.starts_with("<svg"), "{name}: not an svg document");
            assert!(svg.ends_with("</svg>"), "{name}: unterminated document");
        }
    }

    #[test]
    fn methods_are_order_independent() {
        let builder = empty_builder();
        let heatmap_first = builder.render_contributions_heatmap().unwrap();
        let _ = builder.render_stats_card().unwrap();
        let heatmap_again = builder.render_contributions_heatmap().unwrap();
        assert_eq!(heatmap_first, heatmap_again);
    }

    #[test]
    fn missing_theme_role_surfaces_as_error() {
        let mut config = Config::new("nova");
        config.theme = Theme::from_roles(Map::new());
        let builder = SvgBuilder::new(
            config,
            Stats::default(),
            Languages::new(),
            Contributions::default(),
        );
        let err = builder.render_stats_card().unwrap_err();
        assert!(matches!(err, RenderError::MissingThemeRole { .. }));
    }
}
