use crate::theme::Theme;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub languages: LanguagesConfig,
    #[serde(default)]
    pub galaxy_arms: Vec<GalaxyArm>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            tagline: None,
            theme: Theme::galaxy_core(),
            stats: StatsConfig::default(),
            languages: LanguagesConfig::default(),
            galaxy_arms: Vec::new(),
            projects: Vec::new(),
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub metrics: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            metrics: ["commits", "stars", "prs", "issues", "repos"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesConfig {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_max_display")]
    pub max_display: usize,
}

fn default_max_display() -> usize {
    8
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            max_display: default_max_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyArm {
    pub name: String,
    /// Placement angle in degrees; evenly distributed when omitted.
    #[serde(default)]
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub arm: Option<String>,
    /// Relative visual weight; defaults to 1. An explicit 0 hides the star.
    #[serde(default)]
    pub magnitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub header: HeaderLayout,
    #[serde(default)]
    pub stats_card: StatsCardLayout,
    #[serde(default)]
    pub tech_stack: TechStackLayout,
    #[serde(default)]
    pub constellation: ConstellationLayout,
    #[serde(default)]
    pub activity: ActivityLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    pub width: f64,
    pub height: f64,
    pub star_count: usize,
    pub arm_rotation_secs: f64,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 260.0,
            star_count: 40,
            arm_rotation_secs: 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsCardLayout {
    pub width: f64,
    pub height: f64,
    pub star_count: usize,
    pub reveal_step_secs: f64,
}

impl Default for StatsCardLayout {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 220.0,
            star_count: 12,
            reveal_step_secs: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackLayout {
    pub width: f64,
    pub height: f64,
    pub star_count: usize,
    pub row_height: f64,
    pub bar_max_length: f64,
    pub bar_min_length: f64,
    pub reveal_step_secs: f64,
}

impl Default for TechStackLayout {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 320.0,
            star_count: 12,
            row_height: 28.0,
            bar_max_length: 250.0,
            bar_min_length: 4.0,
            reveal_step_secs: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationLayout {
    pub width: f64,
    pub height: f64,
    pub star_count: usize,
    pub inner_radius: f64,
    pub ring_step: f64,
    pub jitter: f64,
    pub max_star_radius: f64,
    pub min_star_radius: f64,
}

impl Default for ConstellationLayout {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 420.0,
            star_count: 30,
            inner_radius: 70.0,
            ring_step: 55.0,
            jitter: 18.0,
            max_star_radius: 9.0,
            min_star_radius: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityGranularity {
    #[default]
    Weekly,
    Daily,
}

impl ActivityGranularity {
    pub fn window(self) -> usize {
        match self {
            Self::Weekly => 52,
            Self::Daily => 365,
        }
    }

    /// Accent color bucket for a bar index. Daily bars share a color per
    /// month-sized run instead of alternating every bar.
    pub fn color_bucket(self, index: usize) -> usize {
        match self {
            Self::Weekly => index,
            Self::Daily => index / 31,
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            Self::Weekly => "LAST 52 WEEKS",
            Self::Daily => "LAST 365 DAYS",
        }
    }

    /// Per-bar glow filters are only worth the markup weight at weekly
    /// bar sizes.
    pub fn glow_filters(self) -> bool {
        matches!(self, Self::Weekly)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLayout {
    #[serde(default)]
    pub granularity: ActivityGranularity,
    pub width: f64,
    pub height: f64,
    pub plot_start_x: f64,
    pub baseline_y: f64,
    pub max_bar_height: f64,
    pub min_bar_height: f64,
    pub bar_fill_ratio: f64,
    pub stagger_step_secs: f64,
    pub grow_secs: f64,
}

impl ActivityLayout {
    pub fn bar_spacing(&self) -> f64 {
        let slots = self.granularity.window().max(1) as f64;
        (self.width - self.plot_start_x * 2.0) / slots
    }

    pub fn bar_width(&self) -> f64 {
        self.bar_spacing() * self.bar_fill_ratio
    }
}

impl Default for ActivityLayout {
    fn default() -> Self {
        Self {
            granularity: ActivityGranularity::Weekly,
            width: 850.0,
            height: 280.0,
            plot_start_x: 60.0,
            baseline_y: 200.0,
            max_bar_height: 120.0,
            min_bar_height: 4.0,
            bar_fill_ratio: 0.62,
            stagger_step_secs: 0.02,
            grow_secs: 0.8,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<()> {
    if config.username.trim().is_empty() {
        bail!("config: username must not be empty");
    }
    let missing = config.theme.missing_roles();
    if !missing.is_empty() {
        bail!("config: theme is missing color roles: {}", missing.join(", "));
    }
    if config.languages.max_display == 0 {
        bail!("config: languages.max_display must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_optional_sections() {
        let config: Config = serde_yaml::from_str("username: nova\n").unwrap();
        assert_eq!(config.languages.max_display, 8);
        assert!(config.languages.exclude.is_empty());
        assert_eq!(config.stats.metrics.len(), 5);
        assert_eq!(config.layout.activity.granularity, ActivityGranularity::Weekly);
        validate_config(&config).unwrap();
    }

    #[test]
    fn rejects_incomplete_theme() {
        let config: Config =
            serde_yaml::from_str("username: nova\ntheme:\n  nebula: '#000'\n").unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn daily_granularity_tightens_bars() {
        let mut layout = ActivityLayout::default();
        layout.granularity = ActivityGranularity::Daily;
        assert_eq!(layout.granularity.window(), 365);
        assert!(layout.bar_spacing() < 3.0);
        assert_eq!(layout.granularity.color_bucket(0), 0);
        assert_eq!(layout.granularity.color_bucket(62), 2);
    }
}
