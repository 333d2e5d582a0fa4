use galaxy_profile_svg::config::{ActivityGranularity, GalaxyArm, Project};
use galaxy_profile_svg::random::deterministic_sequence;
use galaxy_profile_svg::{Config, Contributions, Languages, SvgBuilder};

fn assert_valid_svg(svg: &str, artifact: &str) {
    assert!(svg.starts_with("<svg"), "{artifact}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{artifact}: missing </svg tag");
    assert!(svg.contains("width="), "{artifact}: missing explicit width");
    assert!(svg.contains("viewBox="), "{artifact}: missing viewBox");
}

fn sample_config() -> Config {
    let mut config = Config::new("nova");
    config.tagline = Some("charting the void".to_string());
    config.galaxy_arms = vec![
        GalaxyArm {
            name: "core".to_string(),
            angle: None,
        },
        GalaxyArm {
            name: "tooling".to_string(),
            angle: Some(140.0),
        },
    ];
    config.projects = vec![
        Project {
            name: "orbit-db".to_string(),
            arm: Some("core".to_string()),
            magnitude: Some(4.0),
        },
        Project {
            name: "starchart".to_string(),
            arm: Some("tooling".to_string()),
            magnitude: None,
        },
    ];
    config
}

fn sample_builder() -> SvgBuilder {
    let stats = [("commits", 1847u64), ("stars", 342), ("prs", 156)]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    let languages: Languages = [("Python", 450_000u64), ("Rust", 45_000), ("Shell", 30_000)]
        .into_iter()
        .map(|(name, bytes)| (name.to_string(), bytes))
        .collect();
    let contributions = Contributions {
        counts: (0..52u64).map(|week| week % 9).collect(),
        total: 4523,
        streak: 5,
    };
    SvgBuilder::new(sample_config(), stats, languages, contributions)
}

#[test]
fn render_all_artifacts() {
    let artifacts = sample_builder().render_all().expect("render failed");

    // Keep this list explicit so new artifacts must be added intentionally.
    let expected = [
        "galaxy-header",
        "stats-card",
        "tech-stack",
        "projects-constellation",
        "contributions-heatmap",
    ];
    assert_eq!(artifacts.len(), expected.len());
    for name in expected {
        let svg = artifacts.get(name).unwrap_or_else(|| panic!("missing artifact: {name}"));
        assert_valid_svg(svg, name);
    }
}

#[test]
fn renders_are_byte_identical_across_passes() {
    let first = sample_builder().render_all().unwrap();
    let second = sample_builder().render_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn generator_sequence_is_reproducible_in_range() {
    let a = deterministic_sequence("neural-x", 8, 100.0, 750.0).unwrap();
    let b = deterministic_sequence("neural-x", 8, 100.0, 750.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 8);
    for value in a {
        assert!((100.0..=750.0).contains(&value));
    }
}

#[test]
fn sparse_week_series_emits_only_positive_bars() {
    let mut config = Config::new("nova");
    config.layout.activity.granularity = ActivityGranularity::Weekly;
    let builder = SvgBuilder::new(
        config,
        Default::default(),
        Languages::new(),
        Contributions {
            counts: vec![0, 0, 5, 10, 0],
            total: 15,
            streak: 2,
        },
    );
    let svg = builder.render_contributions_heatmap().unwrap();
    assert_valid_svg(&svg, "contributions-heatmap");

    // Two bars grow in (5 and 10), the zeros stay empty, and the supplied
    // scalars appear verbatim.
    assert_eq!(svg.matches("bar-glow-").count() / 2, 2);
    assert!(svg.contains(">15<"));
    assert!(svg.contains(">2<"));
    assert!(svg.contains("TOTAL CONTRIBUTIONS"));
    assert!(svg.contains("CURRENT STREAK"));
}

#[test]
fn empty_language_map_renders_without_division_errors() {
    let builder = SvgBuilder::new(
        Config::new("nova"),
        Default::default(),
        Languages::new(),
        Contributions::default(),
    );
    let svg = builder.render_tech_stack().unwrap();
    assert_valid_svg(&svg, "tech-stack");
    assert!(!svg.contains('%'));
}

#[test]
fn all_empty_bundles_render_every_artifact() {
    let builder = SvgBuilder::new(
        Config::new("nova"),
        Default::default(),
        Languages::new(),
        Contributions::default(),
    );
    for (name, svg) in builder.render_all().unwrap() {
        assert_valid_svg(&svg, name);
        assert!(!svg.contains("NaN"), "{name}: leaked NaN into markup");
    }
}
