use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use galaxy_profile_svg::config::{ActivityGranularity, GalaxyArm, Project};
use galaxy_profile_svg::{Config, Contributions, Languages, Stats, SvgBuilder};
use std::hint::black_box;

fn dense_config(arms: usize, projects_per_arm: usize) -> Config {
    let mut config = Config::new("bench-pilot");
    config.tagline = Some("benchmark run".to_string());
    for i in 0..arms {
        config.galaxy_arms.push(GalaxyArm {
            name: format!("arm-{i}"),
            angle: None,
        });
        for j in 0..projects_per_arm {
            config.projects.push(Project {
                name: format!("project-{i}-{j}"),
                arm: Some(format!("arm-{i}")),
                magnitude: Some(1.0 + j as f64),
            });
        }
    }
    config
}

fn dense_stats() -> Stats {
    [
        ("commits", 18_470u64),
        ("stars", 3_420),
        ("prs", 1_560),
        ("issues", 890),
        ("repos", 420),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

fn dense_languages(count: usize) -> Languages {
    (0..count)
        .map(|i| (format!("lang-{i:02}"), 1_000u64 * (count - i) as u64))
        .collect()
}

fn dense_contributions(len: usize) -> Contributions {
    Contributions {
        counts: (0..len as u64).map(|i| i * 7 % 29).collect(),
        total: 45_230,
        streak: 17,
    }
}

fn builder(granularity: ActivityGranularity) -> SvgBuilder {
    let mut config = dense_config(3, 4);
    config.layout.activity.granularity = granularity;
    let window = granularity.window();
    SvgBuilder::new(
        config,
        dense_stats(),
        dense_languages(8),
        dense_contributions(window),
    )
}

fn bench_artifacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_artifact");
    let weekly = builder(ActivityGranularity::Weekly);

    group.bench_function(BenchmarkId::from_parameter("galaxy_header"), |b| {
        b.iter(|| black_box(weekly.render_galaxy_header().expect("render failed").len()));
    });
    group.bench_function(BenchmarkId::from_parameter("stats_card"), |b| {
        b.iter(|| black_box(weekly.render_stats_card().expect("render failed").len()));
    });
    group.bench_function(BenchmarkId::from_parameter("tech_stack"), |b| {
        b.iter(|| black_box(weekly.render_tech_stack().expect("render failed").len()));
    });
    group.bench_function(BenchmarkId::from_parameter("projects_constellation"), |b| {
        b.iter(|| {
            black_box(
                weekly
                    .render_projects_constellation()
                    .expect("render failed")
                    .len(),
            )
        });
    });
    group.bench_function(BenchmarkId::from_parameter("contributions_weekly"), |b| {
        b.iter(|| {
            black_box(
                weekly
                    .render_contributions_heatmap()
                    .expect("render failed")
                    .len(),
            )
        });
    });

    let daily = builder(ActivityGranularity::Daily);
    group.bench_function(BenchmarkId::from_parameter("contributions_daily"), |b| {
        b.iter(|| {
            black_box(
                daily
                    .render_contributions_heatmap()
                    .expect("render failed")
                    .len(),
            )
        });
    });
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_all");
    for granularity in [ActivityGranularity::Weekly, ActivityGranularity::Daily] {
        let name = match granularity {
            ActivityGranularity::Weekly => "weekly",
            ActivityGranularity::Daily => "daily",
        };
        let builder = builder(granularity);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let artifacts = builder.render_all().expect("render failed");
                black_box(artifacts.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_artifacts, bench_end_to_end
);
criterion_main!(benches);
