// Criterion benchmarks for ICP Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use icp_match::core::{active_criteria, Matcher};
use icp_match::models::{CandidateProfile, FieldValue, TargetCriteria};
use std::collections::HashSet;

const LANGUAGES: &[&str] = &["Rust", "Go", "TypeScript", "Python", "Java", "Kotlin"];
const SENIORITY: &[&str] = &["junior", "mid", "senior", "lead"];
const CLOUDS: &[&str] = &["AWS", "GCP", "Azure"];

fn create_candidate(id: usize) -> CandidateProfile {
    let mut candidate = CandidateProfile::new(format!("dev-{}", id));
    candidate.languages = Some(FieldValue::many(
        LANGUAGES.iter().skip(id % LANGUAGES.len()).take(1 + id % 3).copied(),
    ));
    candidate.seniority = Some(FieldValue::one(SENIORITY[id % SENIORITY.len()]));
    candidate.cloud_platforms = Some(FieldValue::one(CLOUDS[id % CLOUDS.len()]));
    candidate.years_experience = Some(FieldValue::number((id % 15) as f64));
    candidate
}

fn create_target() -> TargetCriteria {
    let values = |items: &[&str]| -> Option<Vec<String>> { Some(items.iter().map(|v| v.to_string()).collect()) };
    TargetCriteria {
        languages: values(&["Rust", "Go", "TypeScript"]),
        seniority: values(&["senior", "lead"]),
        cloud_platforms: values(&["AWS"]),
        frameworks: values(&["Axum", "React"]),
        min_experience: Some(5.0),
        ..Default::default()
    }
}

fn bench_active_criteria(c: &mut Criterion) {
    let target = create_target();

    c.bench_function("active_criteria", |b| {
        b.iter(|| active_criteria(black_box(&target)));
    });
}

fn bench_score_and_rank(c: &mut Criterion) {
    let matcher = Matcher::default();
    let target = create_target();
    let exclude: HashSet<String> = (0..50).map(|i| format!("dev-{}", i * 7)).collect();

    let mut group = c.benchmark_group("score_and_rank");

    for candidate_count in [100, 1000, 10_000].iter() {
        let candidates: Vec<CandidateProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("score_and_rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.score_and_rank(
                        black_box(&target),
                        black_box(candidates.clone()),
                        black_box(&exclude),
                        black_box(Some(20)),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_active_criteria, bench_score_and_rank);

criterion_main!(benches);
