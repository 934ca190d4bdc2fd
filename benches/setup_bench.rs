//! Criterion benchmarks for valid-subset recomputation and job assembly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use u_conslay::algorithm::AlgorithmKind;
use u_conslay::constraint::{ConstraintKind, InclusiveZone};
use u_conslay::objective::{CranePlacement, ObjectiveKind};
use u_conslay::problem::ProblemKind;
use u_conslay::setup::Setup;

fn populated_setup() -> Setup {
    let mut setup = Setup::new();
    for kind in [
        ObjectiveKind::Risk,
        ObjectiveKind::Hoisting,
        ObjectiveKind::Safety,
        ObjectiveKind::TransportCost,
    ] {
        setup.toggle_objective(kind, true);
    }
    setup.select_problem(ProblemKind::Continuous);
    setup.select_algorithm(AlgorithmKind::NsgaIi);
    for kind in [
        ConstraintKind::OutOfBound,
        ConstraintKind::Overlap,
        ConstraintKind::CoverInCraneRadius,
        ConstraintKind::InclusiveZone,
    ] {
        setup.toggle_constraint(kind, true);
    }

    setup.store().objectives().hoisting().update(|h| {
        for i in 0..8 {
            h.add_crane(CranePlacement::new(
                format!("TF{}", 20 + i),
                "TF1 TF2 TF3 TF4",
                40.0,
            ));
        }
    });
    setup.store().constraints().inclusive_zone().update(|z| {
        for i in 0..16 {
            z.add_zone(InclusiveZone::new(format!("TF{}", i + 1), "TF7 TF8", 20.0));
        }
    });
    setup
}

fn bench_valid_subsets(c: &mut Criterion) {
    let setup = populated_setup();
    c.bench_function("valid_subsets/all_categories", |b| {
        b.iter(|| {
            black_box(setup.valid_problems());
            black_box(setup.valid_algorithms());
            black_box(setup.valid_constraints());
        })
    });
    c.bench_function("valid_subsets/stale_keys", |b| {
        b.iter(|| black_box(setup.stale_keys()))
    });
}

fn bench_build_job(c: &mut Criterion) {
    let setup = populated_setup();
    c.bench_function("build_job/four_objectives", |b| {
        b.iter(|| black_box(setup.build_job()))
    });
    c.bench_function("build_job/to_json", |b| {
        b.iter_batched(
            || setup.build_job(),
            |job| black_box(job.and_then(|j| j.to_json())),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_valid_subsets, bench_build_job);
criterion_main!(benches);
