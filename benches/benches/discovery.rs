use criterion::{criterion_group, criterion_main, Criterion};
use opdeck_discovery::{DiscoveryConfig, DiscoverySession};
use opdeck_mode_sdk::{Mode, ModeDescriptor, ModeRegistry, ModeTag, Telemetry};

struct Idle;

impl Mode for Idle {
    fn update(&mut self, _telemetry: &mut Telemetry) {}
}

fn synthetic_registry(count: usize) -> ModeRegistry {
    let registry = ModeRegistry::new();
    for index in 0..count {
        let id = format!("bench::generated::Mode{index:03}");
        let tag = ModeTag::paired(format!("M{index:03}"), format!("pair{}", index / 2));
        let descriptor = ModeDescriptor::with_factory(id, || Box::new(Idle));
        let descriptor = if index % 2 == 0 {
            descriptor.with_interactive(tag)
        } else {
            descriptor.with_autonomous(tag)
        };
        registry.register(descriptor);
    }
    registry
}

fn discovery_pass(c: &mut Criterion) {
    // 24 modes with 4-byte names stay inside the name-table budget.
    let within_budget = synthetic_registry(24);
    c.bench_function("discover_within_budget", |b| {
        b.iter(|| {
            let mut session = DiscoverySession::new(DiscoveryConfig::default());
            session.discover(&within_budget, &within_budget)
        })
    });

    // 200 modes overflow the budget and take the placeholder path.
    let overflowing = synthetic_registry(200);
    c.bench_function("discover_overflowing", |b| {
        b.iter(|| {
            let mut session = DiscoverySession::new(DiscoveryConfig::default());
            session.discover(&overflowing, &overflowing)
        })
    });
}

criterion_group!(benches, discovery_pass);
criterion_main!(benches);
