use criterion::criterion_main;

mod common;

criterion_main!(checks::check_benches, scenarios::scenario_benches);
