use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Criterion sample size and timing for one class of input sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeProfile {
    pub sample_size: usize,
    pub warm_up: Duration,
    pub measurement: Duration,
}

pub const SMALL: RuntimeProfile = RuntimeProfile {
    sample_size: 15,
    warm_up: Duration::from_millis(100),
    measurement: Duration::from_millis(200),
};

pub const MEDIUM: RuntimeProfile = RuntimeProfile {
    sample_size: 15,
    warm_up: Duration::from_millis(500),
    measurement: Duration::from_millis(1000),
};

pub const LARGE: RuntimeProfile = RuntimeProfile {
    sample_size: 10,
    warm_up: Duration::from_millis(800),
    measurement: Duration::from_millis(1500),
};

const MEDIUM_FROM: usize = 16_000;
const LARGE_FROM: usize = 128_000;
const RNG_SEED: u64 = 0x5EED_2026;

impl RuntimeProfile {
    pub fn for_size(size: usize) -> Self {
        if size >= LARGE_FROM {
            LARGE
        } else if size >= MEDIUM_FROM {
            MEDIUM
        } else {
            SMALL
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(self.warm_up);
        group.measurement_time(self.measurement);
    }
}

pub fn apply_runtime_config<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    RuntimeProfile::for_size(size).apply(group);
}

/// Deterministic generator; `salt` separates workloads sharing a run.
pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(RNG_SEED ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
