//! Benchmark profiles and utilities for the Skirmish scheduler.
//!
//! Provides pre-built battlefield profiles for benchmarking:
//!
//! - [`reference_profile`]: 64x64 grid (4K cells), one observer, 200 units
//! - [`stress_profile`]: 128x128 grid (16K cells), four observers, 2000 units
//! - [`init_unit_positions`]: deterministic unit placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skirmish_core::{DetailClass, UnitId, WorldPos};
use skirmish_engine::{BattlefieldConfig, VirtualBattlefield};
use skirmish_test_utils::{human_unit, unit, FlatTerrain, RecordingScene};

/// Deterministic pseudo-random unit positions inside a square theater.
///
/// Weyl-sequence hashing of the seed and index; no RNG dependency needed
/// for placement this coarse.
pub fn init_unit_positions(extent_m: f32, n: u32, seed: u64) -> Vec<WorldPos> {
    (0..n)
        .map(|i| {
            let h = (u64::from(i) + 1)
                .wrapping_mul(0x9e37_79b9_7f4a_7c15)
                .wrapping_add(seed);
            let x = (h >> 16 & 0xffff) as f32 / 65_536.0;
            let y = (h >> 32 & 0xffff) as f32 / 65_536.0;
            WorldPos::new(x * extent_m, y * extent_m)
        })
        .collect()
}

/// Build a reference profile: 64x64 grid, one observer, 200 ground units.
pub fn reference_profile(seed: u64) -> VirtualBattlefield {
    build(
        BattlefieldConfig {
            cols: 64,
            rows: 64,
            cell_size_m: 1000.0,
            air_bubble_radius_m: 10_000.0,
            mud_bubble_radius_m: 4000.0,
            visual_radius_m: 8000.0,
            walk_quantum: 2,
        },
        1,
        200,
        seed,
    )
}

/// Build a stress profile: 128x128 grid, four observers, 2000 units.
pub fn stress_profile(seed: u64) -> VirtualBattlefield {
    build(
        BattlefieldConfig {
            cols: 128,
            rows: 128,
            cell_size_m: 1000.0,
            air_bubble_radius_m: 20_000.0,
            mud_bubble_radius_m: 5000.0,
            visual_radius_m: 10_000.0,
            walk_quantum: 2,
        },
        4,
        2000,
        seed,
    )
}

fn build(config: BattlefieldConfig, observers: u32, units: u32, seed: u64) -> VirtualBattlefield {
    let extent = config.cols as f32 * config.cell_size_m;
    let mut bf = VirtualBattlefield::new(
        config,
        Box::new(RecordingScene::new()),
        Box::new(FlatTerrain::new(0.0)),
    )
    .expect("benchmark profile config is valid");

    for (i, pos) in init_unit_positions(extent, units, seed).into_iter().enumerate() {
        let class = if i % 2 == 0 {
            DetailClass::Mud
        } else {
            DetailClass::Air
        };
        bf.add_unit(unit(UnitId(1000 + i as u64), pos, class))
            .expect("benchmark unit ids are unique");
    }
    for (i, pos) in init_unit_positions(extent, observers, seed ^ 0xdead_beef)
        .into_iter()
        .enumerate()
    {
        bf.add_unit(human_unit(UnitId(1 + i as u64), pos, DetailClass::Mud))
            .expect("benchmark observer ids are unique");
    }
    bf
}
