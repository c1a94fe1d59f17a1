//! Criterion benchmarks for the key translation path.
//!
//! Measures symbol-table lookup and table translation latency — the per-event
//! cost on the adapter callback path, which must stay far below the
//! millisecond-scale polling cadence of the injection loop.
//!
//! Run with:
//! ```bash
//! cargo bench --package cec-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cec_core::keymap::{default_table, CecUserControlCode, InputKeyCode, ALL_CEC_CODES};

// ── Representative codes for benchmarking ─────────────────────────────────────

/// Control codes that cover the common remote buttons plus one unmapped code.
const BENCH_CEC_CODES: &[CecUserControlCode] = &[
    CecUserControlCode::Select,
    CecUserControlCode::Up,
    CecUserControlCode::Down,
    CecUserControlCode::Exit,
    CecUserControlCode::Number0,
    CecUserControlCode::Number9,
    CecUserControlCode::VolumeUp,
    CecUserControlCode::Mute,
    CecUserControlCode::Play,
    CecUserControlCode::FastForward,
    CecUserControlCode::F2Red,
    CecUserControlCode::SoundSelect, // absent from the default table
];

fn bench_translate(c: &mut Criterion) {
    let table = default_table();
    let mut group = c.benchmark_group("keymap_translate");

    // Single lookup (typical per-button cost)
    group.bench_function("translate_single", |b| {
        b.iter(|| table.translate(black_box(CecUserControlCode::Select)))
    });

    // Batch of diverse codes (burst of presses)
    group.bench_function("translate_batch_12", |b| {
        b.iter(|| {
            BENCH_CEC_CODES
                .iter()
                .map(|&code| table.translate(black_box(code)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_symbol_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_symbols");

    group.bench_function("cec_from_name", |b| {
        b.iter(|| CecUserControlCode::from_name(black_box("volume_up")))
    });

    group.bench_function("cec_from_code", |b| {
        b.iter(|| CecUserControlCode::from_code(black_box(0x41)))
    });

    group.bench_function("key_from_name", |b| {
        b.iter(|| InputKeyCode::from_name(black_box("KEY_VOLUMEUP")))
    });

    group.finish();
}

fn bench_dump_load(c: &mut Criterion) {
    let table = default_table();
    let dump = table.dump();
    let mut group = c.benchmark_group("keymap_reload");

    group.bench_function("dump_default_table", |b| b.iter(|| table.dump()));

    group.bench_function("load_dumped_table", |b| {
        b.iter(|| cec_core::KeyTranslationTable::load(black_box(&dump)).unwrap())
    });

    group.bench_function("translate_all_codes", |b| {
        b.iter(|| {
            ALL_CEC_CODES
                .iter()
                .filter_map(|&code| table.translate(code))
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_translate, bench_symbol_lookup, bench_dump_load);
criterion_main!(benches);
