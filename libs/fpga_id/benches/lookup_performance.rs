//! Lookup benchmarks
//!
//! Best case (first entry), worst case (last Agilex entry) and a miss that
//! walks the whole table to the sentinel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpga_id::{get_fpga_part, IdentifierTable, FPGA_ID_AGIB027R31B, FPGA_ID_XC7S6, FPGA_ID_XCZU9};

fn bench_lookup_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let cases = [
        ("first_entry", FPGA_ID_XC7S6),
        ("middle_entry", FPGA_ID_XCZU9),
        ("last_entry", FPGA_ID_AGIB027R31B),
        ("miss", 0xFFFF_FFFF),
    ];

    for (label, id) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &id, |b, &id| {
            b.iter(|| black_box(get_fpga_part(black_box(id))))
        });
    }
    group.finish();
}

fn bench_find_vs_lookup(c: &mut Criterion) {
    let table = IdentifierTable::builtin();

    c.bench_function("find_option_result", |b| {
        b.iter(|| black_box(table.find(black_box(FPGA_ID_XCZU9))))
    });

    c.bench_function("full_table_sweep", |b| {
        b.iter(|| {
            for entry in table.iter() {
                black_box(table.lookup(black_box(entry.id)));
            }
        })
    });
}

criterion_group!(benches, bench_lookup_positions, bench_find_vs_lookup);
criterion_main!(benches);
