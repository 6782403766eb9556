//! Benchmarks for the layout shape factory.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use storeplan_layout::{
    build_table, Alignment, Direction, Lattice, LayoutConfig, NumberingRule, Point,
    SequentialIdSource, TableEndType, TableSpec,
};

fn bench_build_table(c: &mut Criterion) {
    let config = LayoutConfig {
        lattice: Lattice::new(15.0, 15.0),
        ..LayoutConfig::default()
    };
    let spec = TableSpec {
        origin: Point::new(0.0, 0.0),
        alignment: Alignment::Vertical,
        gondola_width_cells: 4,
        gondola_depth_cells: 3,
        end_depth_cells: 2,
        side_count: 20,
        front_end: TableEndType::Basic,
        back_end: TableEndType::MeshEnd,
        repeat_count: 10,
        repeat_direction: Direction::Right,
        numbering: NumberingRule::Clockwise,
        reverse_numbering: false,
        start_location_num: "0101".to_string(),
    };

    c.bench_function("build_table_10x20", |b| {
        b.iter(|| {
            let mut ids = SequentialIdSource::new();
            let records = build_table(black_box(&spec), &config, &mut ids).unwrap();
            black_box(records)
        })
    });
}

criterion_group!(benches, bench_build_table);
criterion_main!(benches);
