//! Benchmark per-frame map operations.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use drishti_map::{
    Action, Detection, Direction, GridConfig, GridStorage, LiveMap, ObjectLabel, PixelBox,
    SensorSnapshot,
};

/// Detector output for a busy town frame.
fn town_detections() -> Vec<Detection> {
    let tile = |x1: f32, y1: f32, x2: f32, y2: f32| {
        PixelBox::new(x1 * 48.0, 120.0 + y1 * 48.0, x2 * 48.0, 120.0 + y2 * 48.0)
    };
    vec![
        Detection::new(ObjectLabel::Pokecenter, tile(1.0, 1.0, 4.0, 4.0), 0.97),
        Detection::new(ObjectLabel::House, tile(10.0, 1.0, 14.0, 4.0), 0.95),
        Detection::new(ObjectLabel::Exit, tile(2.0, 4.0, 3.0, 5.0), 0.9),
        Detection::new(ObjectLabel::Npc, tile(5.0, 7.0, 6.0, 8.0), 0.85),
        Detection::new(ObjectLabel::Mart, tile(9.0, 7.0, 12.0, 10.0), 0.8),
    ]
}

fn sensor(step: u32) -> SensorSnapshot {
    SensorSnapshot {
        pos_x: step,
        ..SensorSnapshot::default()
    }
}

fn bench_draw_map(c: &mut Criterion) {
    let detections = town_detections();
    let mut map = LiveMap::new(GridConfig::default());

    // Warm up
    for step in 0..5 {
        map.draw_map(None, &detections, sensor(step));
    }

    c.bench_function("draw_map_static", |b| {
        b.iter(|| {
            let (_, status) = map.draw_map(None, black_box(&detections), sensor(0));
            black_box(status)
        })
    });
}

fn bench_draw_map_walking(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_map_walk");
    let detections = town_detections();

    for steps in [16u32, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut map = LiveMap::new(GridConfig::default());
                for step in 0..steps {
                    let action = if step % 2 == 0 { Action::Left } else { Action::Up };
                    map.draw_map(Some(action), &detections, sensor(step + 1));
                }
                black_box(map.coverage_stats())
            })
        });
    }

    group.finish();
}

fn bench_grid_growth(c: &mut Criterion) {
    let config = GridConfig::default();

    c.bench_function("grid_growth_256", |b| {
        b.iter(|| {
            let mut grid = GridStorage::new(&config);
            for _ in 0..64 {
                for direction in Direction::ALL {
                    grid.shift_view(direction);
                    grid.shift_view(direction);
                }
                grid.shift_view(Direction::Left);
                grid.shift_view(Direction::Up);
            }
            black_box(grid.cell_count())
        })
    });
}

criterion_group!(benches, bench_draw_map, bench_draw_map_walking, bench_grid_growth);
criterion_main!(benches);
