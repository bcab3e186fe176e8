// engine/benches/placement_bench.rs
#![forbid(unsafe_code)]

/**
 * Placement core micro-benchmarks.
 *
 * Focus:
 * - Availability queries on a crowded floor (`is_free`, `first_free_anchor`)
 * - Room resize with eviction
 * - Full controller frames driven by the random decorator
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use room_engine::{
    Catalog, Cell, Decorator, Footprint, HeadlessActions, HeadlessController, HeadlessScene,
    ItemId, OccupancyGrid, PlacedItem, RandomDecorator, ResizeRequest, RoomConfig,
};

fn build_crowded_grid(side: u32) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(side, side).expect("positive side");
    let mut next = 1u64;
    for y in (0..side as i32).step_by(3) {
        for x in (0..side as i32).step_by(3) {
            let item = PlacedItem::new(ItemId(next), Footprint::new(2, 2), Cell::new(x, y));
            if grid.try_place(item).is_placed() {
                next += 1;
            }
        }
    }
    grid
}

fn build_room(side: u32, seed: u64) -> HeadlessController {
    let mut room = HeadlessController::new(
        RoomConfig::with_size(side, side),
        Catalog::builtin(),
        HeadlessScene::without_event_log(),
        HeadlessActions::default(),
    )
    .expect("valid room");
    let mut driver = RandomDecorator::new(seed).with_resize_range(side, side);
    for _ in 0..512 {
        let command = driver.next_command(&room);
        let _ = room.apply(command);
    }
    room
}

fn bench_is_free(c: &mut Criterion) {
    let grid = build_crowded_grid(32);
    c.bench_function("grid.is_free.crowded_32", |b| {
        b.iter(|| {
            let mut free = 0u32;
            for y in 0..30 {
                for x in 0..30 {
                    if grid.is_free(black_box(Cell::new(x, y)), Footprint::new(2, 2)) {
                        free += 1;
                    }
                }
            }
            black_box(free)
        });
    });
}

fn bench_first_free_anchor(c: &mut Criterion) {
    let grid = build_crowded_grid(32);
    c.bench_function("grid.first_free_anchor.3x1", |b| {
        b.iter(|| black_box(grid.first_free_anchor(black_box(Footprint::new(3, 1)))));
    });
}

fn bench_resize_room(c: &mut Criterion) {
    c.bench_function("controller.resize_room.shrink_evict", |b| {
        b.iter_batched(
            || build_room(24, 99),
            |mut room| {
                black_box(room.resize_room(ResizeRequest::new(12, 12)).ok());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_random_frames(c: &mut Criterion) {
    c.bench_function("controller.apply.random_256", |b| {
        b.iter_batched(
            || (build_room(16, 20260228), RandomDecorator::new(5)),
            |(mut room, mut driver)| {
                for _ in 0..256 {
                    let command = driver.next_command(&room);
                    black_box(room.apply(command).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    placement_benches,
    bench_is_free,
    bench_first_free_anchor,
    bench_resize_room,
    bench_random_frames
);
criterion_main!(placement_benches);
