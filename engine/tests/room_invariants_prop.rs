// engine/tests/room_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the occupancy grid and the placement controller.
 *
 * Purpose:
 * - Provide fuzz-like coverage using generated floors, footprints and seeds.
 * - Lock invariants that must hold regardless of which commands a driver issues.
 *
 * Invariants covered:
 * - On an empty floor `is_free` is exactly "the rectangle fits the bounds".
 * - `try_place` then `remove` round-trips the free set.
 * - Footprint rotation swaps axes and is an involution.
 * - Resize keeps every fitting occupant at its anchor with identical cells.
 * - Under random decorator sessions the cell table and occupant set agree, the selected
 *   item is never in the grid, live visuals match the item count, and `cancel_movement`
 *   always returns the selection to its saved placement.
 */
use proptest::prelude::*;
use room_engine::{
    Catalog, Cell, Decorator, Footprint, HeadlessActions, HeadlessController, HeadlessScene,
    ItemId, OccupancyGrid, PlaceOutcome, PlacedItem, RandomDecorator, RoomConfig, RoomView,
};

fn assert_grid_consistent(grid: &OccupancyGrid) {
    let mut expected = 0usize;
    for item in grid.occupants() {
        assert!(
            item.footprint
                .fits_within(item.anchor, grid.width(), grid.height()),
            "{} out of bounds",
            item.id
        );
        for cell in item.cells() {
            assert_eq!(grid.occupant_at(cell), Some(item.id));
        }
        expected += item.footprint.area() as usize;
    }
    assert_eq!(grid.occupied_cells(), expected, "stray cells in the table");
}

fn assert_room_consistent(room: &HeadlessController) {
    assert_grid_consistent(room.grid());
    let selected = room.selected_id();
    if let Some(id) = selected {
        assert!(room.grid().occupant(id).is_none());
        assert!(room.context_actions().visible);
    } else {
        assert!(!room.context_actions().visible);
    }
    assert_eq!(
        room.visuals().live_count(),
        room.grid().occupant_count() + usize::from(selected.is_some())
    );
}

/// Greedily places candidates, skipping those that collide.
fn populate(grid: &mut OccupancyGrid, candidates: &[(i32, i32, u32, u32)]) -> Vec<PlacedItem> {
    let mut placed = Vec::new();
    for (n, &(x, y, w, h)) in candidates.iter().enumerate() {
        let item = PlacedItem::new(ItemId(n as u64 + 1), Footprint::new(w, h), Cell::new(x, y));
        if grid.try_place(item) == PlaceOutcome::Placed {
            placed.push(item);
        }
    }
    placed
}

fn candidates() -> impl Strategy<Value = Vec<(i32, i32, u32, u32)>> {
    prop::collection::vec((-1i32..12, -1i32..12, 1u32..5, 1u32..5), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn empty_floor_free_iff_in_bounds(
        w in 1u32..16,
        h in 1u32..16,
        x in -3i32..18,
        y in -3i32..18,
        fw in 1u32..6,
        fh in 1u32..6,
    ) {
        let grid = OccupancyGrid::new(w, h).expect("positive dims");
        let fp = Footprint::new(fw, fh);
        let anchor = Cell::new(x, y);
        let in_bounds = x >= 0 && y >= 0 && x as u32 + fw <= w && y as u32 + fh <= h;
        prop_assert_eq!(grid.is_free(anchor, fp), in_bounds);
        prop_assert_eq!(grid.check(anchor, fp).is_ok(), in_bounds);
    }

    #[test]
    fn place_then_remove_restores_free_set(
        w in 2u32..12,
        h in 2u32..12,
        items in candidates(),
    ) {
        let mut grid = OccupancyGrid::new(w, h).expect("positive dims");
        let placed = populate(&mut grid, &items);
        assert_grid_consistent(&grid);

        for item in &placed {
            prop_assert!(!grid.is_free(item.anchor, item.footprint));
            for cell in item.cells() {
                prop_assert!(!grid.is_free(cell, Footprint::UNIT));
            }
        }
        for item in &placed {
            prop_assert_eq!(grid.remove(item.id), Some(*item));
            prop_assert!(grid.is_free(item.anchor, item.footprint));
            prop_assert_eq!(grid.remove(item.id), None);
        }
        prop_assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn rejected_place_leaves_grid_untouched(
        items in candidates(),
        probe in (-2i32..12, -2i32..12, 1u32..6, 1u32..6),
    ) {
        let mut grid = OccupancyGrid::new(10, 10).expect("positive dims");
        populate(&mut grid, &items);
        let before = grid.render_ascii();

        let (x, y, w, h) = probe;
        let item = PlacedItem::new(ItemId(10_000), Footprint::new(w, h), Cell::new(x, y));
        let free = grid.is_free(item.anchor, item.footprint);
        match grid.try_place(item) {
            PlaceOutcome::Placed => prop_assert!(free),
            PlaceOutcome::Rejected { item: back, reason } => {
                prop_assert!(!free);
                prop_assert_eq!(back, item);
                prop_assert_eq!(grid.check(item.anchor, item.footprint), Err(reason));
                prop_assert_eq!(grid.render_ascii(), before);
            }
        }
    }

    #[test]
    fn rotation_swaps_axes_and_is_an_involution(w in 1u32..20, h in 1u32..20) {
        let fp = Footprint::new(w, h);
        prop_assert_eq!(fp.rotated(), Footprint::new(h, w));
        prop_assert_eq!(fp.rotated().rotated(), fp);
        prop_assert_eq!(fp.rotated().area(), fp.area());
    }

    #[test]
    fn resize_keeps_fitting_occupants_by_coordinate(
        items in candidates(),
        new_w in 1u32..14,
        new_h in 1u32..14,
    ) {
        let mut grid = OccupancyGrid::new(10, 10).expect("positive dims");
        let placed = populate(&mut grid, &items);

        let outside = grid.occupants_outside(new_w, new_h);
        for id in &outside {
            prop_assert!(grid.remove(*id).is_some());
        }
        grid.resize(new_w, new_h).expect("positive dims");
        assert_grid_consistent(&grid);

        for item in &placed {
            let fits = item.footprint.fits_within(item.anchor, new_w, new_h);
            prop_assert_eq!(outside.contains(&item.id), !fits);
            if fits {
                prop_assert_eq!(grid.occupant(item.id), Some(item));
                for cell in item.cells() {
                    prop_assert_eq!(grid.occupant_at(cell), Some(item.id));
                }
            } else {
                prop_assert!(grid.occupant(item.id).is_none());
            }
        }
    }

    #[test]
    fn random_sessions_keep_room_invariants(
        seed in any::<u64>(),
        frames in 1usize..400,
        side in 3u32..10,
    ) {
        let mut room = HeadlessController::new(
            RoomConfig::with_size(side, side),
            Catalog::builtin(),
            HeadlessScene::without_event_log(),
            HeadlessActions::default(),
        )
        .expect("valid room");
        let mut driver = RandomDecorator::new(seed).with_resize_range(2, 12);

        for _ in 0..frames {
            let command = driver.next_command(&room);
            // Resize requests are always positive, and every other command is infallible
            // apart from a full floor on add.
            let _ = room.apply(command);
            assert_room_consistent(&room);

            if let Some(sel) = room.selection() {
                let id = sel.item().id;
                let saved = *sel.saved();
                let mut probe = room.clone();
                prop_assert!(probe.cancel_movement());
                prop_assert!(!probe.is_selected());
                let restored = probe.grid().occupant(id).copied();
                prop_assert_eq!(restored.map(|i| i.anchor), Some(saved.anchor));
                prop_assert_eq!(restored.map(|i| i.footprint), Some(saved.footprint));
                assert_room_consistent(&probe);
            }
        }
    }
}
