use strata_stream::{Viewport, WorldRuntime};
use strata_world::WorldGenConfig;

const VIEW: Viewport = Viewport {
    width: 1000.0,
    height: 700.0,
};

fn runtime(seed: i32) -> WorldRuntime {
    WorldRuntime::new(seed, VIEW, &WorldGenConfig::default())
}

#[test]
fn startup_materializes_the_full_initial_window() {
    let rt = runtime(42);
    let (min_x, max_x) = rt.bounds();
    let block = rt.block_size();
    for gx in (min_x..max_x).step_by(block as usize) {
        assert!(
            rt.ground().column_top(gx).is_some(),
            "missing ground column at {gx}"
        );
    }
    // Ground columns = window width in blocks, each `terrain_depth` deep.
    let cols = ((max_x - min_x) / block) as usize;
    assert_eq!(rt.ground().len(), cols * 20);
}

#[test]
fn walking_right_keeps_the_frontier_gap_free() {
    let mut rt = runtime(42);
    let block = rt.block_size();
    let mut vx = VIEW.width / 2.0;
    for _ in 0..600 {
        vx += 12.0;
        rt.step(1.0 / 60.0, vx);
        let (min_x, max_x) = rt.bounds();
        assert!(min_x <= max_x);
        // Everything inside the tracked frontier is materialized.
        for gx in (min_x..max_x).step_by(block as usize) {
            assert!(
                rt.ground().column_top(gx).is_some(),
                "gap at {gx} inside [{min_x}, {max_x})"
            );
        }
    }
}

#[test]
fn long_travel_evicts_behind_the_left_boundary() {
    let mut rt = runtime(42);
    let mut vx = VIEW.width / 2.0;
    for _ in 0..2000 {
        vx += 15.0;
        rt.step(1.0 / 60.0, vx);
    }
    assert!(rt.evicted_total() > 0, "nothing evicted over a long walk");
    // The world far behind the viewpoint is gone.
    assert!(rt.ground().column_top(0).is_none());
    assert!(rt.ground().column_top(-120).is_none());
    // The materialized set stays bounded: roughly the window plus the
    // strip between frontier and evictors.
    let (min_x, max_x) = rt.bounds();
    let cols = ((max_x - min_x) / rt.block_size()) as usize;
    assert!(rt.ground().len() <= (cols + 40) * 20);
}

#[test]
fn reversal_does_not_destroy_or_duplicate() {
    let mut rt = runtime(7);
    let mut vx = VIEW.width / 2.0;
    for _ in 0..200 {
        vx += 12.0;
        rt.step(1.0 / 60.0, vx);
    }
    let len_at_turn = rt.ground().len();
    // Walk back over ground that is still materialized: the shrunken
    // frontier must not regenerate it.
    for _ in 0..50 {
        vx -= 12.0;
        rt.step(1.0 / 60.0, vx);
    }
    assert!(
        rt.ground().len() <= len_at_turn,
        "re-entry duplicated blocks"
    );
}

#[test]
fn exposed_queries_are_stable_and_spawn_is_tree_free() {
    let mut rt = runtime(42);
    let h = rt.height_at(123.0);
    assert_eq!(h.to_bits(), rt.height_at(123.0).to_bits());
    let gx = rt.spawn_column();
    assert_eq!(gx.rem_euclid(rt.block_size()), 0);
    assert!(!rt.tree_exists_at(gx));
    assert!(!rt.tree_exists_at(gx + rt.block_size()));
}

#[test]
fn same_seed_worlds_agree_after_identical_walks() {
    let mut a = runtime(99);
    let mut b = runtime(99);
    let mut vx = VIEW.width / 2.0;
    for _ in 0..300 {
        vx += 10.0;
        a.step(1.0 / 60.0, vx);
        b.step(1.0 / 60.0, vx);
    }
    assert_eq!(a.ground().len(), b.ground().len());
    assert_eq!(a.trunks().len(), b.trunks().len());
    assert_eq!(a.leaves().len(), b.leaves().len());
    let (amin, amax) = a.bounds();
    assert_eq!((amin, amax), b.bounds());
    for gx in (amin..amax).step_by(a.block_size() as usize) {
        assert_eq!(a.ground().column_top(gx), b.ground().column_top(gx));
        assert_eq!(a.trunks().column_top(gx), b.trunks().column_top(gx));
    }
}
