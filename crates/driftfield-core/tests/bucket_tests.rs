// Counting-sort pointer buckets.

use driftfield_core::{GridGeometry, ParticlePool, SpatialBuckets};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_pool(count: usize, w: f32, h: f32) -> ParticlePool {
    let mut rng = StdRng::seed_from_u64(11);
    ParticlePool::random(count, w, h, 5.0, &mut rng)
}

#[test]
fn rebuild_covers_every_index_exactly_once() {
    let pool = random_pool(5_000, 800.0, 600.0);
    let geom = GridGeometry::new(25, 40, 800.0, 600.0);
    let mut buckets = SpatialBuckets::new(geom);
    buckets.rebuild(&pool);

    let mut seen = vec![0u32; pool.len()];
    for cell in 0..geom.cell_count() {
        for &i in buckets.cell(cell) {
            seen[i as usize] += 1;
            let [x, y] = pool.position(i as usize);
            assert_eq!(geom.cell_of(x, y), cell, "particle {i} in wrong cell");
        }
    }
    assert!(seen.iter().all(|&n| n == 1));
}

#[test]
fn empty_until_first_rebuild() {
    let geom = GridGeometry::new(4, 4, 100.0, 100.0);
    let buckets = SpatialBuckets::new(geom);
    assert!((0..geom.cell_count()).all(|c| buckets.cell(c).is_empty()));
}

#[test]
fn rebuild_respects_interval_and_invalidate() {
    let pool = random_pool(100, 200.0, 200.0);
    let mut buckets = SpatialBuckets::new(GridGeometry::new(5, 5, 200.0, 200.0));
    assert!(buckets.rebuild_if_due(&pool, 0.0, 50.0));
    assert!(!buckets.rebuild_if_due(&pool, 30.0, 50.0));
    assert!(buckets.rebuild_if_due(&pool, 50.0, 50.0));
    buckets.invalidate();
    assert!(buckets.rebuild_if_due(&pool, 51.0, 50.0));
}

#[test]
fn touched_cells_follow_the_box_and_clear() {
    let geom = GridGeometry::new(10, 10, 100.0, 100.0);
    let mut buckets = SpatialBuckets::new(geom);
    buckets.mark_touched(Vec2::new(15.0, 25.0), Vec2::new(34.0, 44.0));
    // columns 1..=3, rows 2..=4
    assert_eq!(buckets.touched_cells().len(), 9);
    assert!(buckets.is_touched(2 * 10 + 1));
    assert!(buckets.is_touched(4 * 10 + 3));
    assert!(!buckets.is_touched(0));

    // overlapping marks do not duplicate
    buckets.mark_touched(Vec2::new(15.0, 25.0), Vec2::new(15.0, 25.0));
    assert_eq!(buckets.touched_cells().len(), 9);

    buckets.clear_touched();
    assert!(buckets.touched_cells().is_empty());
    assert!(!buckets.is_touched(2 * 10 + 1));
}

#[test]
fn box_past_the_canvas_clamps_to_edge_cells() {
    let geom = GridGeometry::new(4, 4, 100.0, 100.0);
    let mut buckets = SpatialBuckets::new(geom);
    buckets.mark_touched(Vec2::new(-500.0, -500.0), Vec2::new(500.0, 500.0));
    assert_eq!(buckets.touched_cells().len(), 16);
}

#[test]
fn touched_particles_only_yield_live_indices_in_marked_cells() {
    let pool = random_pool(1_000, 100.0, 100.0);
    let geom = GridGeometry::new(10, 10, 100.0, 100.0);
    let mut buckets = SpatialBuckets::new(geom);
    buckets.rebuild(&pool);
    buckets.mark_touched(Vec2::new(0.0, 0.0), Vec2::new(29.0, 29.0));

    let all: Vec<usize> = buckets.touched_particles(pool.len()).collect();
    assert!(!all.is_empty());
    for &i in &all {
        let [x, y] = pool.position(i);
        assert!(x < 30.0 && y < 30.0);
    }

    // after a shrink, stale indices past the live count are skipped
    let live = 500;
    assert!(buckets.touched_particles(live).all(|i| i < live));
    assert!(buckets.touched_particles(live).count() < all.len());
}

#[test]
fn set_geometry_resets_the_index() {
    let pool = random_pool(200, 100.0, 100.0);
    let mut buckets = SpatialBuckets::new(GridGeometry::new(2, 2, 100.0, 100.0));
    buckets.rebuild(&pool);
    buckets.set_geometry(GridGeometry::new(3, 3, 100.0, 100.0));
    assert_eq!(buckets.geometry().cell_count(), 9);
    assert!((0..9).all(|c| buckets.cell(c).is_empty()));
    buckets.rebuild(&pool);
    let total: usize = (0..9).map(|c| buckets.cell(c).len()).sum();
    assert_eq!(total, 200);
}
