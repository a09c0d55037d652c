// Interleaved particle storage.

use driftfield_core::ParticlePool;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn random_pool_is_in_bounds_with_bounded_velocity() {
    let mut rng = StdRng::seed_from_u64(3);
    let pool = ParticlePool::random(10_000, 320.0, 240.0, 5.0, &mut rng);
    assert_eq!(pool.len(), 10_000);
    assert_eq!(pool.as_slice().len(), 40_000);
    for i in 0..pool.len() {
        let [x, y] = pool.position(i);
        let [vx, vy] = pool.velocity(i);
        assert!((0.0..320.0).contains(&x) && (0.0..240.0).contains(&y));
        assert!((-2.5..2.5).contains(&vx) && (-2.5..2.5).contains(&vy));
    }
}

#[test]
fn resize_keeps_the_overlapping_prefix() {
    let mut pool = ParticlePool::from_raw((0..40).map(|v| v as f32).collect());
    pool.resize(5);
    assert_eq!(pool.as_slice(), &(0..20).map(|v| v as f32).collect::<Vec<_>>()[..]);
    pool.resize(7);
    assert_eq!(pool.len(), 7);
    assert_eq!(&pool.as_slice()[20..], &[0.0; 8]);
}

#[test]
fn grow_then_shrink_restores_the_original() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut pool = ParticlePool::random(50, 100.0, 100.0, 5.0, &mut rng);
    let original = pool.as_slice().to_vec();
    pool.grow(25, 100.0, 100.0, &mut rng);
    assert_eq!(pool.len(), 75);
    for i in 50..75 {
        assert_eq!(pool.velocity(i), [0.0, 0.0]);
    }
    assert!(pool.shrink(25));
    assert_eq!(pool.as_slice(), &original[..]);
}

#[test]
fn shrink_refuses_to_empty_the_pool() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut pool = ParticlePool::random(10, 10.0, 10.0, 5.0, &mut rng);
    assert!(!pool.shrink(10));
    assert!(!pool.shrink(20));
    assert_eq!(pool.len(), 10);
}

#[test]
fn zero_sized_canvas_places_everything_at_origin() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut pool = ParticlePool::random(3, 0.0, 0.0, 5.0, &mut rng);
    pool.grow(2, 0.0, 0.0, &mut rng);
    assert!((0..5).all(|i| pool.position(i) == [0.0, 0.0]));
}

#[test]
#[should_panic(expected = "ragged particle buffer")]
fn ragged_raw_buffer_panics() {
    let _ = ParticlePool::from_raw(vec![0.0; 6]);
}
