use crate::constants::FLOATS_PER_PARTICLE;
use rand::Rng;

/// Dense particle storage: `[x, y, vx, vy]` per particle, back to back.
///
/// The layout is uploaded to the GPU as-is. A particle is only its index.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    data: Vec<f32>,
}

impl ParticlePool {
    /// Uniform random positions in `[0, width) x [0, height)` and velocity
    /// components in `[-max_speed/2, max_speed/2)`.
    pub fn random<R: Rng + ?Sized>(
        count: usize,
        width: f32,
        height: f32,
        max_speed: f32,
        rng: &mut R,
    ) -> Self {
        let mut data = Vec::with_capacity(count * FLOATS_PER_PARTICLE);
        for _ in 0..count {
            data.push(random_coord(rng, width));
            data.push(random_coord(rng, height));
            data.push((rng.gen::<f32>() - 0.5) * max_speed);
            data.push((rng.gen::<f32>() - 0.5) * max_speed);
        }
        Self { data }
    }

    /// Wrap an existing interleaved buffer.
    ///
    /// Panics if the length is not a multiple of four.
    pub fn from_raw(data: Vec<f32>) -> Self {
        assert_eq!(data.len() % FLOATS_PER_PARTICLE, 0, "ragged particle buffer");
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / FLOATS_PER_PARTICLE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    pub fn position(&self, i: usize) -> [f32; 2] {
        let j = i * FLOATS_PER_PARTICLE;
        [self.data[j], self.data[j + 1]]
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> [f32; 2] {
        let j = i * FLOATS_PER_PARTICLE;
        [self.data[j + 2], self.data[j + 3]]
    }

    #[inline]
    pub fn set(&mut self, i: usize, pos: [f32; 2], vel: [f32; 2]) {
        let j = i * FLOATS_PER_PARTICLE;
        self.data[j..j + FLOATS_PER_PARTICLE].copy_from_slice(&[pos[0], pos[1], vel[0], vel[1]]);
    }

    /// Replace the buffer with one holding `count` particles, copying the
    /// overlapping prefix. New slots are zeroed.
    pub fn resize(&mut self, count: usize) {
        if count == self.len() {
            return;
        }
        let mut next = vec![0.0_f32; count * FLOATS_PER_PARTICLE];
        let keep = self.data.len().min(next.len());
        next[..keep].copy_from_slice(&self.data[..keep]);
        self.data = next;
    }

    /// Append `batch` particles at random positions with zero velocity.
    pub fn grow<R: Rng + ?Sized>(&mut self, batch: usize, width: f32, height: f32, rng: &mut R) {
        let old = self.len();
        self.resize(old + batch);
        for i in old..old + batch {
            let pos = [random_coord(rng, width), random_coord(rng, height)];
            self.set(i, pos, [0.0, 0.0]);
        }
    }

    /// Drop the last `batch` particles. Ignored unless more than `batch` remain.
    pub fn shrink(&mut self, batch: usize) -> bool {
        let old = self.len();
        if old <= batch {
            return false;
        }
        self.resize(old - batch);
        true
    }
}

#[inline]
fn random_coord<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        let v = rng.gen::<f32>() * extent;
        // gen::<f32>() * extent can round up to extent
        if v >= extent {
            0.0
        } else {
            v
        }
    } else {
        0.0
    }
}
