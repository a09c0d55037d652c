//! Counting-sort bucketing of particle indices on the pointer grid.
//!
//! A rebuild is three linear passes: count per cell, prefix-sum into offsets,
//! scatter indices. The arrays are reused across rebuilds and only grow when
//! the population does. Touch marking is separate and cheap: it only walks the
//! cells under the pointer trail's inflated bounding box.

use crate::constants::FLOATS_PER_PARTICLE;
use crate::grid::GridGeometry;
use crate::pool::ParticlePool;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct SpatialBuckets {
    geom: GridGeometry,
    counts: Vec<u32>,
    offsets: Vec<u32>,
    write_ptr: Vec<u32>,
    indices: Vec<u32>,
    indexed: usize,
    touched: Vec<bool>,
    touched_list: Vec<u32>,
    last_rebuild_ms: Option<f64>,
}

impl SpatialBuckets {
    pub fn new(geom: GridGeometry) -> Self {
        let cells = geom.cell_count();
        Self {
            geom,
            counts: vec![0; cells],
            offsets: vec![0; cells + 1],
            write_ptr: vec![0; cells],
            indices: Vec::new(),
            indexed: 0,
            touched: vec![false; cells],
            touched_list: Vec::with_capacity(cells),
            last_rebuild_ms: None,
        }
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geom
    }

    /// Swap in a new grid. Cell arrays are reallocated and the index is
    /// emptied until the next rebuild.
    pub fn set_geometry(&mut self, geom: GridGeometry) {
        let cells = geom.cell_count();
        self.geom = geom;
        self.counts = vec![0; cells];
        self.offsets = vec![0; cells + 1];
        self.write_ptr = vec![0; cells];
        self.touched = vec![false; cells];
        self.touched_list = Vec::with_capacity(cells);
        self.indexed = 0;
        self.invalidate();
    }

    /// Force the next [`rebuild_if_due`](Self::rebuild_if_due) to run.
    #[inline]
    pub fn invalidate(&mut self) {
        self.last_rebuild_ms = None;
    }

    /// Rebuild when `interval_ms` has elapsed since the last rebuild.
    pub fn rebuild_if_due(&mut self, pool: &ParticlePool, now_ms: f64, interval_ms: f64) -> bool {
        let due = match self.last_rebuild_ms {
            Some(last) => now_ms - last >= interval_ms,
            None => true,
        };
        if due {
            self.rebuild(pool);
            self.last_rebuild_ms = Some(now_ms);
        }
        due
    }

    /// Re-bucket every particle from scratch.
    pub fn rebuild(&mut self, pool: &ParticlePool) {
        let n = pool.len();
        let data = pool.as_slice();
        if self.indices.len() < n {
            self.indices.resize(n, 0);
        }

        self.counts.fill(0);
        for p in data.chunks_exact(FLOATS_PER_PARTICLE) {
            self.counts[self.geom.cell_of(p[0], p[1])] += 1;
        }

        self.offsets[0] = 0;
        for c in 0..self.counts.len() {
            self.offsets[c + 1] = self.offsets[c] + self.counts[c];
        }
        self.write_ptr
            .copy_from_slice(&self.offsets[..self.counts.len()]);

        for (i, p) in data.chunks_exact(FLOATS_PER_PARTICLE).enumerate() {
            let cell = self.geom.cell_of(p[0], p[1]);
            let slot = self.write_ptr[cell] as usize;
            self.indices[slot] = i as u32;
            self.write_ptr[cell] += 1;
        }
        self.indexed = n;
    }

    /// Particle indices bucketed into `cell` at the last rebuild.
    #[inline]
    pub fn cell(&self, cell: usize) -> &[u32] {
        if self.indexed == 0 {
            return &[];
        }
        let start = self.offsets[cell] as usize;
        let end = self.offsets[cell + 1] as usize;
        &self.indices[start..end]
    }

    /// Unmark only the cells marked last time.
    pub fn clear_touched(&mut self) {
        for &c in &self.touched_list {
            self.touched[c as usize] = false;
        }
        self.touched_list.clear();
    }

    /// Mark every cell overlapping the box `[min, max]`.
    pub fn mark_touched(&mut self, min: Vec2, max: Vec2) {
        let (c0, r0) = self.geom.cell_coords(min.x, min.y);
        let (c1, r1) = self.geom.cell_coords(max.x, max.y);
        for r in r0..=r1 {
            let base = r * self.geom.cols;
            for c in c0..=c1 {
                let idx = base + c;
                if !self.touched[idx] {
                    self.touched[idx] = true;
                    self.touched_list.push(idx as u32);
                }
            }
        }
    }

    #[inline]
    pub fn touched_cells(&self) -> &[u32] {
        &self.touched_list
    }

    #[inline]
    pub fn is_touched(&self, cell: usize) -> bool {
        self.touched[cell]
    }

    /// Indices in touched cells, skipping any that no longer exist in a pool
    /// of `live` particles.
    pub fn touched_particles(&self, live: usize) -> impl Iterator<Item = usize> + '_ {
        self.touched_list
            .iter()
            .flat_map(move |&c| self.cell(c as usize).iter())
            .map(|&i| i as usize)
            .filter(move |&i| i < live)
    }
}
