use std::ops::{Index, IndexMut};

use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator};

use crate::Vec3;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    pub vx: f64,
    pub vy: f64,
    pub vz: f64,

    pub ax: f64,
    pub ay: f64,
    pub az: f64,

    pub m: f64,
    pub r: f64,

    pub hash: u64,
}

impl Particle {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Particle {
            x,
            y,
            z,
            ..Default::default()
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        Vec3::new(self.ax, self.ay, self.az)
    }

    /// Adds `a` to the acceleration accumulator. Existing contributions
    /// from other forces are kept.
    #[inline]
    pub fn add_acceleration(&mut self, a: Vec3) {
        self.ax += a.x;
        self.ay += a.y;
        self.az += a.z;
    }

    pub fn reset_acceleration(&mut self) {
        self.ax = 0.0;
        self.ay = 0.0;
        self.az = 0.0;
    }
}

/// Massive particles first, followed by test particles.
#[derive(Default, Debug)]
pub struct Particles {
    data: Vec<Particle>,
    n_active: usize,
    n_test: usize,
}

impl Particles {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn n_active(&self) -> usize {
        self.n_active
    }

    pub fn n_test(&self) -> usize {
        self.n_test
    }

    pub fn active(&self) -> &[Particle] {
        &self.data[..self.n_active]
    }

    pub fn test(&self) -> &[Particle] {
        &self.data[self.n_active..]
    }

    pub fn test_mut(&mut self) -> &mut [Particle] {
        &mut self.data[self.n_active..]
    }

    /// Inserts a massive particle after the existing massive ones.
    pub fn push_active(&mut self, p: Particle) {
        self.data.insert(self.n_active, p);
        self.n_active += 1;
    }

    pub fn push_test(&mut self, p: Particle) {
        self.data.push(p);
        self.n_test += 1;
    }

    /// Returns a mutable parallel iterator over all particles.
    pub fn par_iter_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut Particle> {
        self.data.par_iter_mut()
    }
}

impl Index<usize> for Particles {
    type Output = Particle;

    fn index(&self, i: usize) -> &Self::Output {
        debug_assert!(i < self.n_active + self.n_test);
        &self.data[i]
    }
}

impl IndexMut<usize> for Particles {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        debug_assert!(i < self.n_active + self.n_test);
        &mut self.data[i]
    }
}
