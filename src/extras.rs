use crate::error::{Error, Result};
use crate::force::{Force, ForceContext};
use crate::particle::Particle;

/// Forces attached to a simulation, applied in the order they were added.
#[derive(Default, Debug)]
pub struct Extras {
    forces: Vec<Force>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the force called `name` and registers it.
    ///
    /// The returned handle is used to set the force's parameters.
    pub fn load_force(&mut self, name: &str) -> Result<&mut Force> {
        let force = Force::load(name)?;
        self.add_force(force)
    }

    pub fn add_force(&mut self, force: Force) -> Result<&mut Force> {
        if self.forces.iter().any(|f| f.name == force.name) {
            return Err(Error::DuplicateForce { name: force.name });
        }

        log::debug!("adding force '{}' ({:?})", force.name, force.kind);
        self.forces.push(force);

        let last = self.forces.len() - 1;
        Ok(&mut self.forces[last])
    }

    pub fn get_force(&self, name: &str) -> Option<&Force> {
        self.forces.iter().find(|f| f.name == name)
    }

    pub fn get_force_mut(&mut self, name: &str) -> Option<&mut Force> {
        self.forces.iter_mut().find(|f| f.name == name)
    }

    pub fn remove_force(&mut self, name: &str) -> Option<Force> {
        let idx = self.forces.iter().position(|f| f.name == name)?;
        log::debug!("removing force '{name}'");
        Some(self.forces.remove(idx))
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Applies every registered force to `particles`.
    ///
    /// Forces accumulate into a scratch copy. The accelerations in
    /// `particles` are only updated once every force has succeeded, so a
    /// failing force leaves them as they were.
    pub fn apply_forces(&self, t: f64, g: f64, particles: &mut [Particle]) -> Result<()> {
        let mut scratch = particles.to_vec();
        let mut ctx = ForceContext {
            t,
            g,
            particles: &mut scratch,
        };

        for force in &self.forces {
            force.apply(&mut ctx)?;
        }

        for (p, s) in particles.iter_mut().zip(scratch.iter()) {
            p.ax = s.ax;
            p.ay = s.ay;
            p.az = s.az;
        }

        Ok(())
    }
}
