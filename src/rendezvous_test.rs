use crate::particle::Particle;
use crate::planet_force::PlanetEphemeris;
use crate::rendezvous::Simulation;
use crate::Vec3;

fn ephemeris() -> PlanetEphemeris {
    PlanetEphemeris {
        inclination: 0.0,
        planet_semi_major_axis: 5.0,
        star_semi_major_axis: 0.005,
        mean_motion: 0.1,
        initial_mean_anomaly: 0.0,
        planet_mass: 1e-3,
        star_mass: 1.0,
    }
}

#[test]
fn test_init_defaults() {
    let sim = Simulation::init();

    assert_eq!(sim.t, 0.0);
    assert_eq!(sim.G, 1.0);
    assert!(sim.particles.is_empty());
    assert!(sim.extras.forces().is_empty());
}

#[test]
fn test_add_partitions_by_mass() {
    let mut sim = Simulation::init();
    sim.add(Particle::at(1.0, 0.0, 0.0));
    sim.add(Particle {
        m: 1.0,
        ..Particle::at(0.0, 0.0, 0.0)
    });
    sim.add(Particle::at(2.0, 0.0, 0.0));

    assert_eq!(sim.particles.n_active(), 1);
    assert_eq!(sim.particles.n_test(), 2);
    assert_eq!(sim.particles[0].m, 1.0);
    assert_eq!(sim.particles.test()[0].x, 1.0);
    assert_eq!(sim.particles.test()[1].x, 2.0);
}

#[test]
fn test_add_ignores_non_finite_position() {
    let mut sim = Simulation::init();
    sim.add(Particle::at(f64::NAN, 0.0, 0.0));

    assert!(sim.particles.is_empty());
}

#[test]
fn test_add_ignores_non_finite_mass() {
    let mut sim = Simulation::init();
    sim.add(Particle {
        m: f64::NAN,
        ..Particle::at(1.0, 0.0, 0.0)
    });
    sim.add(Particle {
        m: f64::INFINITY,
        ..Particle::at(2.0, 0.0, 0.0)
    });

    assert!(sim.particles.is_empty());
}

#[test]
fn test_add_negative_mass_is_massive() {
    let mut sim = Simulation::init();
    sim.add(Particle {
        m: -1.0,
        ..Particle::at(1.0, 0.0, 0.0)
    });

    assert_eq!(sim.particles.len(), 1);
    assert_eq!(sim.particles.active().len(), 1);
    assert_eq!(sim.particles.n_test(), 0);
}

#[test]
fn test_massive_particles_receive_no_force() {
    let mut sim = Simulation::init();
    sim.add(Particle {
        m: 1e-6,
        ..Particle::at(-20.0, 0.0, 0.0)
    });
    sim.add(Particle::at(10.0, 0.0, 0.0));

    let pf = sim.extras.load_force("planet_force").unwrap();
    ephemeris().write_params(&mut pf.params);
    sim.update_acceleration().unwrap();

    let expected = ephemeris().acceleration(0.0, 1.0, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(sim.particles.active()[0].acceleration(), Vec3::zeros());
    assert_eq!(sim.particles.test()[0].acceleration(), expected);
}

#[test]
fn test_update_acceleration_resets_before_applying() {
    let mut sim = Simulation::init();
    sim.t = 2.0;
    sim.G = 0.5;
    sim.add(Particle {
        ax: 100.0,
        ..Particle::at(10.0, 0.0, 0.0)
    });

    let pf = sim.extras.load_force("planet_force").unwrap();
    ephemeris().write_params(&mut pf.params);

    sim.update_acceleration().unwrap();
    let first = sim.particles[0].acceleration();
    sim.update_acceleration().unwrap();

    let expected = ephemeris().acceleration(2.0, 0.5, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(first, expected);
    assert_eq!(sim.particles[0].acceleration(), expected);
    assert_eq!(sim.t, 2.0);
}

#[test]
fn test_update_acceleration_without_forces() {
    let mut sim = Simulation::init();
    sim.add(Particle {
        ay: 3.0,
        ..Particle::at(1.0, 1.0, 1.0)
    });

    sim.update_acceleration().unwrap();

    assert_eq!(sim.particles[0].acceleration(), Vec3::zeros());
}
