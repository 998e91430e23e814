use rendezvousx::{particle::Particle, planet_force::PlanetEphemeris, rendezvous::Simulation};

fn main() -> rendezvousx::Result<()> {
    let mut sim = Simulation::init();

    sim.G = 1.0;

    // A comet just outside the orbit of a Jupiter-mass planet
    sim.add(Particle::at(6.0, 0.0, 0.5));

    let planet = PlanetEphemeris {
        inclination: 0.0,
        planet_semi_major_axis: 5.2,
        star_semi_major_axis: 5.2 * 9.5e-4,
        mean_motion: (1.0f64 / 5.2f64.powi(3)).sqrt(),
        initial_mean_anomaly: 0.0,
        planet_mass: 9.5e-4,
        star_mass: 1.0,
    };

    let pf = sim.extras.load_force("planet_force")?;
    planet.write_params(&mut pf.params);

    for step in 0..8 {
        sim.t = step as f64 * 10.0;
        sim.update_acceleration()?;

        let p = &sim.particles[0];
        let r_p = planet.planet_position(sim.t);
        println!(
            "t = {:6.1}  planet = ({:7.3}, {:7.3})  a = ({:+.6e}, {:+.6e}, {:+.6e})",
            sim.t, r_p.x, r_p.y, p.ax, p.ay, p.az
        );
    }

    Ok(())
}
