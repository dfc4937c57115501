// Demo host: scatters an overlapping cluster and relaxes it with the
// collide force, committing `pos += vel; vel *= decay` each tick the way a
// layout engine would.

use collide_force::config;
use collide_force::forces::CollideForce;
use collide_force::init_config::InitConfig;
use collide_force::utils;

fn main() {
    let cfg = if std::path::Path::new("collide.toml").exists() {
        match InitConfig::load_default() {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("collide.toml: {e}");
                InitConfig::default()
            }
        }
    } else {
        InitConfig::default()
    };
    let collide = cfg.collide.unwrap_or_default();
    let layout = cfg.layout.unwrap_or_default();

    let radius = collide.radius.unwrap_or(config::DEFAULT_RADIUS);
    let n = layout.bodies.unwrap_or(config::DEMO_BODY_COUNT);
    let ticks = layout.ticks.unwrap_or(config::DEMO_TICKS);
    let decay = layout.velocity_decay.unwrap_or(config::VELOCITY_DECAY);

    let mut bodies = utils::scatter_disc(n, radius, layout.seed.unwrap_or(0));

    let mut force = CollideForce::new();
    force.set_radius(radius);
    force.set_strength(collide.strength.unwrap_or(config::DEFAULT_STRENGTH));
    force.set_iterations(collide.iterations.unwrap_or(config::DEFAULT_ITERATIONS));
    force.initialize(&bodies);

    println!(
        "{} bodies, radius {}, initial max overlap {:.4}",
        n,
        radius,
        utils::max_overlap(&bodies, radius)
    );

    for tick in 0..ticks {
        force.apply(&mut bodies);
        for body in &mut bodies {
            let vel = body.vel;
            body.pos += vel;
            body.vel = vel * decay;
        }
        if (tick + 1) % 20 == 0 {
            println!(
                "tick {:4}  max overlap {:8.4}",
                tick + 1,
                utils::max_overlap(&bodies, radius)
            );
        }
    }

    #[cfg(feature = "profiling")]
    collide_force::PROFILER.lock().print_and_clear();
}
