use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use strata_stream::{Viewport, WorldRuntime};
use strata_world::WorldGenConfig;

/// Headless driver: builds a world and walks a viewpoint through it,
/// logging window movement, generation, and eviction.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sliding-window procedural 2D world simulator")]
struct Args {
    /// World seed; drawn from the clock if omitted.
    #[arg(long)]
    seed: Option<i32>,
    /// Viewport width in world units.
    #[arg(long, default_value_t = 1000.0)]
    width: f32,
    /// Viewport height in world units.
    #[arg(long, default_value_t = 700.0)]
    height: f32,
    /// Ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    steps: u32,
    /// Horizontal viewpoint speed, world units per tick.
    #[arg(long, default_value_t = 8.0)]
    speed: f32,
    /// Simulated time per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Optional worldgen TOML; defaults apply for absent fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => WorldGenConfig::load_from_path(path)?,
        None => WorldGenConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let viewport = Viewport {
        width: args.width,
        height: args.height,
    };

    let mut world = WorldRuntime::new(seed, viewport, &cfg);
    let spawn = world.spawn_column();
    log::info!(
        "seed={} spawn column {} at surface {}",
        seed,
        spawn,
        world.surface_y(spawn)
    );

    let mut vx = spawn as f32;
    for tick in 0..args.steps {
        vx += args.speed;
        world.step(args.dt, vx);
        if tick % 300 == 0 {
            let (min_x, max_x) = world.bounds();
            log::info!(
                "[tick {}] vx={:.0} window [{}, {}] ground={} trunks={} leaves={} evicted={}",
                tick,
                vx,
                min_x,
                max_x,
                world.ground().len(),
                world.trunks().len(),
                world.leaves().len(),
                world.evicted_total()
            );
        }
    }

    let (min_x, max_x) = world.bounds();
    log::info!(
        "done: {} ticks, window [{}, {}], {} entities evicted",
        args.steps,
        min_x,
        max_x,
        world.evicted_total()
    );
    Ok(())
}

fn clock_seed() -> i32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as i32 ^ d.as_secs() as i32)
        .unwrap_or(0)
}
