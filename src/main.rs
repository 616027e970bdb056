//! Countdown driver entry point.
//!
//! A headless rendition of a game object that owns an interval timer and
//! decrements a counter on each tick. The frame loop supplies the time, the
//! timer decides when a second has passed, and the countdown text is printed
//! on every tick until it reads "Yay it's over!".
//!
//! # Main Loop
//!
//! 1. Load `timer.ini` (defaults if missing) and apply command-line overrides
//! 2. Build the ECS world: `WorldTime`, `WorldSignals`, countdown entity
//! 3. Each frame:
//!    - advance `WorldTime` by the real (or simulated) frame delta
//!    - poll interval timers; ticks trigger the countdown observer
//!    - print the countdown text for every tick received
//! 4. Exit once the `countdown_over` flag is set
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --countdown 10
//! cargo run --release -- --simulate --jitter 0.3 --seed 7 --json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use intervaltimer::components::intervaltimer::IntervalTimer;
use intervaltimer::game;
use intervaltimer::resources::timerconfig::TimerConfig;
use intervaltimer::resources::worldsignals::WorldSignals;
use intervaltimer::resources::worldtime::WorldTime;
use intervaltimer::systems::countdown::{COUNTDOWN_OVER_FLAG, COUNTDOWN_TEXT_SIGNAL};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Headless countdown driven by a polling interval timer
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file (default: ./timer.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Interval between ticks in milliseconds.
    #[arg(long, value_name = "MS")]
    duration_ms: Option<f32>,

    /// Value the countdown starts from.
    #[arg(long, value_name = "N")]
    countdown: Option<i32>,

    /// Frames per second of the driving loop.
    #[arg(long, value_name = "N")]
    fps: Option<u32>,

    /// Multiplier applied to every frame delta.
    #[arg(long, value_name = "X")]
    time_scale: Option<f32>,

    /// Relative random variation of the frame delta (0.0 to 1.0).
    #[arg(long, value_name = "X")]
    jitter: Option<f32>,

    /// Step with fixed frame deltas instead of sleeping in real time.
    #[arg(long)]
    simulate: bool,

    /// Seed for the frame jitter.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Stop after this many frames even if the countdown is not over.
    #[arg(long, value_name = "N")]
    max_frames: Option<u64>,

    /// Print the timer state as JSON after every tick.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut TimerConfig) {
        if let Some(ms) = self.duration_ms {
            config.duration_ms = ms;
        }
        if let Some(countdown) = self.countdown {
            config.countdown = countdown;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(scale) = self.time_scale {
            config.time_scale = scale;
        }
        if let Some(jitter) = self.jitter {
            config.jitter = jitter;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TimerConfig::with_path(path),
        None => TimerConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }
    cli.apply_overrides(&mut config);

    // Early-exit: persist the effective configuration and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    run(&cli, &config);
}

/// Scale `base` by a random factor in `1 ± jitter`.
fn jittered(base: f32, jitter: f32, rng: &mut fastrand::Rng) -> f32 {
    let jitter = jitter.clamp(0.0, 1.0);
    base * (1.0 + jitter * (rng.f32() * 2.0 - 1.0))
}

fn run(cli: &Cli, config: &TimerConfig) {
    let mut world = World::new();
    let entity = game::setup(&mut world, config);
    let mut schedule = game::build_schedule();

    let Some(ticks) = world
        .get_mut::<IntervalTimer>(entity)
        .map(|mut timer| timer.subscribe())
    else {
        log::error!("Countdown entity has no interval timer");
        return;
    };

    if let Some(text) = world.resource::<WorldSignals>().get_string(COUNTDOWN_TEXT_SIGNAL) {
        println!("{}", text);
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let base_dt = config.frame_delta();
    let mut last = Instant::now();

    loop {
        let frame_count = world.resource::<WorldTime>().frame_count;
        if cli.max_frames.is_some_and(|max| frame_count >= max) {
            log::warn!("Stopped after {} frames before the countdown finished", frame_count);
            break;
        }

        let budget = jittered(base_dt, config.jitter, &mut rng);
        let dt = if cli.simulate {
            budget
        } else {
            let spent = last.elapsed();
            let budget = Duration::from_secs_f32(budget.max(0.0));
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            dt
        };

        game::frame(&mut world, &mut schedule, dt);

        for _tick in ticks.try_iter() {
            if let Some(text) = world.resource::<WorldSignals>().get_string(COUNTDOWN_TEXT_SIGNAL) {
                println!("{}", text);
            }
            if cli.json {
                if let Some(timer) = world.get::<IntervalTimer>(entity) {
                    match serde_json::to_string(&timer.snapshot()) {
                        Ok(json) => println!("{}", json),
                        Err(e) => log::error!("Failed to serialize timer state: {}", e),
                    }
                }
            }
        }

        if world.resource::<WorldSignals>().has_flag(COUNTDOWN_OVER_FLAG) {
            let wt = world.resource::<WorldTime>();
            log::info!(
                "Countdown over after {} frames ({:.2}s world time)",
                wt.frame_count,
                wt.elapsed
            );
            break;
        }
    }
}
