//! Crossing entry point
//!
//! Headless native runner: an autopilot walks the player up the field while
//! the simulation runs, and events are printed as text.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::Context;
    use clap::Parser;

    use crossing::sim::{CollisionDetector, GameEvent, Player, Simulation, TickOutcome};
    use crossing::{GameConfig, Scoreboard};

    /// Run the crossing simulation with an autopilot player
    #[derive(Parser, Debug)]
    #[command(name = "crossing", version, about)]
    pub struct Args {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON config file (defaults if omitted)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Stop a run after this many ticks
        #[arg(long, default_value_t = 100_000)]
        max_ticks: u64,
        /// Number of runs to play; each game over starts a fresh run
        #[arg(long, default_value_t = 1)]
        runs: u32,
        /// Autopilot tries to step forward every N ticks
        #[arg(long, default_value_t = 12)]
        step_every: u64,
        /// Sleep the current tick interval between ticks
        #[arg(long)]
        realtime: bool,
    }

    /// Look-ahead footprint the autopilot keeps clear before stepping
    const CAUTION_SIZE: f32 = 60.0;

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Crossing starting with seed: {}", seed);

        let mut player = Player::new(config.player_start);
        let lookahead = CollisionDetector::new(CAUTION_SIZE);
        let step = config.player_step;
        let mut sim = Simulation::new(config, seed).context("building simulation")?;
        let mut board = Scoreboard::new();
        let step_every = args.step_every.max(1);

        for run in 1..=args.runs.max(1) {
            if run > 1 {
                sim.reset(&mut player);
            }
            play_run(&mut sim, &mut player, &mut board, &lookahead, &args, step, step_every);
        }

        println!("{}", board.session_text());
        Ok(())
    }

    fn play_run(
        sim: &mut Simulation,
        player: &mut Player,
        board: &mut Scoreboard,
        lookahead: &CollisionDetector,
        args: &Args,
        step: f32,
        step_every: u64,
    ) {
        for t in 0..args.max_ticks {
            if t % step_every == 0 {
                let mut next = player.pos;
                next.y += step;
                if !lookahead.check(next, sim.registry()) {
                    player.move_up(step);
                }
            }

            let outcome = sim.tick(player);

            for event in sim.drain_events() {
                if let GameEvent::ObstacleSpawned { id, color, .. } = &event {
                    log::debug!("{} obstacle {:?} entered", color.as_str(), id);
                }
                if board.apply(&event) {
                    match event {
                        GameEvent::GameOverDisplay { .. } => {
                            for line in board.game_over_lines() {
                                println!("{line}");
                            }
                            if board.new_best && board.runs > 1 {
                                println!("New session best!");
                            }
                        }
                        _ => println!("{}", board.level_text()),
                    }
                }
            }

            if let TickOutcome::GameOver(level) = outcome {
                log::info!("Run ended at level {} (tick {})", level, t + 1);
                return;
            }

            if args.realtime {
                std::thread::sleep(Duration::from_secs_f64(sim.progression().tick_interval));
            }
        }

        println!("Tick limit reached at {}", board.level_text());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
