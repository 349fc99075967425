//! Headless Candy Crush runner (default binary).
//!
//! Deals a board, then plays random legal swaps through the animated
//! resolution cycle, printing one JSON line per engine event on stdout.
//! Logging goes to stderr via `RUST_LOG`.
//!
//! ```text
//! candy-crush [--moves N]
//! ```

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Serialize;

use candy_crush::core::{BoardSnapshot, CandyRng, Mask, MaskSnapshot};
use candy_crush::engine::{Engine, EngineConfig, EngineHooks};
use candy_crush::types::Action;

const DEFAULT_MOVES: u32 = 10;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Event {
    Dealt { board: BoardSnapshot },
    Turn { turn: u32, action: Action },
    Exploded { changed: bool, mask: MaskSnapshot },
    Fallen { mask: MaskSnapshot },
    Refilling,
    Filled { mask: MaskSnapshot },
    Score { score: u32 },
    Idle,
    Finished { turns: u32, board: BoardSnapshot },
}

fn emit(event: &Event) {
    match serde_json::to_string(event) {
        Ok(line) => println!("{}", line),
        Err(e) => log::error!("failed to encode event: {}", e),
    }
}

/// Prints every hook as an event line and sleeps between phases.
struct EventPrinter {
    pause: Duration,
}

impl EngineHooks for EventPrinter {
    fn on_changed_after_explode(&self, changed: bool, exploded: &Mask) {
        emit(&Event::Exploded {
            changed,
            mask: MaskSnapshot::from(exploded),
        });
    }

    fn on_explode_finished(&self, fallen: &Mask) {
        emit(&Event::Fallen {
            mask: MaskSnapshot::from(fallen),
        });
    }

    fn on_explode_finished_no_change(&self) {
        emit(&Event::Idle);
    }

    fn on_fall_finished(&self, filled: &Mask) {
        emit(&Event::Filled {
            mask: MaskSnapshot::from(filled),
        });
    }

    fn on_add_missing_candies(&self) {
        emit(&Event::Refilling);
    }

    fn on_score_updated(&self, score: u32) {
        emit(&Event::Score { score });
    }

    fn delay(&self) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(self.pause)
    }
}

fn parse_moves(args: &[String]) -> Result<u32> {
    let mut moves = DEFAULT_MOVES;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --moves"))?;
                moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --moves value: {}", v))?;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(moves)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let moves = parse_moves(&args)?;

    let config = EngineConfig::from_env();
    let mut rng = CandyRng::new(config.seed);
    let hooks = EventPrinter {
        pause: config.animation_delay(),
    };
    let engine = Engine::new(config, hooks)?;

    engine.init_random()?;
    emit(&Event::Dealt {
        board: engine.state().snapshot(),
    });

    let mut turns = 0;
    for turn in 1..=moves {
        let legal: Vec<Action> = engine
            .find_valid_moves()
            .into_iter()
            .filter(|&a| engine.is_valid_action(a).is_ok())
            .collect();
        let Some(&action) = rng.pick(&legal) else {
            log::info!("no legal swaps left after {} turns", turns);
            break;
        };

        emit(&Event::Turn { turn, action });
        engine.swap_and_resolve(action).await?;
        turns = turn;
    }

    emit(&Event::Finished {
        turns,
        board: engine.state().snapshot(),
    });
    log::info!("final score {}", engine.score());
    Ok(())
}
