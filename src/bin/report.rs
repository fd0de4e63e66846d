//! Report binary: runs one tournament and prints fixtures and results.
//! Run with: cargo run --bin report
//! Configure with env: PLAYERS (default 12), TEAMS (comma-separated labels,
//! default red,blue,green), ROUNDS (default 3), SEED (u64, optional; omit for
//! an entropy-seeded run), JSON (set to emit machine-readable output).

use coin_toss_tournament::{play_rounds, schedule_rounds, Outcome, Scheduler};
use std::env;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let player_count: usize = env_or("PLAYERS", 12);
    let teams_raw = env::var("TEAMS").unwrap_or_else(|_| "red,blue,green".to_string());
    let labels: Vec<&str> = teams_raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let rounds: usize = env_or("ROUNDS", 3);
    let seed: Option<u64> = env::var("SEED").ok().and_then(|v| v.parse().ok());

    let result = match seed {
        Some(seed) => Scheduler::with_seed(player_count, &labels, seed),
        None => Scheduler::new(player_count, &labels),
    };
    let mut scheduler = match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot start tournament: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Scheduling {} round(s) for {} player(s) across {} team(s)",
        rounds,
        player_count,
        scheduler.teams.len()
    );
    schedule_rounds(&mut scheduler, rounds);
    play_rounds(&mut scheduler, rounds);

    if env::var("JSON").is_ok() {
        let report = serde_json::json!({
            "fixtures": scheduler.fixtures(),
            "teams": scheduler.team_summaries(),
        });
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        return;
    }

    for (i, round) in scheduler.fixtures().iter().enumerate() {
        println!("Round {}", i + 1);
        for &(a, b) in &round.pairs {
            let (pa, pb) = (&scheduler.players[a], &scheduler.players[b]);
            let verdict = match pa.results.get(i) {
                Some(Outcome::Won) => format!("{} won", pa.name),
                Some(Outcome::Lost) => format!("{} won", pb.name),
                _ => "not played".to_string(),
            };
            println!("  {} vs {} -> {}", pa.name, pb.name, verdict);
        }
        for &id in &round.unpaired {
            println!("  {} sat out", scheduler.players[id].name);
        }
    }

    println!();
    for team in scheduler.team_summaries() {
        let wins: usize = team
            .players
            .iter()
            .flat_map(|p| &p.results)
            .filter(|&&r| r == Outcome::Won)
            .count();
        println!(
            "Team {}: {} player(s), {} win(s)",
            team.label, team.total_players, wins
        );
    }
}
