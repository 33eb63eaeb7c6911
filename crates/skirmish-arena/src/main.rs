//! skirmish-duel: headless practice duel runner.
//!
//! Runs the agent against a scripted opponent in the practice arena and
//! writes the JSON duel trace to stdout (or a file).
//!
//! Usage:
//!   skirmish-duel [--ticks <n>] [--seed <n>] [--script straight|orbit|random]
//!                 [--output <path>]

use std::fs;
use std::path::PathBuf;
use std::process;

use skirmish_agent::Agent;
use skirmish_arena::arena::{Arena, ArenaConfig};
use skirmish_arena::opponent::OpponentScript;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut ticks: u64 = 600;
    let mut output: Option<PathBuf> = None;
    let mut config = ArenaConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                ticks = parse_value(&args, i);
                i += 2;
            }
            "--seed" => {
                config.seed = parse_value(&args, i);
                i += 2;
            }
            "--script" => {
                config.script = parse_script(arg_value(&args, i));
                i += 2;
            }
            "--output" => {
                output = Some(PathBuf::from(arg_value(&args, i)));
                i += 2;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    let mut agent = Agent::new();
    config.setup = agent.setup();

    let mut arena = Arena::new(config);
    let trace = arena.run(&mut agent, ticks);

    let detections = trace.records.iter().filter(|r| r.detected).count();
    eprintln!(
        "{} ticks, {} detections, {} shots fired",
        trace.records.len(),
        detections,
        trace.shots_fired
    );

    let json = match serde_json::to_string_pretty(&trace) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Failed to serialize trace: {err}");
            process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(err) = fs::write(&path, &json) {
                eprintln!("Failed to write {}: {err}", path.display());
                process::exit(1);
            }
        }
        None => println!("{json}"),
    }
}

fn print_usage() {
    eprintln!(
        "skirmish-duel: headless practice duel runner\n\
         \n\
         Options:\n\
         \n\
           --ticks <n>       Number of ticks to simulate (default: 600)\n\
           --seed <n>        Opponent RNG seed (default: 42)\n\
           --script <name>   Opponent profile: straight, orbit, random\n\
           --output <path>   Write the JSON trace to a file instead of stdout\n\
         \n\
         Examples:\n\
         \n\
           skirmish-duel --ticks 1000 --script random --seed 7\n\
           skirmish-duel --output trace.json\n"
    );
}

/// Value following a `--flag`, or usage + exit if it is missing.
fn arg_value<'a>(args: &'a [String], i: usize) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", args[i]);
            print_usage();
            process::exit(1);
        }
    }
}

/// Parse the numeric value following a `--flag`.
fn parse_value(args: &[String], i: usize) -> u64 {
    let raw = arg_value(args, i);
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid value for {}: {raw}", args[i]);
            process::exit(1);
        }
    }
}

fn parse_script(name: &str) -> OpponentScript {
    match name {
        "straight" => OpponentScript::Straight { speed: 4.0 },
        "orbit" => OpponentScript::Orbit {
            speed: 5.0,
            turn_rate_deg: 3.0,
        },
        "random" => OpponentScript::RandomWalk {
            speed: 5.0,
            max_jitter_deg: 10.0,
        },
        other => {
            eprintln!("Unknown opponent script: {other}");
            print_usage();
            process::exit(1);
        }
    }
}
