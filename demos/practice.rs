//! Play a practice session in the terminal.
//!
//! Run with: `cargo run --example practice -- --mode normal --questions 5`
//!
//! Answers are read line by line from stdin. In Simple mode type the value
//! or its option number (1-3; a value that is itself an option wins); in
//! Normal mode type the product. An empty
//! line or `q` aborts the session. Set `RUST_LOG=times_drill=debug` to see the
//! engine's events on stderr.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use clap::Parser;
use times_drill::{
    parse_answer, resolve_choice, stats_line, summary_view, GameMode, MenuForm, PracticeSession,
    Problem,
};
use tracing_subscriber::EnvFilter;

/// Timer cadence; fine enough for whole-second countdowns.
const TICK: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "practice")]
#[command(about = "Timed multiplication practice")]
struct Args {
    /// Largest factor (1-50)
    #[arg(short, long, default_value = "10")]
    range: String,

    /// Number of questions (1-100)
    #[arg(short, long, default_value = "10")]
    questions: String,

    /// Time limit in seconds (5-300)
    #[arg(short, long, default_value = "30")]
    time: String,

    /// "simple" (pick one of three) or "normal" (type the answer)
    #[arg(short, long, default_value = "simple")]
    mode: String,

    /// Seed for a reproducible problem sequence
    #[arg(long)]
    seed: Option<u64>,
}

fn show(problem: &Problem) {
    println!();
    println!("  {problem} = ?");
    if let Some(options) = problem.options {
        for (i, opt) in options.iter().enumerate() {
            println!("    [{}] {opt}", i + 1);
        }
    }
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "times_drill=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let form = MenuForm {
        table_range: args.range,
        questions: args.questions,
        time_limit: args.time,
        mode: args.mode,
    };
    let mut settings = form.to_settings()?;
    settings.rng_seed = args.seed;

    println!("Multiplication practice: {} questions, {}s, {}",
        settings.max_questions, settings.time_limit, settings.game_mode);
    if settings.game_mode == GameMode::Simple {
        println!("Type 1-3 to pick an option. Empty line or q quits.");
    } else {
        println!("Type the product. Empty line or q quits.");
    }

    // Stdin blocks, so it lives on its own thread; the session itself is
    // only touched from this one.
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut session = PracticeSession::new();
    let first = session.start(settings)?;
    show(&first);
    let mut last_second = u64::MAX;

    while !session.is_ended() {
        match rx.recv_timeout(TICK) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
                    session.abort()?;
                    break;
                }
                let options = session.current_problem().and_then(|p| p.options);
                let Some(value) = parse_answer(trimmed).map(|v| resolve_choice(v, options)) else {
                    print!("numbers only > ");
                    let _ = io::stdout().flush();
                    continue;
                };
                match session.submit_answer(value) {
                    Ok(outcome) => {
                        if outcome.correct {
                            println!("  correct!");
                        } else {
                            println!("  no, it was {}", outcome.expected);
                        }
                        println!("  {}", stats_line(&session));
                        if let Some(next) = outcome.next_problem {
                            show(&next);
                        }
                    }
                    Err(err) => println!("  {err}"),
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let status = session.tick_now()?;
                let second = status.remaining_time.floor() as u64;
                if !status.is_ended && second != last_second && second % 10 == 0 && second > 0 {
                    println!("\n  {}", stats_line(&session));
                    print!("> ");
                    let _ = io::stdout().flush();
                }
                last_second = second;
            }
            Err(RecvTimeoutError::Disconnected) => {
                session.abort()?;
            }
        }
    }

    if let Some(reason) = session.end_reason() {
        println!();
        println!("Session complete ({reason})");
    }
    let summary = summary_view(&session.results());
    println!("  Correct:     {}", summary["correct"]);
    println!("  Mistakes:    {}", summary["mistakes"]);
    println!("  Time:        {}s", summary["time"]);
    println!("  CPM:         {}", summary["cpm"]);
    println!("  Best streak: {}", summary["best_streak"]);
    println!();
    println!("  {}", summary["feedback"].as_str().unwrap_or_default());
    Ok(())
}
