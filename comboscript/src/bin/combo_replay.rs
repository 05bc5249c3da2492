use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use comboscript::trace::{parse_trace, replay, ReplayOptions};
use comboscript::{compile_script_file, MatchStrategy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a timed input trace against a combo library", long_about = None)]
struct Args {
    /// Combo script file
    script: PathBuf,

    /// Input trace file, one "<timestamp> <token>" per line
    trace: PathBuf,

    /// Minimum time between two confirmed matches, in seconds
    #[arg(long)]
    cooldown: Option<f64>,

    /// Clear the whole buffer after each confirmed match
    #[arg(long)]
    clear_on_match: bool,

    /// Use the unanchored fallback matcher instead of end-anchored search
    #[arg(long)]
    unanchored: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut script = compile_script_file(&args.script)
        .with_context(|| format!("failed to compile {}", args.script.display()))?;
    if args.unanchored {
        script.config.strategy = MatchStrategy::Unanchored;
    }

    if args.verbose {
        println!(
            "Loaded {} combos (retention {}s, max delta {}s, extension window {}s)",
            script.patterns.len(),
            script.config.retention,
            script.config.default_max_delta,
            script.config.extension_window,
        );
    }

    let trace_text = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("failed to read {}", args.trace.display()))?;
    let events = parse_trace(&trace_text)?;

    let mut engine = script.into_engine()?;
    let options = ReplayOptions {
        cooldown: args.cooldown,
        clear_on_match: args.clear_on_match,
    };
    let matches = replay(&mut engine, &events, &options);

    for m in &matches {
        let steps: Vec<&str> = m
            .result
            .consumed
            .iter()
            .map(|t| t.token.as_str())
            .collect();
        println!(
            "[t={:.2}] {} (len {}: {})",
            m.confirmed_at,
            m.result.combo_id,
            m.result.length,
            steps.join(" "),
        );
    }

    if matches.is_empty() {
        println!("No combos matched.");
    }

    Ok(())
}
