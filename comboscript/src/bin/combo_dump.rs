use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use combo_core::MatchGraph;
use comboscript::compile_script_file;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a compiled combo library", long_about = None)]
struct Args {
    /// Combo script file
    script: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let script = compile_script_file(&args.script)
        .with_context(|| format!("failed to compile {}", args.script.display()))?;

    println!("Settings:");
    println!("  retention         = {}s", script.config.retention);
    println!("  max_delta         = {}s", script.config.default_max_delta);
    println!("  extension_window  = {}s", script.config.extension_window);
    println!();

    println!("Combos ({}):", script.patterns.len());
    for pattern in &script.patterns {
        let steps: Vec<String> = pattern
            .sequence
            .iter()
            .enumerate()
            .map(|(i, token)| {
                match pattern.step_max_delta.get(i).copied().flatten() {
                    Some(delta) => format!("{}@{}", token, delta),
                    None => token.to_string(),
                }
            })
            .collect();
        println!("  \"{}\" => {}", pattern.id, steps.join(" "));
    }
    println!();

    let graph = MatchGraph::build(&script.patterns)?;
    println!(
        "Graph: {} nodes, longest pattern {} steps",
        graph.node_count(),
        graph.max_pattern_len(),
    );

    Ok(())
}
