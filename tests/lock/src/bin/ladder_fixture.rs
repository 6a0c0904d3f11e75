//! Binary that runs every sample query through the harness and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `ladder_fixture`
//!
//! Output: one block of key=value lines per query. Logs go to stderr
//! (`RUST_LOG` controls the level), stdout carries only the report.

use ladder_harness::bundle::LADDER_ARTIFACT;
use ladder_harness::contract::LadderWorld;
use ladder_harness::render::render_ladder;
use ladder_harness::runner::run_ladder;
use ladder_harness::worlds::samples::all_samples;
use ladder_search::policy::SearchPolicy;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let policy = SearchPolicy::default();
    let mut runs = 0_usize;
    for world in all_samples() {
        for query in world.queries() {
            let bundle = run_ladder(&world, &query, &policy)?;
            let ladder_json = bundle
                .json(LADDER_ARTIFACT)
                .ok_or("ladder.json missing or malformed")?;
            let ladder: Vec<String> = serde_json::from_value(ladder_json["ladder"].clone())?;
            let graph_digest = ladder_json["search_graph_digest"]
                .as_str()
                .unwrap_or("none");

            println!("world={}", world.world_id());
            println!("query={} -> {}", query.start, query.goal);
            println!("status={}", ladder_json["status"].as_str().unwrap_or_default());
            println!("ladder={}", render_ladder(&ladder));
            println!("bundle_digest={}", bundle.digest.as_str());
            println!("search_graph_digest={graph_digest}");
            runs += 1;
        }
    }
    info!(runs, "fixture complete");
    Ok(())
}
