//! mock-runner: headless driver for the mock trade-data API.
//!
//! Usage:
//!   mock-runner --fixtures-dir ./fixtures
//!
//! Speaks JSON lines over stdin/stdout: the benchmark harness pipes
//! configure/search commands in and reads one response line per
//! command out. This stands in for the HTTP transport — the engine
//! itself never sees a socket.

use anyhow::Result;
use mocktrade_core::{
    catalog,
    config::ScenarioConfig,
    engine::{MockEngine, SearchParams},
    error::SimError,
    fixtures::FixtureStore,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Command {
    /// Install a full scenario configuration.
    Configure(ScenarioConfig),
    /// Install a catalog scenario by id.
    Scenario { scenario_id: String },
    /// Simulate one paginated query.
    Search(SearchParams),
    /// List the catalog.
    ListScenarios,
    Quit,
}

#[derive(serde::Serialize)]
struct ScenarioListing {
    scenario_id: String,
    description: &'static str,
    mode: &'static str,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let fixtures_dir = args
        .windows(2)
        .find(|w| w[0] == "--fixtures-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./fixtures");

    log::info!("mock-runner starting, fixtures_dir={fixtures_dir}");
    let mut engine = MockEngine::new(FixtureStore::new(fixtures_dir));

    run_loop(&mut engine)
}

fn run_loop(engine: &mut MockEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: Command = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string(), "status": 422 });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Configure(config) => {
                let ack = engine.configure(config);
                writeln!(stdout, "{}", serde_json::to_string(&ack)?)?;
            }
            Command::Scenario { scenario_id } => match catalog::scenario(&scenario_id) {
                Some(config) => {
                    let ack = engine.configure(config);
                    writeln!(stdout, "{}", serde_json::to_string(&ack)?)?;
                }
                None => {
                    log::warn!("unknown scenario: {scenario_id}");
                    let err_json = serde_json::json!({
                        "error": format!("Unknown scenario: {scenario_id}"),
                        "status": 404,
                    });
                    writeln!(stdout, "{err_json}")?;
                }
            },
            Command::Search(params) => match engine.search(&params) {
                Ok(response) => {
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                }
                // Simulated faults and client errors are protocol
                // responses, not runner failures.
                Err(err) => {
                    writeln!(stdout, "{}", error_json(&err))?;
                }
            },
            Command::ListScenarios => {
                let listing: Vec<ScenarioListing> = catalog::scenarios()
                    .iter()
                    .map(|entry| ScenarioListing {
                        scenario_id: entry.config.scenario_id.clone(),
                        description: entry.description,
                        mode: entry.config.fault.mode.name(),
                    })
                    .collect();
                writeln!(stdout, "{}", serde_json::to_string(&listing)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn error_json(err: &SimError) -> String {
    serde_json::json!({
        "error": err.to_string(),
        "status": err.status(),
        "transient": err.is_transient(),
    })
    .to_string()
}
