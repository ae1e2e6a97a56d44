use agora_runner::config::{load_config, load_default_config};
use agora_runner::{ProfitLedger, Simulation, SimulationError};

fn main() -> Result<(), SimulationError> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            load_config(path)?
        }
        None => load_default_config()?,
    };
    config.validate()?;

    let mut simulation = Simulation::with_config(&config)?;
    let results = simulation.run()?;

    results.log_summary();

    if let Some(ledger) = ProfitLedger::from_config(&config) {
        ledger.append(&results)?;
    }

    println!("{}", results.to_json_pretty()?);
    Ok(())
}
