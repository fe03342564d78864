use clap::Parser;
use small_till::utils::monitor::SystemMonitor;
use small_till::utils::{logger, validation::Validate};
use small_till::{CliConfig, ScenarioConfig, ScenarioRunner, StdoutConsole};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting small-till");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let scenario = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading scenario configuration from: {}", path);
            match ScenarioConfig::from_file(path) {
                Ok(scenario) => {
                    if let Err(e) = scenario.validate() {
                        tracing::error!("❌ Scenario validation failed: {}", e);
                        eprintln!("❌ {}", e);
                        std::process::exit(1);
                    }
                    Some(scenario)
                }
                Err(e) => {
                    eprintln!("❌ Failed to load scenario config '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let monitor_enabled = cli.monitor
        || scenario
            .as_ref()
            .map(|s| s.monitoring_enabled())
            .unwrap_or(false);
    let monitor = SystemMonitor::new(monitor_enabled);

    let runner = ScenarioRunner::new(StdoutConsole::default());
    let summary = match &scenario {
        Some(scenario) => runner.run(scenario)?,
        None => runner.run(&cli)?,
    };

    monitor.log_stats("Scenario");
    monitor.log_final_stats();
    tracing::info!("✅ Shift scenario '{}' completed", summary.run_id);

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
