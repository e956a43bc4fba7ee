use clap::Parser;
use order_stats::app::{handle_fatal_error, init_logging, AppConfig};
use order_stats::cli::Cli;
use order_stats::config::ConfigLoader;
use order_stats::error::AppResult;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let app_config = match AppConfig::new(verbose) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, verbose),
    };
    init_logging(&app_config);

    if let Err(e) = run(cli, &app_config) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli, app_config: &AppConfig) -> AppResult<()> {
    let config = ConfigLoader::new(&app_config.working_dir)
        .load(cli.config.as_deref(), cli.overrides())?;
    debug!("Resolved configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = order_stats::report::run(&config, &mut out)?;

    debug!(
        "Run finished: {} merged rows, {} products, {} in {:.3}s",
        summary.merged_rows,
        summary.products,
        summary.output.display(),
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
