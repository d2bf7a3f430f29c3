pub mod command;     // Host callback parsing
pub mod config;      // Configuration management
pub mod coordinator; // Runs commands against the service
pub mod error;       // Error types
pub mod fox;         // Fox inverter registers and operations
pub mod modbus;      // Modbus TCP transport
pub mod options;     // Command line options parsing
pub mod prelude;     // Common imports and types
pub mod transport;   // Register transport trait

// Get the package version from Cargo.toml
const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::prelude::*;
use crate::fox::FoxModbusService;
use crate::modbus::ModbusTcp;
use std::io::Write;
use std::sync::Arc;

/// Initialises env_logger with a single line, timestamped format.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .write_style(env_logger::WriteStyle::Never)
        .try_init();
}

/// Main application entry point
///
/// Loads the configuration, opens the Modbus connection once and runs the
/// single callback named on the command line.
pub async fn app(options: Options) -> Result<Outcome> {
    // the filter stays open; the effective level is capped by set_max_level
    // below unless RUST_LOG is given
    init_logging("trace");
    let rust_log = std::env::var_os("RUST_LOG").is_some();
    if !rust_log {
        log::set_max_level(log::LevelFilter::Info);
    }

    info!("fox-bridge {} starting with config file: {}", CARGO_PKG_VERSION, options.config_file);

    let config = Config::new(options.config_file.clone())?;
    if !rust_log {
        log::set_max_level(config.loglevel().parse()?);
    }

    let transport = ModbusTcp::connect(config.modbus()).await?;
    let service = FoxModbusService::new(
        Arc::new(transport),
        config.off_peak_start(),
        config.off_peak_end(),
        config.user_min_soc(),
    );
    let coordinator = Coordinator::new(Arc::new(service));

    let outcome = coordinator.dispatch(&options.callback, &options.args).await?;
    info!("{} completed: {:?}", options.callback, outcome);

    Ok(outcome)
}

/// Runs the app and reports the result: the day probe is printed, a failure
/// is logged once. Returns the process exit code.
pub async fn run(options: Options) -> i32 {
    match app(options).await {
        Ok(Outcome::DeviceInfo(current)) => {
            println!("{}", current);
            0
        }
        Ok(Outcome::Done) => 0,
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}
