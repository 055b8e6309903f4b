use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use vehicle_audio_hal::bridge::AudioHalBridge;
use vehicle_audio_hal::config::HalConfig;
use vehicle_audio_hal::error::{ErrorCode, HalErrorCodes};
use vehicle_audio_hal::hal::{close_device, HwModule, ModuleInfo, HAL_MODULE_INFO_SYM};
use vehicle_audio_hal::logging::init_logging;
use vehicle_audio_hal::telemetry::TelemetrySnapshot;

#[derive(Parser, Debug)]
#[command(name = "hal_cli", about = "Desktop harness for the simulated audio HAL")]
struct Cli {
    /// Configuration file (defaults to assets/hal_config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the module descriptor as JSON
    Info,
    /// Drive the bridge like repeated button presses
    Trigger {
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Override the configured interface name
        #[arg(long)]
        interface: Option<String>,
        /// Override the configured buffer size
        #[arg(long)]
        buffer_size: Option<usize>,
    },
    /// Run one open/write/close cycle against the module
    Open {
        #[arg(long, default_value = "primary")]
        interface: String,
        #[arg(long, default_value_t = 1024)]
        bytes: usize,
    },
}

#[derive(Serialize)]
struct TriggerReport {
    statuses: Vec<i32>,
    telemetry: TelemetrySnapshot,
}

#[derive(Serialize)]
struct OpenReport {
    interface: String,
    open_status: i32,
    write_result: Option<i64>,
    close_status: Option<i32>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli
        .config
        .map(HalConfig::load_from_file)
        .unwrap_or_else(HalConfig::load);
    init_logging(&config.logging);

    match cli.command {
        Commands::Info => run_info(),
        Commands::Trigger {
            count,
            interface,
            buffer_size,
        } => run_trigger(config, count, interface, buffer_size),
        Commands::Open { interface, bytes } => run_open(&interface, bytes),
    }
}

fn run_info() -> Result<ExitCode> {
    let info: &ModuleInfo = HAL_MODULE_INFO_SYM.info();
    println!("{}", serde_json::to_string_pretty(info)?);
    Ok(ExitCode::from(0))
}

fn run_trigger(
    mut config: HalConfig,
    count: u32,
    interface: Option<String>,
    buffer_size: Option<usize>,
) -> Result<ExitCode> {
    if let Some(interface) = interface {
        config.bridge.interface = interface;
    }
    if let Some(buffer_size) = buffer_size {
        config.bridge.buffer_size = buffer_size;
    }

    let mut bridge = AudioHalBridge::new(config.bridge);
    let statuses: Vec<i32> = (0..count)
        .map(|_| match bridge.trigger_write() {
            Ok(_) => HalErrorCodes::OK,
            Err(err) => err.code(),
        })
        .collect();
    bridge.release();

    let failed = statuses.iter().any(|status| *status != HalErrorCodes::OK);
    let report = TriggerReport {
        statuses,
        telemetry: bridge.telemetry(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing trigger report")?
    );

    Ok(ExitCode::from(if failed { 2 } else { 0 }))
}

fn run_open(interface: &str, bytes: usize) -> Result<ExitCode> {
    let mut report = OpenReport {
        interface: interface.to_string(),
        open_status: HalErrorCodes::OK,
        write_result: None,
        close_status: None,
    };

    match HAL_MODULE_INFO_SYM.open(interface) {
        Ok(mut device) => {
            let buffer = vec![0u8; bytes];
            report.write_result = Some(match device.write(&buffer) {
                Ok(written) => written as i64,
                Err(err) => i64::from(err.code()),
            });
            report.close_status = Some(close_device(Some(device)));
        }
        Err(err) => report.open_status = err.code(),
    }

    let failed = report.open_status != HalErrorCodes::OK;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::from(if failed { 2 } else { 0 }))
}
