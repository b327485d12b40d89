//! Application entry point and dispatch.

use anyhow::{Context, Result};

use fibdev_cli::output::{log_file_name, write_latency_log};
use fibdev_cli::presenter::TracePresenter;
use fibdev_core::calculator::FibError;
use fibdev_core::constants::exit_codes;
use fibdev_core::device::FibDevice;
use fibdev_core::legacy::LegacyFile;
use fibdev_core::registry::{CalculatorFactory, DefaultFactory};

use crate::benchmark::{run_benchmark, BenchmarkPlan};
use crate::config::AppConfig;
use crate::errors;

/// Resolve a `--method` value into the devices to benchmark.
///
/// `all` expands to one device per registered engine. Every name is
/// resolved before any device is returned.
pub fn select_devices(
    method: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<FibDevice>, FibError> {
    if method == "all" {
        factory
            .available()
            .into_iter()
            .map(|name| FibDevice::with_method(factory, name))
            .collect()
    } else {
        Ok(vec![FibDevice::with_method(factory, method)?])
    }
}

/// Run the application.
pub fn run(config: &AppConfig, presenter: &dyn TracePresenter) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdev_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();
    let devices = select_devices(&config.method, &factory)?;
    let plan = BenchmarkPlan {
        offset: config.offset,
        writes: config.write_count(),
    };

    for device in &devices {
        run_device(config, device, plan, presenter)?;
    }
    Ok(())
}

/// Run the application and report any failure through `presenter`.
///
/// Returns the process exit code.
pub fn execute(config: &AppConfig, presenter: &dyn TracePresenter) -> i32 {
    match run(config, presenter) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            presenter.present_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    }
}

fn run_device(
    config: &AppConfig,
    device: &FibDevice,
    plan: BenchmarkPlan,
    presenter: &dyn TracePresenter,
) -> Result<()> {
    let name = device.engine_name();
    tracing::info!(engine = name, offset = plan.offset, "starting benchmark");

    let mut file = LegacyFile::new(device.open()?);
    let samples = run_benchmark(&mut file, plan, presenter);
    file.into_inner().close();

    let path = config.output_dir.join(log_file_name(name));
    write_latency_log(&path, &samples, config.format)
        .with_context(|| format!("writing latency log to {}", path.display()))?;

    presenter.present_summary(name, &samples);
    Ok(())
}
