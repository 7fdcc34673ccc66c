//! CLI entrypoint for city-mobility
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mobility_application::{
    ConversationLogger, GatewayRouteReasoner, GeneratedImageVisualizer, NoConversationLogger,
    OPERATOR_LOG_TARGET, OptimizeRouteOutcome, OptimizeRouteUseCase, PredictParkingInput,
    PredictParkingUseCase, RetiredVisualizer, RouteVisualizer, reject_invalid,
};
use mobility_domain::{IllustrationProvider, OutputFormat};
use mobility_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, GeminiSettings, JsonlConversationLogger,
    MapWidgetSettings, MapWidgetVisualizer,
};
use mobility_presentation::{
    Cli, Command, ConsoleFormatter, ParkingArgs, ProgressReporter, RouteArgs,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Exit code for a submission rejected by validation
const EXIT_INVALID_INPUT: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, config.logging.log_file_path().as_deref())?;

    info!("Starting city-mobility");

    for issue in config.validate() {
        warn!("{}", issue.message);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // Field errors are reported before any backend is configured
    if let Command::Route(args) = command
        && let Some(outcome) = reject_invalid(&args.to_form())
    {
        return Ok(report_route(&outcome, format));
    }

    // === Dependency Injection ===
    let settings = GeminiSettings::from_config(&config.backend)?;
    let gateway = Arc::new(GeminiGateway::new(settings)?);
    let logger = conversation_logger(&config);

    match command {
        Command::Route(args) => {
            let provider = cli
                .illustration
                .map(IllustrationProvider::from)
                .unwrap_or_else(|| config.illustration.parse_provider().0);
            let visualizer = route_visualizer(provider, &config, &gateway);

            let reasoner = GatewayRouteReasoner::new(gateway.clone())
                .with_conversation_logger(logger.clone());
            let use_case = OptimizeRouteUseCase::new(Arc::new(reasoner))
                .with_visualizer(visualizer)
                .with_conversation_logger(logger);

            run_route(&use_case, args, format, cli.quiet).await
        }
        Command::Parking(args) => {
            let use_case = PredictParkingUseCase::new(gateway).with_conversation_logger(logger);
            run_parking(&use_case, args, format, cli.quiet).await
        }
    }
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Console filter: the operator target never reaches the terminal
fn console_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},{OPERATOR_LOG_TARGET}=off"))
}

/// Console logging by verbosity, plus an optional plain-text log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = level_for(verbose);

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path
                .file_name()
                .context("log_file must name a file")?;
            if let Some(dir) = dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            let appender =
                tracing_appender::rolling::never(dir.unwrap_or_else(|| Path::new(".")), name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log_path()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => {
            info!("Transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

fn route_visualizer(
    provider: IllustrationProvider,
    config: &FileConfig,
    gateway: &Arc<GeminiGateway>,
) -> Arc<dyn RouteVisualizer> {
    info!("Route visual provider: {}", provider);
    match provider {
        IllustrationProvider::None => Arc::new(RetiredVisualizer),
        IllustrationProvider::MapWidget => Arc::new(MapWidgetVisualizer::new(
            MapWidgetSettings::from_config(&config.map_widget),
        )),
        IllustrationProvider::GeneratedImage => {
            let visualizer = GeneratedImageVisualizer::new(gateway.clone());
            if config.illustration.relax_dangerous_content {
                Arc::new(visualizer)
            } else {
                Arc::new(visualizer.with_default_safety())
            }
        }
    }
}

async fn run_route(
    use_case: &OptimizeRouteUseCase,
    args: &RouteArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let form = args.to_form();

    let outcome = if quiet || format == OutputFormat::Json {
        use_case.execute(form).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(form, &progress).await
    };

    Ok(report_route(&outcome, format))
}

fn report_route(outcome: &OptimizeRouteOutcome, format: OutputFormat) -> ExitCode {
    println!("{}", ConsoleFormatter::format_outcome(outcome, format));
    exit_code(outcome)
}

fn exit_code(outcome: &OptimizeRouteOutcome) -> ExitCode {
    match outcome {
        OptimizeRouteOutcome::Optimized { .. } => ExitCode::SUCCESS,
        OptimizeRouteOutcome::Rejected { .. } => ExitCode::from(EXIT_INVALID_INPUT),
        OptimizeRouteOutcome::Failed { .. } => ExitCode::FAILURE,
    }
}

async fn run_parking(
    use_case: &PredictParkingUseCase,
    args: &ParkingArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let mut input = PredictParkingInput::new(args.location.clone());
    if let Some(time) = &args.time {
        input = input.with_time(time.clone());
    }

    let progress = (!quiet && format != OutputFormat::Json)
        .then(|| ProgressReporter::single("Predicting parking availability..."));
    let result = use_case.execute(input).await;
    if let Some(progress) = &progress {
        progress.finish();
    }

    let prediction = result?;
    println!("{}", ConsoleFormatter::format_parking(&prediction, format));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn emit_failure_logs() {
        tracing::error!("Route reasoning failed");
        tracing::error!(target: OPERATOR_LOG_TARGET, "status 403: key leaked-secret-123");
    }

    #[test]
    fn test_console_never_shows_operator_detail() {
        let console = Captured::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(console.clone())
                .with_filter(console_filter(level_for(3))),
        );

        tracing::subscriber::with_default(subscriber, emit_failure_logs);

        let text = console.text();
        assert!(text.contains("Route reasoning failed"));
        assert!(!text.contains("leaked-secret-123"));
    }

    #[test]
    fn test_log_file_keeps_operator_detail() {
        let file = Captured::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file.clone())
                .with_filter(EnvFilter::new(level_for(0))),
        );

        tracing::subscriber::with_default(subscriber, emit_failure_logs);

        assert!(file.text().contains("leaked-secret-123"));
    }

    #[test]
    fn test_short_start_is_rejected_before_wiring() {
        let cli = Cli::try_parse_from(["city-mobility", "route", "AB", "Qutub Minar"]).unwrap();
        let Some(Command::Route(args)) = &cli.command else {
            panic!("Expected route command");
        };

        let outcome = reject_invalid(&args.to_form()).expect("Expected Rejected");

        assert!(
            outcome
                .field_errors()
                .unwrap()
                .contains(mobility_domain::FormField::StartLocation)
        );
        assert_eq!(exit_code(&outcome), ExitCode::from(EXIT_INVALID_INPUT));
    }
}
