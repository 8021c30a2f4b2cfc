use api::app;
use api::startup::{Command, select_port, usage};
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::rolling;
use util::exercises::ExerciseCatalog;
use util::{
    config::{self, AppConfig},
    paths,
    state::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("api");
    let command = Command::from_arg(args.get(1).map(String::as_str));

    if command == Command::Help {
        println!("{}", usage(program));
        return ExitCode::SUCCESS;
    }

    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let week = command.week(config::week());
    AppConfig::set_week(week);

    let data_root = paths::data_root();
    let catalog = match ExerciseCatalog::load(&data_root, week) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load exercises for week {week}: {e}");
            error!(
                "Make sure {} contains exercises/week_{week}/week_{week}_key.json \
                 (or a _vN variant), or set DATA_ROOT",
                data_root.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let pool = match db::connect_dataset(&catalog).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open dataset '{}': {e}", catalog.dataset());
            error!(
                "Expected the database at {}/datasets/{}.db",
                data_root.display(),
                catalog.dataset()
            );
            return ExitCode::FAILURE;
        }
    };

    let Some(port) = select_port(config::port(), portpicker::is_free_tcp) else {
        error!("No free port found in range 5001-5010; set SQL_PORT to choose one");
        return ExitCode::FAILURE;
    };

    let host = config::host();
    let addr: SocketAddr = match format!("{host}:{port}").parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid address {host}:{port}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Starting {} [{}] for week {week} ({} exercises) on http://{addr}",
        config::project_name(),
        config::env(),
        catalog.exercise_list().len()
    );

    let app = app(AppState::new(pool, catalog));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        error!("Server crashed: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
