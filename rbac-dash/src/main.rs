// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{Level, info};
use std::io::Write;
use std::sync::Arc;

use rbac_dash::app_state::AppState;
use rbac_dash::config::{Config, ConfigSource, ValidatedConfig};
use rbac_dash::util::LevelRule;
use rbac_dash::{admin, headers, util};

const HELP_TEXT: &str = "Usage: rbac-dash [-C <root>]

Serves the RBAC admin dashboard.

Options:
  -C <root>    Runtime directory containing config.yaml (default: .)
  -h, --help   Show this help
";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", HELP_TEXT);
        return 0;
    }

    let validated_config = match Config::load_and_validate(&parsed_args.runtime_root) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    match System::new().block_on(run_server(validated_config)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(validated_config: ValidatedConfig) -> std::io::Result<()> {
    let validated_config = Arc::new(validated_config);

    // Configure logging with a stable format
    let logger = env_logger::Builder::from_default_env()
        .filter_level(validated_config.logging.level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .build();

    util::init_logger(
        vec![LevelRule::new("actix_server", Level::Info, Level::Debug)],
        logger,
    )
    .map_err(|error| {
        eprintln!("❌ Failed to initialize logger: {}", error);
        std::io::Error::other(error.to_string())
    })?;

    log_startup_info(&validated_config);

    let app_state = Arc::new(AppState::new(validated_config.initial_state()));
    info!(
        "✅ Dashboard state seeded with {} users and {} roles",
        validated_config.seed.users.len(),
        validated_config.seed.roles.len()
    );

    let admin_path = validated_config.admin.path.clone();
    let workers = validated_config.server.workers;

    let factory = {
        let config_for_app = validated_config.clone();
        let app_state_for_app = app_state.clone();

        move || {
            let admin_path_clone = admin_path.clone();

            App::new()
                .app_data(web::Data::from(config_for_app.clone()))
                .app_data(web::Data::from(app_state_for_app.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .wrap(headers::security_headers())
                .configure(move |cfg| admin::configure(cfg, &admin_path_clone))
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(validated_config.server.address_tuple())?
        .run()
        .await
}

fn log_startup_info(config: &ValidatedConfig) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    match &config.source {
        ConfigSource::File(path) => info!("Config file: {}", path.display()),
        ConfigSource::Defaults => info!("No config file found, using built-in defaults"),
    }
    info!(
        "Admin panel available at: http://{}:{}{}",
        config.server.host, config.server.port, config.admin.path
    );

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

#[derive(Debug)]
enum RunMode {
    Serve,
    Help,
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "--" {
            continue;
        } else if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unexpected argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;
    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

#[cfg(test)]
mod tests {
    use super::{RunMode, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_serving_from_current_dir() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.is_absolute());
    }

    #[test]
    fn parse_args_accepts_runtime_root() {
        let parsed = parse_args_from(args(&["-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_ignores_double_dash() {
        let parsed = parse_args_from(args(&["--", "-C", "runtime"])).expect("parse args");
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_requires_value_for_runtime_root() {
        let error = parse_args_from(args(&["-C"]))
            .err()
            .expect("missing value should fail");
        assert!(error.contains("-C"));
    }

    #[test]
    fn parse_args_rejects_unknown_arguments() {
        assert!(parse_args_from(args(&["serve"])).is_err());
    }

    #[test]
    fn help_flag_wins_over_other_arguments() {
        for flag in ["-h", "--help"] {
            let parsed = parse_args_from(args(&["-C", "runtime", flag])).expect("parse args");
            assert!(matches!(parsed.mode, RunMode::Help));
        }
    }
}
