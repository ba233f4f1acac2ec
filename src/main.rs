//! Quotawatch CLI entrypoint for the GitHub API quota gate.

use std::process::ExitCode;

use ortho_config::OrthoConfig;
use quotawatch::config::cli_display_request;
use quotawatch::{
    GateError, GateSettings, GithubActionsHost, OctocrabQuotaGateway, PersonalAccessToken,
    QuotaGate, QuotawatchConfig, SystemClock, WorkflowHost,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directives.
const LOG_FILTER_VAR: &str = "QUOTAWATCH_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let host = GithubActionsHost::from_env();
    match run(&host).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            host.fail(&error.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(host: &GithubActionsHost) -> Result<(), GateError> {
    let Some(config) = load_config()? else {
        return Ok(());
    };
    let settings = GateSettings::from_inputs(&config.gate_inputs())?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = config.api_base()?;
    let gateway = OctocrabQuotaGateway::for_token(&token, &api_base)?;

    QuotaGate::new(&gateway, host, &SystemClock)
        .run(&settings)
        .await?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// Returns `None` once a `--help` or `--version` request has been printed.
///
/// # Errors
///
/// Returns [`GateError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<Option<QuotawatchConfig>, GateError> {
    match QuotawatchConfig::load() {
        Ok(config) => Ok(Some(config)),
        Err(error) => {
            let Some(request) = cli_display_request(&error) else {
                return Err(GateError::Configuration {
                    message: error.to_string(),
                });
            };
            let _ignored = request.print();
            Ok(None)
        }
    }
}
