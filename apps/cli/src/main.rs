// [apps/cli/src/main.rs]
/*!
 * APARATO: HYPERFORGE CLI SHELL
 * RESPONSABILIDAD: Punto de entrada del binario; parsea directivas,
 * carga configuracion fail-fast, corre el doctor de precondiciones, y
 * delega al orquestador o a los adaptadores standalone segun el
 * subcomando invocado (spec.md 6 "CLI surface").
 */

use clap::Parser;
use hyperforge_cli::{artifacts, cli, error::CliError, orchestrator, report, supplied_args};
use cli::{AuditAction, Cli, DeployAction, GenerateAction, TopLevelCommand, VerifyAction, WorkflowAction};
use hyperforge_config::{doctor, ConfigRequirements, HyperforgeConfig};
use hyperforge_domain_models::RunId;
use hyperforge_source_fetch::{fetch, FetchEndpoints, SourceIdentifier};
use std::path::PathBuf;
use tracing::{error, info};

const LIMITATIONS_TEXT: &str = "\
Known gaps and exclusions (spec.md 1, 9):
- Single-chain posture: only the configured Hyperion network is supported per run;
  no multi-chain fan-out.
- Deployment is immutable: there is no rollback path for a partially-failed deployment.
- Audit accuracy is bounded by the underlying tools (pattern regexes, the symbolic
  analyzer binary, and the optional LLM runner); the consensus engine only fuses what
  those runners report.
- The `Testing` stage has no dedicated contract test-runner adapter; it re-runs an
  ABI-only compile of the deployed source as a sanity check, not a full test suite.
- The LLM provider, RAG template fetcher, compiler/deployer toolchain, and
  block-explorer API are treated strictly as external interfaces (spec.md 1); this
  binary does not ship a model, a compiler, or an explorer.
";

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    hyperforge_telemetry::init_tracing("hyperforge-cli");

    let cli = Cli::parse();
    let exit_code = match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            err.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn report_error(err: &CliError) {
    let first_line = err.to_string().lines().next().unwrap_or_default().to_string();
    error!(kind = err.kind(), "{first_line}");
    eprintln!("error[{}]: {first_line}", err.kind());
}

async fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        TopLevelCommand::Workflow { action: WorkflowAction::Run(args) } => run_workflow_command(args).await,
        TopLevelCommand::Generate { action: GenerateAction::Contract(args) } => generate_command(args).await,
        TopLevelCommand::Audit { action: AuditAction::Contract(args) } => audit_command(args).await,
        TopLevelCommand::Deploy { action: DeployAction::Contract(args) } => deploy_command(args).await,
        TopLevelCommand::Verify { action: VerifyAction::Contract(args) } => verify_command(args).await,
        TopLevelCommand::Context { workflow_id } => context_command(workflow_id).await,
        TopLevelCommand::Limitations => {
            println!("{LIMITATIONS_TEXT}");
            Ok(())
        }
    }
}

async fn run_workflow_command(args: cli::WorkflowRunArgs) -> Result<(), CliError> {
    let requirements = if args.test_only { ConfigRequirements::none() } else { ConfigRequirements::full_workflow() };
    let config = HyperforgeConfig::load(requirements)?;

    let reports = doctor::run_doctor(&config, !args.test_only);
    doctor::require_all_ok(&reports)?;

    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client construction with static config never fails");

    let outcome = orchestrator::run_workflow(&config, &http_client, &args).await?;
    info!(run_id = %outcome.state.run_id, stage = ?outcome.state.stage, "workflow finished");
    println!(
        "workflow {} finished in stage {:?} ({} bypassed stage(s), {} error(s) recorded)",
        outcome.state.run_id,
        outcome.state.stage,
        outcome.state.bypassed_stages.len(),
        outcome.state.errors.len()
    );
    Ok(())
}

async fn generate_command(args: cli::GenerateContractArgs) -> Result<(), CliError> {
    let config = HyperforgeConfig::load(ConfigRequirements::generate_only())?;
    let http_client = reqwest::Client::new();

    let mut user_request = format!("contract type: {}\n\nname: {}", args.contract_type, args.name);
    if let Some(inline_args) = &args.args {
        user_request.push_str(&format!("\n\nsuggested constructor arguments (hint, not binding): {inline_args}"));
    } else if let Some(file) = &args.file {
        let contents = tokio::fs::read_to_string(file).await?;
        user_request.push_str(&format!("\n\nsuggested constructor arguments (hint, not binding): {contents}"));
    }

    let rag_snippets: Vec<String> = if args.use_rag {
        vec![format!("reference scaffold requested for contract type `{}`", args.contract_type)]
    } else {
        Vec::new()
    };

    let source = orchestrator::generate_source_from_request(&config, &http_client, &user_request, &rag_snippets).await?;

    let run_id = RunId::new();
    let artifacts = artifacts::ArtifactStore::create(&config.artifacts_dir, &run_id).await?;
    artifacts.write_text("source.sol", &source.body).await?;

    println!("{}", source.body);
    eprintln!("generated source written to {}", artifacts.path_for("source.sol"));
    Ok(())
}

/// Resuelve la fuente de `audit contract` a traves de la misma cadena de
/// respaldo que el adaptador de origen, independientemente de si el
/// invocador suministro un path local o una direccion (spec.md 4.1).
async fn resolve_audit_source(
    config: &HyperforgeConfig,
    http_client: &reqwest::Client,
    args: &cli::AuditContractArgs,
) -> Result<hyperforge_domain_models::ContractSource, CliError> {
    let identifier = match (&args.contract, &args.address) {
        (Some(path), _) => SourceIdentifier::LocalFile(path.clone()),
        (None, Some(address)) => SourceIdentifier::Address(address.clone()),
        (None, None) => {
            return Err(CliError::InvalidInput("audit contract requires either --contract or --address".to_string()))
        }
    };

    let endpoints = FetchEndpoints {
        explorer_base_url: config.explorer_base_url.clone(),
        explorer_api_key: config.explorer_api_key.clone(),
        sourcify_base_url: config.sourcify_base_url.clone(),
        rpc_url: config.network.rpc_url.clone(),
        chain_id: config.network.chain_id,
    };

    fetch(http_client, &endpoints, &identifier).await.map_err(CliError::from)
}

async fn audit_command(args: cli::AuditContractArgs) -> Result<(), CliError> {
    let config = HyperforgeConfig::load(ConfigRequirements::none())?;
    let http_client = reqwest::Client::new();

    let source = resolve_audit_source(&config, &http_client, &args).await?;
    let verdict = orchestrator::audit_source(&config, &http_client, &source).await?;

    let format: report::ReportFormat = args.format.parse()?;
    let floor = args.severity.as_deref().map(report::parse_severity_floor).transpose()?;
    println!("{}", report::render(&verdict, format, floor)?);
    Ok(())
}

async fn deploy_command(args: cli::DeployContractArgs) -> Result<(), CliError> {
    let config = HyperforgeConfig::load(ConfigRequirements::deploy_only())?;
    let reports = doctor::run_doctor(&config, true);
    doctor::require_all_ok(&reports)?;

    let http_client = reqwest::Client::new();
    let source_body = tokio::fs::read_to_string(&args.contract).await?;

    let run_id = RunId::new();
    let build_dir = config.artifacts_dir.join("builds").to_string_lossy().into_owned();
    let abi_json = hyperforge_deployer_client::compile_abi(&config.deployer_binary, &build_dir, &run_id, &source_body, config.deploy_timeout)
        .await
        .map_err(CliError::Deploy)?;

    let supplied = supplied_args::load(args.args.as_deref(), args.file.as_deref()).await?;
    let deployer_address = config.deployer_address.as_deref().unwrap_or("0x0000000000000000000000000000000000000000");
    let resolved = hyperforge_constructor_resolver::resolve(&abi_json, &source_body, supplied, deployer_address)
        .map_err(CliError::Resolver)?;

    let deployer_private_key = config
        .deployer_private_key
        .clone()
        .ok_or_else(|| CliError::Config(hyperforge_config::ConfigError::Missing("DEPLOYER_PRIVATE_KEY".to_string())))?;

    let deploy_request = hyperforge_deployer_client::DeployRequest {
        deployer_binary: config.deployer_binary.clone(),
        build_artifacts_dir: build_dir,
        run_id: run_id.clone(),
        source_body,
        constructor_args: resolved.args,
        network: config.network.clone(),
        deployer_private_key,
        timeout: config.deploy_timeout,
    };
    let deployment = hyperforge_deployer_client::deploy(&http_client, &deploy_request).await.map_err(CliError::Deploy)?;

    let artifacts = artifacts::ArtifactStore::create(&config.artifacts_dir, &run_id).await?;
    artifacts.write_json("deployment.json", &deployment).await?;

    println!("{}", serde_json::to_string_pretty(&deployment)?);
    Ok(())
}

async fn verify_command(args: cli::VerifyContractArgs) -> Result<(), CliError> {
    let config = HyperforgeConfig::load(ConfigRequirements::none())?;
    let http_client = reqwest::Client::new();

    let source_body = match &args.source {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => return Err(CliError::InvalidInput("verify contract requires --source".to_string())),
    };

    let submission = hyperforge_explorer_client::SubmissionRequest {
        address: args.address.clone(),
        source_body,
        compiler_version: "unknown".to_string(),
        optimization_used: false,
        constructor_arguments_abi_encoded: String::new(),
    };

    let guid = hyperforge_explorer_client::submit(&http_client, &config.explorer_base_url, config.explorer_api_key.as_deref(), &submission)
        .await
        .map_err(CliError::Verify)?;

    let outcome = hyperforge_explorer_client::poll_until_terminal(&http_client, &config.explorer_base_url, &guid, config.explorer_api_key.as_deref())
        .await
        .map_err(CliError::Verify)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

async fn context_command(workflow_id: Option<String>) -> Result<(), CliError> {
    let config = HyperforgeConfig::load(ConfigRequirements::none())?;
    let workflow_id = workflow_id.ok_or_else(|| CliError::InvalidInput("context requires --workflow-id".to_string()))?;

    let context_path: PathBuf = config.artifacts_dir.join("workflows").join(&workflow_id).join("context.json");
    let body = tokio::fs::read_to_string(&context_path)
        .await
        .map_err(|_| CliError::InvalidInput(format!("no persisted context found for workflow {workflow_id} at {}", context_path.display())))?;

    println!("{body}");
    Ok(())
}
