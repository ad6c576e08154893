// [apps/cli/src/cli.rs]
//! Arbol de comandos de la CLI (spec.md 6 "CLI surface").

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hyperforge",
    author = "Hyperforge Engineering",
    version,
    about = "Pipeline autonomo de entrega de contratos: Generate -> Audit -> Deploy -> Verify -> Test contra la red Hyperion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: TopLevelCommand,
}

#[derive(Subcommand, Debug)]
pub enum TopLevelCommand {
    /// Ejecuta el pipeline completo como una maquina de estados.
    Workflow {
        #[command(subcommand)]
        action: WorkflowAction,
    },
    /// Genera una fuente de contrato a partir de una plantilla y un pedido.
    Generate {
        #[command(subcommand)]
        action: GenerateAction,
    },
    /// Audita una fuente ya existente sin pasar por el resto del pipeline.
    Audit {
        #[command(subcommand)]
        action: AuditAction,
    },
    /// Despliega una fuente ya existente sin pasar por generacion/auditoria.
    Deploy {
        #[command(subcommand)]
        action: DeployAction,
    },
    /// Somete una fuente ya desplegada a verificacion.
    Verify {
        #[command(subcommand)]
        action: VerifyAction,
    },
    /// Vuelca el estado persistido de una ejecucion de workflow.
    Context {
        #[arg(long = "workflow-id")]
        workflow_id: Option<String>,
    },
    /// Imprime las brechas y exclusiones conocidas del sistema.
    Limitations,
}

#[derive(Subcommand, Debug)]
pub enum WorkflowAction {
    Run(WorkflowRunArgs),
}

#[derive(Args, Debug)]
pub struct WorkflowRunArgs {
    pub prompt: String,

    #[arg(long = "no-audit")]
    pub no_audit: bool,

    #[arg(long = "no-verify")]
    pub no_verify: bool,

    #[arg(long = "test-only")]
    pub test_only: bool,

    #[arg(long = "allow-insecure")]
    pub allow_insecure: bool,

    #[arg(long, default_value = "hyperion")]
    pub network: String,

    #[arg(long, default_value = "GenericContract")]
    pub contract_type: String,
}

#[derive(Subcommand, Debug)]
pub enum GenerateAction {
    Contract(GenerateContractArgs),
}

#[derive(Args, Debug)]
pub struct GenerateContractArgs {
    #[arg(long = "type")]
    pub contract_type: String,

    #[arg(long)]
    pub name: String,

    #[arg(long = "use-rag")]
    pub use_rag: bool,

    #[arg(long)]
    pub args: Option<String>,

    #[arg(long)]
    pub file: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum AuditAction {
    Contract(AuditContractArgs),
}

#[derive(Args, Debug)]
pub struct AuditContractArgs {
    #[arg(long)]
    pub contract: Option<std::path::PathBuf>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub network: Option<String>,

    #[arg(long, default_value = "json")]
    pub format: String,

    #[arg(long)]
    pub severity: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DeployAction {
    Contract(DeployContractArgs),
}

#[derive(Args, Debug)]
pub struct DeployContractArgs {
    #[arg(long)]
    pub contract: std::path::PathBuf,

    #[arg(long)]
    pub args: Option<String>,

    #[arg(long)]
    pub file: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum VerifyAction {
    Contract(VerifyContractArgs),
}

#[derive(Args, Debug)]
pub struct VerifyContractArgs {
    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub source: Option<std::path::PathBuf>,
}
