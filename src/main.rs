use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feature_scaffold::{mcp, models::FeatureRequest, report::Report, Config};

#[derive(Parser)]
#[command(name = "new-feature")]
#[command(about = "Create the branch, spec folder, and spec.md for a new feature")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    create: CreateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server via stdio (for agent orchestration)
    Mcp,
}

#[derive(Args)]
struct CreateArgs {
    /// Output a single JSON record instead of plain text
    #[arg(long)]
    json: bool,

    /// Use this short name for the branch instead of deriving one
    #[arg(long, value_name = "NAME")]
    short_name: Option<String>,

    /// Feature description
    #[arg(trailing_var_arg = true, num_args = 0.., value_name = "DESCRIPTION")]
    description: Vec<String>,
}

/// Logs always go to stderr: stdout carries the report or the MCP protocol.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "feature_scaffold=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The description words joined, or `None` when nothing was given.
fn description_from(args: &CreateArgs) -> Option<String> {
    let description = args.description.join(" ");
    if description.trim().is_empty() {
        None
    } else {
        Some(description)
    }
}

fn run_create(args: CreateArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let Some(description) = description_from(&args) else {
        eprintln!("error: a feature description is required\n");
        eprintln!("{}", Cli::command().render_usage());
        return Ok(ExitCode::FAILURE);
    };

    let request = FeatureRequest {
        description,
        short_name: args.short_name,
    };
    let start = std::env::current_dir()?;
    let workspace = feature_scaffold::create_feature_in(&start, &request, config)?;

    let report = Report::new(&workspace);
    if args.json {
        println!("{}", report.json()?);
    } else {
        println!("{}", report.plain());
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();

    match cli.command {
        Some(Commands::Mcp) => {
            mcp::run_stdio_server(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        None => run_create(cli.create, &config),
    }
}
