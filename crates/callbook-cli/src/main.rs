use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use callbook_core::alert::Alert;
use callbook_core::collection::CollectionKind;
use callbook_core::review::ReviewFilter;
use callbook_infrastructure::ConfigService;

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "callbook")]
#[command(about = "Callbook - build, run and review coaching sessions", long_about = None)]
struct Cli {
    /// Directory holding the store files (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the call catalog
    Calls {
        /// alphabetical, plus/basic, numUses, lastUsed, group or userOrder
        #[arg(long)]
        sort: Option<String>,
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// List the group tags in use
    Groups,
    /// List sessions
    Sessions {
        /// Only sessions that have not been run yet
        #[arg(long)]
        unfinished: bool,
    },
    /// List templates
    Templates,
    /// Build and save a new session or template
    Build {
        #[arg(value_enum)]
        kind: KindArg,
        name: String,
        /// Start from the calls of an existing session (repeatable)
        #[arg(long)]
        from_session: Vec<String>,
        /// Start from the calls of a template (repeatable)
        #[arg(long)]
        from_template: Vec<String>,
        /// Start from every call that has ever been used
        #[arg(long)]
        from_history: bool,
        /// Add a call to the selection (repeatable)
        #[arg(long)]
        add: Vec<String>,
        /// Take a call back out of the selection (repeatable)
        #[arg(long)]
        remove: Vec<String>,
    },
    /// Run a session: mark the calls that were used, then finish it
    Run {
        session: String,
        /// A call that was used (repeatable; repeating a name toggles it back)
        #[arg(long)]
        used: Vec<String>,
    },
    /// Review the catalog
    Review {
        #[command(subcommand)]
        filter: ReviewArg,
    },
    /// Show when one call was used
    History { call: String },
    /// Import calls from a TOML file of [[calls]] tables
    Import { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Session,
    Template,
}

impl From<KindArg> for CollectionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Session => CollectionKind::Session,
            KindArg::Template => CollectionKind::Template,
        }
    }
}

#[derive(Subcommand)]
enum ReviewArg {
    /// Every call
    All,
    /// Calls used at least once
    Used,
    /// Calls never used
    Unused,
    /// Calls with no history at all
    New,
    /// Calls of one session
    Session { name: String },
    /// Calls carrying one group tag
    Group { tag: String },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<bool> {
    let config = ConfigService::new()?.load()?;
    init_tracing(&config.log_filter);

    let ctx = AppContext::new(config, cli.data_dir)?;

    match cli.command {
        Commands::Calls { sort, filter } => {
            commands::catalog::list(&ctx, sort.as_deref(), &filter).await
        }
        Commands::Groups => commands::catalog::groups(&ctx).await,
        Commands::Sessions { unfinished } => {
            commands::collections::list(&ctx, CollectionKind::Session, unfinished).await
        }
        Commands::Templates => {
            commands::collections::list(&ctx, CollectionKind::Template, false).await
        }
        Commands::Build {
            kind,
            name,
            from_session,
            from_template,
            from_history,
            add,
            remove,
        } => {
            let plan = commands::build::BuildPlan {
                kind: kind.into(),
                name,
                from_sessions: from_session,
                from_templates: from_template,
                from_history,
                add,
                remove,
            };
            commands::build::execute(&ctx, plan).await
        }
        Commands::Run { session, used } => commands::run::execute(&ctx, &session, &used).await,
        Commands::Review { filter } => {
            let filter = match filter {
                ReviewArg::All => ReviewFilter::All,
                ReviewArg::Used => ReviewFilter::EverUsed,
                ReviewArg::Unused => ReviewFilter::NeverUsed,
                ReviewArg::New => ReviewFilter::New,
                ReviewArg::Session { name } => ReviewFilter::Session(name),
                ReviewArg::Group { tag } => ReviewFilter::Group(tag),
            };
            commands::review::execute(&ctx, &filter).await
        }
        Commands::History { call } => commands::review::history(&ctx, &call).await,
        Commands::Import { file } => commands::catalog::import(&ctx, &file).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            commands::print_alert(Some(&Alert::warning(format!("{:#}", err))));
            ExitCode::FAILURE
        }
    }
}
