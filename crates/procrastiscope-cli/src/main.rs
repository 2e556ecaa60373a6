use clap::{CommandFactory, Parser, Subcommand};

mod commands;

use commands::{Output, PayloadArgs};

#[derive(Parser)]
#[command(name = "procrastiscope", version, about = "Procrastination risk analysis CLI")]
struct Cli {
    /// Print single-line JSON instead of pretty output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis of tasks, journals and behaviors
    Analyze {
        #[command(flatten)]
        payload: PayloadArgs,
        /// Include the weighted terms behind the score
        #[arg(long)]
        explain: bool,
    },
    /// Risk score and recommendations for one task
    Task {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Sentiment, mood impact and insights for one journal entry
    Journal {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Recommendations for a list of patterns
    Recommend {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Engine status
    Status,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = procrastiscope_core::Config::load_or_default();
    init_tracing(&config.logging.filter);

    let output = Output::new(!cli.compact && config.output.pretty);
    let result = match cli.command {
        Commands::Analyze { payload, explain } => {
            commands::analyze::run_full(&config, &payload, explain, &output)
        }
        Commands::Task { payload } => commands::analyze::run_task(&config, &payload, &output),
        Commands::Journal { payload } => commands::analyze::run_journal(&config, &payload, &output),
        Commands::Recommend { payload } => {
            commands::analyze::run_recommend(&config, &payload, &output)
        }
        Commands::Status => commands::analyze::run_status(&config, &output),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "procrastiscope", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// stays valid JSON.
fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
