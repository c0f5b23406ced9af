use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use concierge_engine::{Decision, FALLBACK_QUESTIONS};
use std::path::PathBuf;

mod chat;
mod loader;

#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Fuzzy FAQ assistant for the wedding invitation page", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Published CSV feed URL with the Q&A table
    #[arg(long, global = true)]
    feed_url: Option<String>,

    /// Local CSV feed file (takes precedence over --feed-url)
    #[arg(long, global = true)]
    feed_file: Option<PathBuf>,

    /// Fuzzy acceptance threshold (0 = identical, 1 = unrelated)
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout stays clean for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the decision
    Ask(AskArgs),

    /// Interactive chat session
    Chat,

    /// Print the keyword route table
    Routes(RoutesArgs),
}

#[derive(Args)]
struct AskArgs {
    /// The question to ask
    query: String,

    /// Emit the raw decision as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RoutesArgs {
    /// Emit the route table as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Ask(args) => {
            let concierge = loader::load(&cli).await?;
            let decision = concierge.decide(&args.query)?;
            if args.json {
                println!("{}", serde_json::to_string(&decision)?);
            } else {
                print_decision(&decision);
            }
        }
        Commands::Chat => {
            let concierge = loader::load(&cli).await?;
            chat::run(&concierge)?;
        }
        Commands::Routes(args) => {
            let routes = concierge_router::RouteTable::wedding_defaults();
            if args.json {
                println!("{}", serde_json::to_string(routes.routes())?);
            } else {
                for route in routes.routes() {
                    println!(
                        "{} -> section {:?} (keywords: {})",
                        route.route_id,
                        route.target_section,
                        route.keywords.join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

pub(crate) fn print_decision(decision: &Decision) {
    if let Some(answer) = &decision.answer_text {
        println!("{answer}");
    }
    if let Some(route) = &decision.route {
        println!("{}", route.prompt_message);
        println!("(see the \"{}\" section of the page)", route.target_section);
    }
    if !decision.matched {
        println!("Sorry, I don't know the answer to that question yet. Maybe try asking:");
        for question in FALLBACK_QUESTIONS {
            println!("  - {question}");
        }
    }
}