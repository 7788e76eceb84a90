use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;

use gatehouse_auth::{DecisionEngine, TokenSubject};
use gatehouse_cli::{routes, tokens, toggle};
use gatehouse_config::{GateConfig, SessionConfig};
use gatehouse_db::{PgSettingsStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "gatehouse-cli")]
#[command(about = "Gatehouse CLI - Administrative tools for the authorization pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the global authentication toggle
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
    /// Inspect the route table
    Route {
        #[command(subcommand)]
        command: RouteCommand,
    },
    /// Session token utilities
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Show whether authentication is enabled
    Status,
    /// Turn authentication on
    Enable {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Turn authentication off; every route becomes reachable
    Disable {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum RouteCommand {
    /// Show what the pipeline would do for a request to PATH
    Check {
        path: String,

        /// Simulate a signed-in user with this role (anonymous if omitted)
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Simulate the toggle being off
        #[arg(long)]
        auth_disabled: bool,
    },
}

#[derive(Subcommand)]
enum TokenCommand {
    /// Mint a session token signed with SESSION_SECRET
    Issue {
        #[arg(short = 'u', long)]
        user_id: String,

        #[arg(short = 'e', long)]
        email: Option<String>,

        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(short = 'r', long)]
        role: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Auth { command } => handle_auth(command).await,
        Commands::Route {
            command:
                RouteCommand::Check {
                    path,
                    role,
                    auth_disabled,
                },
        } => {
            let engine = DecisionEngine::from_config(&GateConfig::from_env());
            let report = routes::check_route(&engine, &path, role.as_deref(), !auth_disabled).await;
            println!("{report}");
            Ok(())
        }
        Commands::Token {
            command:
                TokenCommand::Issue {
                    user_id,
                    email,
                    name,
                    role,
                },
        } => {
            let subject = TokenSubject {
                user_id: &user_id,
                email: email.as_deref(),
                name: name.as_deref(),
                role: role.as_deref(),
            };
            let token = tokens::issue_token(&subject, &SessionConfig::from_env())?;
            println!("{token}");
            Ok(())
        }
    }
}

async fn handle_auth(command: AuthCommand) -> anyhow::Result<()> {
    let pool = init_db_pool()
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool).await?;
    let store = PgSettingsStore::new(pool);

    let (enabled, yes) = match command {
        AuthCommand::Status => {
            let settings = toggle::auth_status(&store).await?;
            println!("{}", toggle::describe(&settings));
            return Ok(());
        }
        AuthCommand::Enable { yes } => (true, yes),
        AuthCommand::Disable { yes } => (false, yes),
    };

    let prompt = if enabled {
        "Enable authentication? Anonymous requests to protected routes will be redirected"
    } else {
        "Disable authentication? Every route, including admin areas, becomes reachable"
    };

    if !yes
        && !Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")?
    {
        println!("Aborted");
        return Ok(());
    }

    let settings = toggle::set_auth(&store, enabled).await?;
    println!("✅ {}", toggle::describe(&settings));
    println!("   Running servers observe the change within their toggle TTL.");
    Ok(())
}
