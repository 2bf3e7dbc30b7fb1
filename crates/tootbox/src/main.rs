use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use serde::Serialize;
use tootbox::api::accounts::get_statuses::GetAccountStatuses;
use tootbox::api::accounts::relationships::GetRelationships;
use tootbox::api::accounts::search::SearchAccounts;
use tootbox::smol_str::SmolStr;
use tootbox::{BearerToken, Client, ClientConfig};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "tootbox - Mastodon API client")]
struct Args {
    /// Instance base URL (e.g., https://mastodon.social)
    #[arg(long, env = "TOOTBOX_INSTANCE", default_value = "https://mastodon.social")]
    instance: Url,

    /// OAuth access token
    #[arg(long, env = "TOOTBOX_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log requests (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the account the token belongs to
    Verify,
    /// Show an account by id
    Account { id: String },
    /// Resolve a WebFinger address (user@domain)
    Lookup { acct: String },
    /// List an account's statuses
    Statuses {
        id: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show your relationship with one or more accounts
    Relationships {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Search accounts
    Search {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
        /// Resolve remote accounts over WebFinger
        #[arg(long)]
        resolve: bool,
    },
    /// Show your preferences
    Preferences,
    /// Show a hashtag
    Tag { name: String },
}

fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::new(args.instance);
    if let Some(token) = args.token {
        config = config.with_token(BearerToken::new(token));
    }
    let client = Client::with_reqwest(config);

    match args.command {
        Command::Verify => print_json(&client.verify_account_credentials(None).await?),
        Command::Account { id } => print_json(&client.lookup_by_id(id).await?),
        Command::Lookup { acct } => print_json(&client.lookup_by_acct(acct).await?),
        Command::Statuses { id, limit } => {
            let request = GetAccountStatuses::new().id(id).maybe_limit(limit).build();
            print_json(&client.lookup_statuses(request).await?)
        }
        Command::Relationships { ids } => {
            let request = GetRelationships::new()
                .ids(ids.into_iter().map(SmolStr::from).collect())
                .build();
            print_json(&client.lookup_relationships(request).await?)
        }
        Command::Search {
            query,
            limit,
            resolve,
        } => {
            let request = SearchAccounts::new()
                .q(query)
                .maybe_limit(limit)
                .resolve(resolve)
                .build();
            print_json(&client.search_accounts(request).await?)
        }
        Command::Preferences => print_json(&client.lookup_preferences().await?),
        Command::Tag { name } => print_json(&client.lookup_tag(name).await?),
    }
}
