use clap::Parser;
use tootbox::api::accounts::get_statuses::GetAccountStatuses;
use tootbox::{Client, ClientConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a public profile and its latest statuses without logging in")]
struct Args {
    /// Account address, e.g. Gargron or Gargron@mastodon.social
    #[arg(default_value = "Gargron")]
    acct: String,

    /// Instance URL
    #[arg(long, default_value = "https://mastodon.social")]
    instance: url::Url,

    /// Number of statuses to show
    #[arg(long, default_value_t = 5)]
    limit: u32,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let client = Client::with_reqwest(ClientConfig::new(args.instance));

    let account = client.lookup_by_acct(args.acct.as_str()).await?;
    println!("@{} ({})", account.acct_or_username(), account.id);
    if let Some(moved) = &account.moved {
        println!("  moved to @{}", moved.acct_or_username());
    }
    for field in account.fields.iter().flatten() {
        println!("  {}: {}", field.name, field.value);
    }

    let featured = client.lookup_account_featured_tags(account.id.clone()).await?;
    if !featured.is_empty() {
        let names: Vec<String> = featured.iter().map(|t| format!("#{}", t.name)).collect();
        println!("Featured: {}", names.join(" "));
    }

    let statuses = client
        .lookup_statuses(
            GetAccountStatuses::new()
                .id(account.id)
                .limit(args.limit)
                .exclude_reblogs(true)
                .build(),
        )
        .await?;

    println!();
    for status in statuses {
        println!("[{}] {} {}", status.created_at, status.visibility, status.id);
        println!("  {}", status.content);
    }

    Ok(())
}
