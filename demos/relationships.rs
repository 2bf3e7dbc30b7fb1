use clap::Parser;
use tootbox::api::accounts::relationships::GetRelationships;
use tootbox::smol_str::SmolStr;
use tootbox::{Client, ClientConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show how you relate to a set of accounts")]
struct Args {
    /// Account ids
    #[arg(required = true)]
    ids: Vec<String>,

    /// Instance URL
    #[arg(long, default_value = "https://mastodon.social")]
    instance: url::Url,

    /// OAuth access token with read:follows
    #[arg(long, env = "TOOTBOX_TOKEN", hide_env_values = true)]
    token: String,
}

fn flag(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) { "yes" } else { "no" }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let client = Client::with_reqwest(ClientConfig::new(args.instance).with_token(args.token));

    let ids: Vec<SmolStr> = args.ids.iter().map(SmolStr::new).collect();
    let relationships = client
        .lookup_relationships(GetRelationships::new().ids(ids.clone()).build())
        .await?;

    println!("{:<20} {:>9} {:>11} {:>8} {:>7}", "id", "following", "followed by", "blocking", "muting");
    for rel in &relationships {
        println!(
            "{:<20} {:>9} {:>11} {:>8} {:>7}",
            rel.id,
            flag(rel.following),
            flag(rel.followed_by),
            flag(rel.blocking),
            flag(rel.muting)
        );
    }

    // Who among the people you follow also follows each of these accounts
    let familiar = client.lookup_familiar_followers(ids).await?;
    for entry in familiar.iter().filter(|f| !f.accounts.is_empty()) {
        let names: Vec<&str> = entry.accounts.iter().map(|a| a.acct_or_username()).collect();
        println!("{} is followed by {}", entry.id, names.join(", "));
    }

    Ok(())
}
