use clap::Parser;
use tootbox::{BearerToken, Client, ClientConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the account an access token belongs to")]
struct Args {
    /// Instance URL
    #[arg(long, default_value = "https://mastodon.social")]
    instance: url::Url,

    /// OAuth access token
    #[arg(long, env = "TOOTBOX_TOKEN", hide_env_values = true)]
    token: String,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    // No token on the config: it is passed for this one call instead
    let client = Client::with_reqwest(ClientConfig::new(args.instance));
    let me = client
        .verify_account_credentials(Some(BearerToken::new(args.token)))
        .await?;

    println!("@{} ({})", me.acct_or_username(), me.id);
    if let Some(name) = &me.display_name {
        println!("Display name: {}", name);
    }
    if let Some(source) = &me.source {
        if let Some(privacy) = &source.privacy {
            println!("Default visibility: {}", privacy);
        }
    }
    println!(
        "{} statuses, {} followers, {} following",
        me.statuses_count.unwrap_or_default(),
        me.followers_count.unwrap_or_default(),
        me.following_count.unwrap_or_default()
    );

    Ok(())
}
