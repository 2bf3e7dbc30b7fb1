use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use tootbox::api::accounts::update_credentials::UpdateCredentials;
use tootbox::multipart::MediaFile;
use tootbox::{Client, ClientConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Update profile display name, bio and avatar")]
struct Args {
    /// Instance URL
    #[arg(long, default_value = "https://mastodon.social")]
    instance: url::Url,

    /// OAuth access token with write:accounts
    #[arg(long, env = "TOOTBOX_TOKEN", hide_env_values = true)]
    token: String,

    /// New display name
    #[arg(long)]
    display_name: Option<String>,

    /// New bio
    #[arg(long)]
    note: Option<String>,

    /// Image file to use as the avatar
    #[arg(long)]
    avatar: Option<PathBuf>,
}

fn image_type(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let client = Client::with_reqwest(ClientConfig::new(args.instance).with_token(args.token));

    if args.display_name.is_some() || args.note.is_some() {
        let account = client
            .update_account(
                UpdateCredentials::new()
                    .maybe_display_name(args.display_name)
                    .maybe_note(args.note)
                    .build(),
            )
            .await?;
        println!("✓ Profile updated for @{}", account.acct_or_username());
    }

    if let Some(path) = args.avatar {
        let data = std::fs::read(&path).into_diagnostic()?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("avatar")
            .to_owned();
        let file = MediaFile::new(file_name, data).with_content_type(image_type(&path));
        let account = client.update_account_avatar(file).await?;
        println!("✓ Avatar updated: {}", account.avatar.unwrap_or_default());
    }

    Ok(())
}
