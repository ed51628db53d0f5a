use reddit_client::UserCommentsClient;
use snooscope_core::AppConfig;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== Reddit Comment Fetch Manual Test ===\n");

    print!("Enter a Reddit username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim();

    if username.is_empty() {
        println!("❌ Username cannot be empty");
        return Ok(());
    }

    let config = AppConfig::load()?;
    let client = UserCommentsClient::new(&config)?;

    println!("\n🔍 Fetching comment history for u/{username}...");
    let comments = client.fetch_user_comments(username).await?;
    println!("✅ Fetched {} comments\n", comments.len());

    for comment in comments.iter().take(5) {
        println!(
            "r/{} ({}): {}",
            comment.subreddit.as_deref().unwrap_or("?"),
            comment
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "?".to_string()),
            comment
                .body
                .as_deref()
                .map(|b| b.chars().take(80).collect::<String>())
                .unwrap_or_else(|| "<no body>".to_string())
        );
    }
    if comments.len() > 5 {
        println!("... and {} more", comments.len() - 5);
    }

    Ok(())
}
