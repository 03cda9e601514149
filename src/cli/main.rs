/**
 * EasyBlog command-line client
 *
 * Thin front end over the client library: every subcommand is one or two API
 * calls, printed as JSON on stdout. Logs go to stderr (`RUST_LOG`).
 * The bearer token is persisted in the file token store between runs.
 */
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use easyblog::client::{
    sha256_hex, BlogApi, FileTokenStore, HashedPassword, Session, SessionState, SiteConfig,
};
use easyblog::shared::{ClientConfig, Page, PostQuery};

#[derive(Debug, Parser)]
#[command(name = "easyblog", version, about = "Command-line client for an EasyBlog server")]
struct Cli {
    /// TOML config file (base_url, token_path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, e.g. http://127.0.0.1:7966/api
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List posts
    Posts {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        /// Search title and summary
        #[arg(long)]
        q: Option<String>,
        /// Only posts in this category
        #[arg(long, conflicts_with = "tag")]
        category: Option<u64>,
        /// Only posts with this tag
        #[arg(long)]
        tag: Option<u64>,
    },
    /// Show a post with its comments
    Post { id: u64 },
    /// Delete a post
    DeletePost { id: u64 },
    /// Comment on a post
    Comment { post_id: u64, content: String },
    /// List categories
    Categories,
    /// List tags
    Tags,
    /// List friend links
    Friends,
    /// Log in and store the token
    Login {
        email: String,
        #[arg(long, env = "EASYBLOG_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register (when enabled on the server), then log in
    Register {
        username: String,
        email: String,
        #[arg(long, env = "EASYBLOG_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Read a site config value
    Config {
        #[arg(default_value = easyblog::client::site_config::ENABLE_REGISTER_KEY)]
        key: String,
    },
    /// Print the SHA-256 hex digest sent in place of a password
    Hash { text: String },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("easyblog=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig, Box<dyn Error>> {
    let mut builder = ClientConfig::builder();
    if let Some(path) = &cli.config {
        builder = builder.with_file(path)?;
    }
    builder = builder.with_env();
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url.clone());
    }
    Ok(builder.build()?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let tokens = Arc::new(FileTokenStore::new(config.token_path()));
    let api = BlogApi::from_config(config, tokens);

    match cli.command {
        Command::Posts {
            page,
            size,
            q,
            category,
            tag,
        } => {
            if let Some(id) = category {
                print_json(&api.fetch_posts_by_category(id).await?)?;
            } else if let Some(id) = tag {
                print_json(&api.fetch_posts_by_tag(id).await?)?;
            } else {
                let mut query = PostQuery::default().page(Page::new(page, size));
                query.q = q;
                print_json(&api.fetch_posts(&query).await?)?;
            }
        }
        Command::Post { id } => {
            let (post, comments) = api.fetch_post_with_comments(id).await?;
            print_json(&serde_json::json!({ "post": post, "comments": comments }))?;
        }
        Command::DeletePost { id } => {
            api.delete_post(id).await?;
            tracing::info!("Deleted post {}", id);
        }
        Command::Comment { post_id, content } => {
            print_json(&api.post_comment(post_id, content).await?)?;
        }
        Command::Categories => print_json(&api.fetch_categories(Page::LISTS).await?)?,
        Command::Tags => print_json(&api.fetch_tags(Page::LISTS).await?)?,
        Command::Friends => print_json(&api.fetch_friends(Page::LISTS).await?)?,
        Command::Login { email, password } => {
            let session = Session::new(api);
            let state = session
                .login(&email, &HashedPassword::from_plaintext(&password))
                .await?;
            print_state(&state)?;
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let site = SiteConfig::load(&api).await;
            if !site.registration_enabled() {
                return Err("registration is disabled on this server".into());
            }
            let session = Session::new(api);
            let registered = session
                .register_and_login(&username, &email, &HashedPassword::from_plaintext(&password))
                .await?;
            print_json(&registered)?;
        }
        Command::Logout => {
            Session::new(api).logout()?;
        }
        Command::Whoami => {
            let session = Session::init(api).await;
            print_state(&session.state())?;
        }
        Command::Config { key } => match api.get_config(&key).await? {
            Some(entry) => print_json(&entry)?,
            None => return Err(format!("config key '{}' not found", key).into()),
        },
        Command::Hash { text } => println!("{}", sha256_hex(&text)),
    }

    Ok(())
}

fn print_state(state: &SessionState) -> Result<(), Box<dyn Error>> {
    match state.user() {
        Some(user) => print_json(user),
        None => {
            println!("anonymous");
            Ok(())
        }
    }
}
