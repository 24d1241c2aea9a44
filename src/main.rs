use anyhow::Result;
use clap::Parser;
use notehub::commands;
use notehub::config::Config;

/// notehub - command-line client for the NoteHub note-sharing API
///
/// All requests go to a single API root configured once at startup. The
/// root and the request timeout are environment-specific and can be set
/// via flags or the NOTEHUB_API_URL / NOTEHUB_TIMEOUT_MS variables.
///
/// Examples:
///   notehub search rust        # Find notes matching a keyword
///   notehub stats 42           # Show counters for note 42
///   notehub bump 42 likes      # Like note 42
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API root URL (also via NOTEHUB_API_URL)
    #[arg(
        long = "api-url",
        env = "NOTEHUB_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds (also via NOTEHUB_TIMEOUT_MS)
    #[arg(
        long = "timeout-ms",
        env = "NOTEHUB_TIMEOUT_MS",
        value_name = "MS",
        global = true
    )]
    pub timeout_ms: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Search notes by keyword
    Search(SearchArgs),

    /// Show the view/like/favorite/comment counters for a note
    Stats(StatsArgs),

    /// Add to one counter of a note
    Bump(BumpArgs),

    /// Inspect or administer users
    User(UserArgs),
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Keyword to match against note titles and content
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[arg(value_name = "NOTE_ID")]
    pub note_id: u64,
}

#[derive(clap::Args, Debug)]
pub struct BumpArgs {
    #[arg(value_name = "NOTE_ID")]
    pub note_id: u64,

    /// Counter to change: views, likes, favorites or comments
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Amount to add; negative values take back earlier bumps
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub delta: i64,
}

#[derive(clap::Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(clap::Subcommand, Debug)]
pub enum UserCommands {
    /// Show a user's profile
    Show {
        #[arg(value_name = "USER_ID")]
        user_id: u64,
    },

    /// Update a user's profile fields
    Update {
        #[arg(value_name = "USER_ID")]
        user_id: u64,

        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New student number
        #[arg(long = "student-number")]
        student_number: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a user and their note spaces
    Delete {
        #[arg(value_name = "USER_ID")]
        user_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url, cli.timeout_ms)?;

    match cli.command {
        Commands::Search(args) => commands::search(&config.api, &args.keyword).await,
        Commands::Stats(args) => commands::stats(&config.api, args.note_id).await,
        Commands::Bump(args) => {
            commands::bump(&config.api, args.note_id, &args.field, args.delta).await
        }
        Commands::User(args) => match args.command {
            UserCommands::Show { user_id } => commands::show_user(&config.api, user_id).await,
            UserCommands::Update {
                user_id,
                username,
                student_number,
                email,
            } => commands::update_user(&config.api, user_id, username, student_number, email).await,
            UserCommands::Delete { user_id } => commands::delete_user(&config.api, user_id).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_search_parsing() {
        let cli = Cli::try_parse_from(["notehub", "search", "rust"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.keyword, "rust"),
            _ => panic!("Expected Search command"),
        }
        assert_eq!(cli.api_url, None);
        assert_eq!(cli.timeout_ms, None);
    }

    #[test]
    fn test_cli_global_api_url_parsing() {
        let cli = Cli::try_parse_from([
            "notehub",
            "--api-url",
            "http://localhost:9090/api/v1",
            "stats",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9090/api/v1"));
        match cli.command {
            Commands::Stats(args) => assert_eq!(args.note_id, 42),
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_cli_timeout_after_subcommand() {
        let cli = Cli::try_parse_from(["notehub", "search", "rust", "--timeout-ms", "100"]).unwrap();
        assert_eq!(cli.timeout_ms, Some(100));
    }

    #[test]
    fn test_cli_bump_default_delta() {
        let cli = Cli::try_parse_from(["notehub", "bump", "42", "likes"]).unwrap();
        match cli.command {
            Commands::Bump(args) => {
                assert_eq!(args.note_id, 42);
                assert_eq!(args.field, "likes");
                assert_eq!(args.delta, 1);
            }
            _ => panic!("Expected Bump command"),
        }
    }

    #[test]
    fn test_cli_bump_negative_delta() {
        let cli = Cli::try_parse_from(["notehub", "bump", "42", "likes", "--delta", "-1"]).unwrap();
        match cli.command {
            Commands::Bump(args) => assert_eq!(args.delta, -1),
            _ => panic!("Expected Bump command"),
        }
    }

    #[test]
    fn test_cli_user_update_parsing() {
        let cli = Cli::try_parse_from([
            "notehub",
            "user",
            "update",
            "7",
            "--email",
            "bob@example.com",
        ])
        .unwrap();
        match cli.command {
            Commands::User(args) => match args.command {
                UserCommands::Update {
                    user_id,
                    username,
                    email,
                    ..
                } => {
                    assert_eq!(user_id, 7);
                    assert_eq!(username, None);
                    assert_eq!(email.as_deref(), Some("bob@example.com"));
                }
                _ => panic!("Expected Update subcommand"),
            },
            _ => panic!("Expected User command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["notehub"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_non_numeric_note_id_fails() {
        let result = Cli::try_parse_from(["notehub", "stats", "abc"]);
        assert!(result.is_err());
    }
}
