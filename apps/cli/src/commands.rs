//! Command definitions and handlers.

use api_client::{ApiClient, ApiError, StoryDraft};
use clap::{Parser, Subcommand};
use entities::Story;
use feed::{Session, StoryList};
use thiserror::Error;

use crate::config::CliConfig;
use crate::credentials::{CredentialsError, StoredCredentials};

/// Terminal client for the Hack-or-Snooze story API
#[derive(Debug, Parser)]
#[command(name = "hacksnooze", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the story feed
    Stories,
    /// Submit a new story
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        url: String,
    },
    /// Delete one of your stories by id
    Delete { story_id: String },
    /// Mark a story as a favorite
    Favorite { story_id: String },
    /// Remove a story from your favorites
    Unfavorite { story_id: String },
    /// List your favorite stories
    Favorites,
    /// List the stories you submitted
    Mine,
    /// Create an account and log in
    Signup {
        username: String,
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
}

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error("not logged in; run `hacksnooze login` first")]
    NotLoggedIn,

    #[error("no story with id {0}")]
    StoryNotFound(String),

    #[error("no user config directory available")]
    NoConfigDir,
}

/// Dispatches a parsed command against the configured API.
pub async fn run(cli: Cli, config: &CliConfig) -> Result<(), CommandError> {
    let client = ApiClient::new(&config.api_base_url);
    let creds_path = StoredCredentials::default_path().ok_or(CommandError::NoConfigDir)?;

    // Restore the previous session if credentials are on disk; a failed
    // restore just means we run logged out.
    let session = match StoredCredentials::load_from(&creds_path) {
        Some(creds) => Session::restore(&client, &creds.token, &creds.username).await,
        None => None,
    };

    match cli.command {
        Command::Stories => {
            let list = StoryList::fetch(&client).await?;
            for story in &list.stories {
                let starred = session
                    .as_ref()
                    .map(|s| s.is_favorite(story))
                    .unwrap_or(false);
                print_story(story, starred);
            }
        }

        Command::Submit { title, author, url } => {
            let mut session = session.ok_or(CommandError::NotLoggedIn)?;
            let mut list = StoryList::fetch(&client).await?;
            let story = list
                .add_story(&client, &mut session, StoryDraft { title, author, url })
                .await?;
            println!("submitted {}", story.story_id);
            print_story(&story, false);
        }

        Command::Delete { story_id } => {
            let mut session = session.ok_or(CommandError::NotLoggedIn)?;
            let mut list = StoryList::fetch(&client).await?;
            list.remove_story(&client, &mut session, &story_id).await?;
            println!("deleted {story_id}");
        }

        Command::Favorite { story_id } => {
            let mut session = session.ok_or(CommandError::NotLoggedIn)?;
            let list = StoryList::fetch(&client).await?;
            let story = list
                .get(&story_id)
                .cloned()
                .ok_or_else(|| CommandError::StoryNotFound(story_id.clone()))?;
            session.add_favorite(&client, &story).await?;
            println!("favorited {story_id}");
        }

        Command::Unfavorite { story_id } => {
            let mut session = session.ok_or(CommandError::NotLoggedIn)?;
            // A favorite can outlive the feed copy (deleted by another
            // user), so look in the local favorites first.
            let story = session
                .user
                .favorites
                .iter()
                .find(|s| s.story_id == story_id)
                .cloned();
            let story = match story {
                Some(story) => story,
                None => StoryList::fetch(&client)
                    .await?
                    .get(&story_id)
                    .cloned()
                    .ok_or_else(|| CommandError::StoryNotFound(story_id.clone()))?,
            };
            session.remove_favorite(&client, &story).await?;
            println!("unfavorited {story_id}");
        }

        Command::Favorites => {
            let session = session.ok_or(CommandError::NotLoggedIn)?;
            if session.user.favorites.is_empty() {
                println!("No favorites yet.");
            }
            for story in &session.user.favorites {
                print_story(story, true);
            }
        }

        Command::Mine => {
            let session = session.ok_or(CommandError::NotLoggedIn)?;
            if session.user.own_stories.is_empty() {
                println!("No stories submitted yet.");
            }
            for story in &session.user.own_stories {
                print_story(story, session.is_favorite(story));
            }
        }

        Command::Signup {
            username,
            name,
            password,
        } => {
            let new_session = Session::signup(&client, &username, &password, &name).await?;
            save_session(&new_session, &creds_path)?;
            println!("welcome, {}", new_session.user.name);
        }

        Command::Login { username, password } => {
            let new_session = Session::login(&client, &username, &password).await?;
            save_session(&new_session, &creds_path)?;
            println!("logged in as {}", new_session.user.username);
        }

        Command::Logout => {
            StoredCredentials::clear(&creds_path)?;
            println!("logged out");
        }

        Command::Whoami => {
            let session = session.ok_or(CommandError::NotLoggedIn)?;
            println!(
                "{} ({}), member since {}",
                session.user.username,
                session.user.name,
                session.user.created_at.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}

fn save_session(session: &Session, path: &std::path::Path) -> Result<(), CommandError> {
    StoredCredentials {
        token: session.token.clone(),
        username: session.user.username.clone(),
    }
    .save_to(path)?;
    Ok(())
}

/// Renders one story as a terminal line, mirroring the original list
/// markup: title, host name, author, poster.
fn print_story(story: &Story, favorite: bool) {
    let star = if favorite { "*" } else { " " };
    // host_name errors on URLs the server never validated; fall back to
    // the raw string rather than aborting the whole listing
    let host = story
        .host_name()
        .unwrap_or_else(|_| story.url.clone());
    println!(
        "{star} [{}] {} ({}) by {}, posted by {}",
        story.story_id, story.title, host, story.author, story.username
    );
}
