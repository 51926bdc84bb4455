//! Postbox CLI Client
//!
//! Command-line interface for interacting with a Postbox server.

use clap::{Parser, Subcommand};
use postbox::protocol::{CreatePost, UpdatePost};
use serde_json::Value;

/// Postbox CLI
#[derive(Parser, Debug)]
#[command(name = "postbox-cli")]
#[command(about = "CLI for the Postbox post store")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:5002")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List posts, optionally sorted
    List {
        /// Field to sort by (title or content)
        #[arg(long, requires = "direction")]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long, requires = "sort")]
        direction: Option<String>,
    },

    /// Create a post
    Create {
        title: String,
        content: String,
    },

    /// Update a post's title and/or content
    Update {
        /// The post id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a post
    Delete {
        /// The post id
        id: String,
    },

    /// Search posts by title and/or content
    Search {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Ping the server
    Ping,
}

fn main() {
    let args = Args::parse();
    let base = args.server.trim_end_matches('/');
    let posts_url = format!("{}/api/posts", base);

    let result = match args.command {
        Commands::List { sort, direction } => {
            let mut request = ureq::get(&posts_url);
            if let (Some(sort), Some(direction)) = (&sort, &direction) {
                request = request.query("sort", sort).query("direction", direction);
            }
            request.call()
        }
        Commands::Create { title, content } => {
            ureq::post(&posts_url).send_json(CreatePost::new(title, content))
        }
        Commands::Update { id, title, content } => {
            ureq::put(&format!("{}/{}", posts_url, id)).send_json(UpdatePost { title, content })
        }
        Commands::Delete { id } => ureq::delete(&format!("{}/{}", posts_url, id)).call(),
        Commands::Search { title, content } => {
            // Both parameters are always sent, empty when not given
            ureq::get(&format!("{}/search", posts_url))
                .query("title", title.as_deref().unwrap_or(""))
                .query("content", content.as_deref().unwrap_or(""))
                .call()
        }
        Commands::Ping => ureq::get(&format!("{}/api/health", base)).call(),
    };

    match result {
        Ok(response) => print_body(response, false),
        Err(ureq::Error::Status(code, response)) => {
            eprintln!("Request failed with HTTP {}", code);
            print_body(response, true);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Could not reach {}: {}", base, e);
            std::process::exit(1);
        }
    }
}

/// Pretty-print a JSON response body
fn print_body(response: ureq::Response, to_stderr: bool) {
    let body = match response.into_json::<Value>() {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
        Err(e) => format!("<unreadable response body: {}>", e),
    };

    if to_stderr {
        eprintln!("{}", body);
    } else {
        println!("{}", body);
    }
}
