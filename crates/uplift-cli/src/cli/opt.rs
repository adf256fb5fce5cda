use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "uplift", about = "Guided self-reflection quests in the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[arg(long, global = true, env = "UPLIFT_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[arg(long, global = true, env = "UPLIFT_ENV", default_value = "dev")]
    pub env: String,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Answer a section interactively
    Run(Run),

    /// Check quest content files or directories
    Validate(Validate),

    /// Print the JSON schema of quest content files
    Schema,

    /// Print the progress of a quest
    Progress(Progress),
}

#[derive(Debug, Args)]
pub(crate) struct ContentArgs {
    /// Quest content directory, as path or url
    #[arg(short, long, env = "UPLIFT_CONTENT", default_value = "content")]
    pub(crate) content: String,
}

#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    /// Where completions are kept, as path or url. Ignored when `--api-url` is set.
    #[arg(short, long, env = "UPLIFT_STORE", default_value = ".uplift")]
    pub(crate) store: String,

    /// Keep completions in the uplift api instead of locally
    #[arg(long, env = "UPLIFT_API_URL")]
    pub(crate) api_url: Option<Url>,

    #[arg(long, env = "UPLIFT_API_TOKEN", hide_env_values = true)]
    pub(crate) api_token: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Run {
    #[command(flatten)]
    pub(crate) content: ContentArgs,

    #[command(flatten)]
    pub(crate) store: StoreArgs,

    #[arg(short, long)]
    pub(crate) quest: String,

    /// Section to answer, defaults to the first unlocked section not completed yet
    #[arg(long)]
    pub(crate) section: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Progress {
    #[command(flatten)]
    pub(crate) content: ContentArgs,

    #[command(flatten)]
    pub(crate) store: StoreArgs,

    #[arg(short, long)]
    pub(crate) quest: String,
}
