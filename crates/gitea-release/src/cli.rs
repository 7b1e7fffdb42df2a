//! CLI argument parsing with clap
//!
//! Flags double as CI plugin settings: each one binds to the environment
//! variable Woodpecker CI delivers plugin configuration through.

use clap::Parser;
use gitea_release_core::Settings;

/// Publish files and artifacts to Gitea releases
#[derive(Parser, Debug)]
#[command(name = "gitea-release")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key to access the Gitea API
    #[arg(long, env = "PLUGIN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// URL of the Gitea instance
    #[arg(long, env = "PLUGIN_BASE_URL")]
    pub base_url: String,

    /// List of files to upload
    #[arg(long = "files", env = "PLUGIN_FILES", value_delimiter = ',')]
    pub files: Vec<String>,

    /// What to do if an asset with the same name already exists
    #[arg(long, env = "PLUGIN_FILE_EXIST", default_value = "overwrite")]
    pub file_exists: String,

    /// Generate specific checksums
    #[arg(long = "checksum", env = "PLUGIN_CHECKSUM", value_delimiter = ',')]
    pub checksum: Vec<String>,

    /// Create a draft release
    #[arg(long, env = "PLUGIN_DRAFT")]
    pub draft: bool,

    /// Set the release as prerelease
    #[arg(long, env = "PLUGIN_PRERELEASE")]
    pub prerelease: bool,

    /// File or string for the title shown in the Gitea release
    #[arg(long, env = "PLUGIN_TITLE", default_value = "")]
    pub title: String,

    /// File or string with notes for the release
    #[arg(long, env = "PLUGIN_NOTE", default_value = "")]
    pub note: String,

    /// Repository owner
    #[arg(long, env = "CI_REPO_OWNER")]
    pub owner: String,

    /// Repository name
    #[arg(long, env = "CI_REPO_NAME")]
    pub repo: String,

    /// Build event
    #[arg(long, env = "CI_PIPELINE_EVENT", default_value = "push")]
    pub event: String,

    /// Git commit ref
    #[arg(long, env = "CI_COMMIT_REF", default_value = "refs/heads/main")]
    pub commit_ref: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Convert the parsed arguments into run settings
    pub fn into_settings(self) -> Settings {
        Settings {
            api_key: self.api_key,
            base_url: self.base_url,
            files: self.files,
            checksum: self.checksum,
            file_exists: self.file_exists,
            draft: self.draft,
            prerelease: self.prerelease,
            title: self.title,
            note: self.note,
            event: self.event,
            commit_ref: self.commit_ref,
            owner: self.owner,
            repo: self.repo,
        }
    }
}
