//! Command-line interface.

pub mod completions;
pub mod dump;
pub mod list;
pub mod load;
pub mod output;
pub mod set;
pub mod unset;
pub mod version;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Options;
use crate::core::constants::STORE_FILE_ENV;
use crate::core::store::{self, SecretStore};
use crate::error::Result;

/// k8sec - CLI tool to manage Kubernetes Secrets easily.
#[derive(Parser)]
#[command(
    name = "k8sec",
    about = "CLI tool to manage Kubernetes Secrets easily",
    version
)]
pub struct Cli {
    /// Kubernetes namespace
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Path of kubeconfig
    #[arg(long, global = true, value_name = "FILE")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubernetes context
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Use a local TOML file as the secret store instead of a cluster
    #[arg(long, global = true, value_name = "FILE", env = STORE_FILE_ENV)]
    pub store_file: Option<PathBuf>,

    /// Debug mode
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Global flags as an explicit options value.
    pub fn options(&self) -> Options {
        Options {
            namespace: self.namespace.clone(),
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            store_file: self.store_file.clone(),
            debug: self.debug,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Dump secrets as dotenv (key=value) format
    #[command(after_help = "Examples:\n  \
        k8sec dump rails\n  \
        k8sec dump -f .env rails\n  \
        k8sec dump -f .env --noquotes rails")]
    Dump {
        /// Secret name; all secrets in the namespace when omitted
        name: Option<String>,
        /// File to dump
        #[arg(short, long, value_name = "FILE")]
        filename: Option<PathBuf>,
        /// Dump without quotes
        #[arg(long)]
        noquotes: bool,
    },

    /// List secrets
    List {
        /// Secret name; all secrets in the namespace when omitted
        name: Option<String>,
        /// Show values as base64-encoded string
        #[arg(long)]
        base64: bool,
    },

    /// Load secrets from dotenv (key=value) format text
    #[command(after_help = "Examples:\n  \
        k8sec load -f .env rails\n  \
        cat .env | k8sec load rails")]
    Load {
        /// Secret name
        name: String,
        /// File to load; standard input when omitted
        #[arg(short, long, value_name = "FILE")]
        filename: Option<PathBuf>,
    },

    /// Set secrets
    #[command(after_help = "Examples:\n  \
        k8sec set rails rails-env=production\n  \
        k8sec set --base64 rails foo=ZHRhbjQ=")]
    Set {
        /// Secret name
        name: String,
        /// KEY=VALUE pairs
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
        /// Decode the given value as base64-encoded string
        #[arg(long)]
        base64: bool,
    },

    /// Unset secrets
    Unset {
        /// Secret name
        name: String,
        /// Keys to remove
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,
    },

    /// Print the version number of k8sec
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> Result<()> {
    use Command::*;

    match command {
        Dump {
            name,
            filename,
            noquotes,
        } => dump::execute(
            options,
            &dump::DumpOptions {
                name,
                filename,
                noquotes,
            },
        ),
        List { name, base64 } => list::execute(options, &list::ListOptions { name, base64 }),
        Load { name, filename } => load::execute(options, &load::LoadOptions { name, filename }),
        Set {
            name,
            pairs,
            base64,
        } => set::execute(
            options,
            &set::SetOptions {
                name,
                pairs,
                base64,
            },
        ),
        Unset { name, keys } => unset::execute(options, &unset::UnsetOptions { name, keys }),
        Version => version::execute(),
        Completions { shell } => completions::execute(shell),
    }
}

/// Open the configured store and resolve the namespace for this run.
pub(crate) fn connect(options: &Options) -> Result<(Box<dyn SecretStore>, String)> {
    let store = store::open(options)?;
    let namespace = store::resolve_namespace(options.namespace.as_deref(), store.as_ref());
    Ok((store, namespace))
}
