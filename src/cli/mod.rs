//! Command-line entry point.
//!
//! Without a subcommand the interactive client starts; the subcommands run a
//! single step of the workflow and print the outcome.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::DEFAULT_API_URL;
use crate::config::{Settings, SettingsInput};
use crate::models::ContactMethod;
use crate::{logging, tui};

#[derive(Parser)]
#[command(name = "contact-finder")]
#[command(version)]
#[command(about = "Find companies by city and industry, then start contact with them", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Base URL of the contact finder backend
    #[arg(long, global = true, env = "CONTACT_FINDER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory for the stored results and the log file
    #[arg(long, global = true, env = "CONTACT_FINDER_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Keep results in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Request timeout in seconds (0 or unset: wait indefinitely)
    #[arg(long, global = true, env = "CONTACT_FINDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Start the interactive client on the results of the previous search
    #[arg(long)]
    pub resume: bool,
}

impl GlobalArgs {
    fn settings_input(&self) -> SettingsInput {
        SettingsInput {
            api_url: self.api_url.clone(),
            cache_dir: self.cache_dir.clone(),
            no_persist: self.no_persist,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for companies and store the result list
    Search {
        /// City to search in (required)
        #[arg(long, default_value = "")]
        city: String,

        /// Industry to search for (required)
        #[arg(long, default_value = "")]
        industry: String,

        /// Company types, comma-separated
        #[arg(long, default_value = "")]
        types: String,

        /// Areas within the city, comma-separated
        #[arg(long, default_value = "")]
        areas: String,

        /// Print the companies as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start contact with a company
    Contact {
        /// Company id as returned by a search
        company_id: String,

        /// Contact method (email, whatsapp, call, sms, linkedin, twitter, telegram, contact_form, live_chat)
        #[arg(long, default_value = "whatsapp")]
        method: ContactMethod,

        /// Print the contact link instead of opening it
        #[arg(long)]
        no_open: bool,
    },
    /// Show the stored results of the last search
    Results {
        /// Print the stored results as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.global.settings_input())?;

    match cli.command {
        None => {
            // Logging is best effort; the client works without it
            if let Err(e) = logging::init_file(&settings.log_path()) {
                eprintln!("Warning: {:#}", e);
            }
            tui::run_interactive(&settings, cli.global.resume)
        }
        Some(command) => {
            logging::init_stderr()?;
            commands::execute(command, &settings)
        }
    }
}
