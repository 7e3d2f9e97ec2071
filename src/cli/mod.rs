//! Command-line front end.
//!
//! Each subcommand drives the same use case a screen of the mobile client
//! would. Field values are passed through raw; the validation engine decides
//! what is acceptable.

pub mod handlers;
pub mod terminal_ui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nx_core::{LoginForm, RegistrationForm, StorageBackend};

use crate::bootstrap::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "nexus", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read configuration from this TOML file instead of the app data directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Root URL of the API, e.g. http://192.168.8.198:8000
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Where the session is kept: auto, system, file or memory
    #[arg(long, global = true)]
    pub storage: Option<StorageBackend>,

    /// Also print info and debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            api_base_url: self.api_base_url.clone(),
            storage: self.storage,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        #[arg(short, long, default_value = "")]
        username: String,
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Create an account
    Register(RegisterArgs),

    /// Show the signed-in user's profile
    Profile,

    /// Forget the stored session
    Logout,

    /// Show where the app would start and who is signed in
    Status,

    /// List the trades a service provider can register with
    Trades,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub username: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long = "phone", default_value = "")]
    pub phone_number: String,
    /// BUSINESS or SERVICEPROVIDER
    #[arg(long, default_value = "")]
    pub account_type: String,
    /// 11-digit Australian Business Number (BUSINESS)
    #[arg(long, default_value = "")]
    pub abn: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// SERVICEPROVIDER only
    #[arg(long, default_value = "")]
    pub first_name: String,
    /// SERVICEPROVIDER only
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// SERVICEPROVIDER only; see `nexus trades`
    #[arg(long, default_value = "")]
    pub trade: String,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        RegistrationForm::new()
            .with_username(args.username)
            .with_email(args.email)
            .with_password(args.password)
            .with_phone_number(args.phone_number)
            .with_account_type(args.account_type)
            .with_abn(args.abn)
            .with_address(args.address)
            .with_first_name(args.first_name)
            .with_last_name(args.last_name)
            .with_trade(args.trade)
    }
}

pub fn login_form(username: String, password: String) -> LoginForm {
    LoginForm::new().with_username(username).with_password(password)
}
