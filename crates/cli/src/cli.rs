//! Command-line arguments

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tudofresco_domain::constants::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_PRODUCT_PAGE_SIZE, DEFAULT_RADIUS_METERS,
};
use tudofresco_domain::{
    AccessLevel, DemandStatus, GenderType, Page, ProductType, StoreType, UnitType,
};

#[derive(Debug, Parser)]
#[command(name = "tudofresco", author, version, long_about = None)]
#[command(about = "Tudo Fresco marketplace client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Keep the session in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Output format for command results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "TUDOFRESCO_LOG_JSON", global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "TUDOFRESCO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the local session
    Whoami,
    /// Create an account
    Signup(SignupArgs),
    /// Manage stores
    Stores {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Search and publish products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Demands published by a store
    Demands {
        #[command(subcommand)]
        command: DemandCommands,
    },
    /// Demand feed around a store
    Reel {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only posts in this status
        #[arg(long, default_value_t = DemandStatus::Any)]
        status: DemandStatus,
    },
    /// The signed-in user's profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub date_of_birth: NaiveDate,
    #[arg(long)]
    pub gender: GenderType,
    #[arg(long)]
    pub phone_number: String,
    #[arg(long, env = "TUDOFRESCO_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, default_value_t = AccessLevel::StoreOwner)]
    pub user_access: AccessLevel,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: u32,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::new(args.page, args.per_page)
    }
}

/// Store, radius and category shared by demand listings and the reel
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Store the listing is centered on
    #[arg(long)]
    pub store: String,
    #[arg(long, default_value_t = DEFAULT_RADIUS_METERS)]
    pub radius_meters: u32,
    #[arg(long, default_value_t = ProductType::Any)]
    pub product_type: ProductType,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Subcommand)]
pub enum StoreCommands {
    /// Stores owned by the signed-in user
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Look up registry data for a CNPJ
    FreshFill { cnpj: String },
    /// Register a store from its CNPJ registry data
    Create(CreateStoreArgs),
}

#[derive(Debug, Args)]
pub struct CreateStoreArgs {
    pub cnpj: String,
    /// Address created beforehand for the store
    #[arg(long)]
    pub address_uuid: String,
    #[arg(long, default_value_t = StoreType::Supplier)]
    pub store_type: StoreType,
    /// Replaces the registry trade name
    #[arg(long)]
    pub trade_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommands {
    /// Search the catalog by name
    Search {
        /// Name to search for; everything when omitted
        name: Option<String>,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PRODUCT_PAGE_SIZE)]
        per_page: u32,
    },
    /// Add a product to the catalog
    Create {
        name: String,
        #[arg(long)]
        unit_type: UnitType,
        #[arg(long = "type")]
        product_type: ProductType,
    },
    /// Attach an image to a product
    UploadImage {
        product_uuid: String,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum DemandCommands {
    /// Demands around a store
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// One demand of a store
    Show {
        demand_uuid: String,
        #[arg(long)]
        store: String,
    },
    /// Publish a demand
    Create(CreateDemandArgs),
}

#[derive(Debug, Args)]
pub struct CreateDemandArgs {
    #[arg(long)]
    pub store: String,
    #[arg(long)]
    pub product: String,
    #[arg(long)]
    pub needed: u32,
    #[arg(long)]
    pub minimum: Option<u32>,
    #[arg(long, default_value = "")]
    pub description: String,
    /// ISO-8601 timestamp
    #[arg(long)]
    pub deadline: String,
    #[arg(long, default_value_t = DemandStatus::Opened)]
    pub status: DemandStatus,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Fetch the signed-in user's profile
    Show,
    /// Print a signed URL for the profile picture
    Picture,
    /// Replace the profile picture
    UploadPicture {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn reel_defaults() {
        let cli = Cli::try_parse_from(["tudofresco", "reel", "--store", "s-1"]).unwrap();
        match cli.command {
            Commands::Reel { filter, status } => {
                assert_eq!(filter.store, "s-1");
                assert_eq!(filter.radius_meters, 10_000);
                assert_eq!(filter.product_type, ProductType::Any);
                assert_eq!(Page::from(filter.page), Page::new(1, 100));
                assert_eq!(status, DemandStatus::Any);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn wire_enums_parse_case_insensitively() {
        let cli = Cli::try_parse_from([
            "tudofresco",
            "demands",
            "list",
            "--store",
            "s-1",
            "--product-type",
            "root_vegetable",
        ])
        .unwrap();
        match cli.command {
            Commands::Demands { command: DemandCommands::List { filter } } => {
                assert_eq!(filter.product_type, ProductType::RootVegetable);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn signup_parses_date_of_birth() {
        let cli = Cli::try_parse_from([
            "tudofresco",
            "signup",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--date-of-birth",
            "1990-05-17",
            "--gender",
            "FEMALE",
            "--phone-number",
            "41999990000",
            "--password",
            "hunter2",
        ])
        .unwrap();
        match cli.command {
            Commands::Signup(args) => {
                assert_eq!(args.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
                assert_eq!(args.user_access, AccessLevel::StoreOwner);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tudofresco", "whoami", "--ephemeral", "--output", "json"])
            .unwrap();
        assert!(cli.ephemeral);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result = Cli::try_parse_from([
            "tudofresco",
            "signup",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--date-of-birth",
            "17/05/1990",
            "--gender",
            "FEMALE",
            "--phone-number",
            "41999990000",
            "--password",
            "x",
        ]);
        assert!(result.is_err());
    }
}
