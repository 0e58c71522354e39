use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use lightbnb_db::db::pool::{self, PgPool};
use lightbnb_db::models::{NewProperty, NewUser, PropertyFilter, PropertyFilterParams};
use lightbnb_db::query::listing;
use lightbnb_db::{PropertyRepo, ReservationRepo, StoreConfig, UserRepo};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Substring of the city name (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum price per night, in dollars (needs --max-price)
    #[arg(long, value_name = "DOLLARS")]
    pub min_price: Option<Decimal>,

    /// Maximum price per night, in dollars (needs --min-price)
    #[arg(long, value_name = "DOLLARS")]
    pub max_price: Option<Decimal>,

    /// Minimum average rating
    #[arg(long)]
    pub min_rating: Option<Decimal>,

    /// Maximum number of results (default from config, 10)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Print the SQL and parameters without connecting
    #[arg(long)]
    pub dry_run: bool,
}

impl PropertiesArgs {
    fn filter(&self) -> PropertyFilter {
        PropertyFilterParams {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
        .into()
    }
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct UserArgs {
    /// Email address (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum number of results (default from config, 10)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct AddUserArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Already-hashed password
    #[arg(long)]
    pub password: String,
}

#[derive(Parser, Debug)]
pub struct AddPropertyArgs {
    /// JSON file with the property fields (cost_per_night in cents)
    #[arg(long, value_name = "FILE")]
    pub from_json: PathBuf,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn connect(config: &StoreConfig) -> Result<PgPool> {
    pool::connect(config)
        .await
        .context("Failed to connect to database")
}

pub async fn run_properties(args: PropertiesArgs, config: &StoreConfig) -> Result<()> {
    let filter = args.filter();
    let limit = args.limit.unwrap_or(config.default_limit);

    if args.dry_run {
        return print_json(&listing::build(&filter, limit));
    }

    let pool = connect(config).await?;
    let listings = PropertyRepo::new(&pool).list(&filter, Some(limit)).await;
    print_json(&listings)
}

pub async fn run_user(args: UserArgs, config: &StoreConfig) -> Result<()> {
    let pool = connect(config).await?;
    let repo = UserRepo::new(&pool);

    let user = match (args.email, args.id) {
        (Some(email), _) => repo.find_by_email(&email).await,
        (None, Some(id)) => repo.find_by_id(id).await,
        (None, None) => None,
    };
    print_json(&user)
}

pub async fn run_reservations(args: ReservationsArgs, config: &StoreConfig) -> Result<()> {
    let pool = connect(config).await?;
    let limit = args.limit.unwrap_or(config.default_limit);
    let reservations = ReservationRepo::new(&pool)
        .list_past(args.guest_id, Some(limit))
        .await;
    print_json(&reservations)
}

pub async fn run_add_user(args: AddUserArgs, config: &StoreConfig) -> Result<()> {
    let user = NewUser::new(&args.name, &args.email, &args.password)?;
    let pool = connect(config).await?;
    let added = UserRepo::new(&pool).add(user).await?;
    print_json(&added)
}

pub async fn run_add_property(args: AddPropertyArgs, config: &StoreConfig) -> Result<()> {
    let contents = std::fs::read_to_string(&args.from_json)
        .with_context(|| format!("Failed to read {}", args.from_json.display()))?;
    let property: NewProperty = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid property JSON in {}", args.from_json.display()))?;
    let property = property.validate()?;

    let pool = connect(config).await?;
    let added = PropertyRepo::new(&pool).add(property).await?;
    print_json(&added)
}
