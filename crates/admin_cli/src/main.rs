use std::error::Error;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{Engine, EngineError, NewUser};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "cost_manager_admin")]
#[command(about = "Admin utilities for the cost manager (schema, users)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./cost_manager.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply or inspect schema migrations.
    Migrate {
        #[arg(value_enum, default_value_t = MigrateAction::Up)]
        action: MigrateAction,
    },
    User(User),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MigrateAction {
    Up,
    Down,
    Fresh,
    Status,
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    /// External identifier; numeric ids are stored without leading zeros.
    #[arg(long)]
    id: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// Birth date as `YYYY-MM-DD`.
    #[arg(long)]
    birthday: NaiveDate,
    #[arg(long)]
    marital_status: String,
}

async fn migrate(
    db: &DatabaseConnection,
    action: MigrateAction,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match action {
        MigrateAction::Up => migration::Migrator::up(db, None).await?,
        MigrateAction::Down => migration::Migrator::down(db, None).await?,
        MigrateAction::Fresh => migration::Migrator::fresh(db).await?,
        MigrateAction::Status => migration::Migrator::status(db).await?,
    }
    Ok(())
}

async fn user_command(
    engine: &Engine,
    command: UserCommand,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match command {
        UserCommand::Create(args) => {
            let result = engine
                .create_user(NewUser {
                    id: args.id,
                    first_name: args.first_name,
                    last_name: args.last_name,
                    birthday: args.birthday,
                    marital_status: args.marital_status,
                })
                .await;

            match result {
                Ok(user) => println!(
                    "created user: {} ({} {})",
                    user.id, user.first_name, user.last_name
                ),
                Err(EngineError::ExistingKey(id)) => {
                    eprintln!("user already exists: {id}");
                    std::process::exit(1);
                }
                Err(err @ EngineError::InvalidUser(_)) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
                Err(err) => return Err(err.into()),
            }
        }
        UserCommand::List => {
            for user in engine.list_users().await? {
                println!(
                    "{}\t{} {}\t{}\t{}",
                    user.id, user.first_name, user.last_name, user.birthday, user.marital_status
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = Database::connect(&cli.database_url).await?;

    match cli.command {
        Command::Migrate { action } => migrate(&db, action).await?,
        Command::User(User { command }) => {
            migration::Migrator::up(&db, None).await?;
            let engine = Engine::builder().database(db).build();
            user_command(&engine, command).await?;
        }
    }

    Ok(())
}
