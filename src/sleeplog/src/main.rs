#[macro_use]
extern crate log;

use anyhow::anyhow;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use sleeplog::{RECENT_NOTES, Session, input::parse_time};
use sleeplog_db::{DatabaseHandler, SearchSleepLog};
use sleeplog_types::{Quality, SleepRecord};

#[derive(Parser)]
#[command(name = "sleeplog", about = "Personal sleep log and statistics")]
pub struct SleepLogCli {
    #[arg(env, long, default_value = "sqlite://sleeplog.db?mode=rwc")]
    pub database_url: String,
    #[arg(env = "SLEEPLOG_USERNAME", long)]
    pub username: Option<String>,
    #[arg(env = "SLEEPLOG_PASSWORD", long, hide_env_values = true)]
    pub password: Option<String>,
    #[clap(subcommand)]
    pub subcommand: SleepLogCommand,
}

#[derive(Subcommand)]
pub enum SleepLogCommand {
    ///
    /// Create a new account
    ///
    SignUp,
    ///
    /// Log a night of sleep
    ///
    Log {
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "22:00", value_parser = parse_time)]
        sleep_time: NaiveTime,
        #[arg(long, default_value = "06:00", value_parser = parse_time)]
        wake_time: NaiveTime,
        /// Sleep quality from 1 to 5
        #[arg(long, default_value = "3")]
        quality: Quality,
        #[arg(long)]
        notes: Option<String>,
    },
    ///
    /// Print sleep statistics
    ///
    Stats {
        #[command(flatten)]
        range: DateRange,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    ///
    /// Print mean duration by weekday and bedtime hour
    ///
    Heatmap {
        #[command(flatten)]
        range: DateRange,
    },
    ///
    /// Print the most recent sleep notes
    ///
    Notes {
        #[command(flatten)]
        range: DateRange,
        #[arg(long, default_value_t = RECENT_NOTES)]
        limit: u64,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

#[derive(Args, Clone, Copy)]
pub struct DateRange {
    /// First day to include
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day to include
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl From<DateRange> for SearchSleepLog {
    fn from(range: DateRange) -> Self {
        SearchSleepLog::between(range.from, range.to)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = SleepLogCli::parse();

    if let SleepLogCommand::Completions { shell } = cli.subcommand {
        let mut command = SleepLogCli::command();
        clap_complete::generate(shell, &mut command, "sleeplog", &mut std::io::stdout());
        return Ok(());
    }

    let username = cli
        .username
        .ok_or(anyhow!("Username is required, pass --username or set SLEEPLOG_USERNAME"))?;
    let password = cli
        .password
        .ok_or(anyhow!("Password is required, pass --password or set SLEEPLOG_PASSWORD"))?;

    debug!("running as `{}`", username);
    let db = DatabaseHandler::new(cli.database_url).await?;
    let mut session = Session::new();

    if let SleepLogCommand::SignUp = cli.subcommand {
        session.go_to_signup()?;
        let user = session.sign_up(&db, &username, &password).await?;
        println!("Registration successful! Please log in as `{}`.", user.username);
        return Ok(());
    }

    session.log_in(&db, &username, &password).await?;
    let dashboard = session.dashboard(&db)?;

    match cli.subcommand {
        SleepLogCommand::Log {
            date,
            sleep_time,
            wake_time,
            quality,
            notes,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut record = SleepRecord::new(date, sleep_time, wake_time).with_quality(quality);
            if let Some(notes) = notes {
                record = record.with_notes(notes);
            }

            let duration = dashboard.log_sleep(record).await?;
            println!("Sleep data saved successfully! Duration: {:.1} hours", duration);
        }
        SleepLogCommand::Stats { range, json } => {
            match dashboard.summary(range.into()).await? {
                Some(summary) if json => println!("{}", serde_json::to_string_pretty(&summary)?),
                Some(summary) => println!("Sleep statistics for {}:\n{}", dashboard.user().username, summary),
                None => println!("No sleep data yet."),
            }
        }
        SleepLogCommand::Heatmap { range } => match dashboard.heatmap(range.into()).await? {
            Some(heatmap) => println!("{}", heatmap),
            None => println!("No sleep data yet."),
        },
        SleepLogCommand::Notes { range, limit } => {
            let notes = dashboard.recent_notes(range.into(), limit).await?;
            if notes.is_empty() {
                println!("No sleep notes yet.");
            }

            for record in notes {
                println!("{}\n\t{}", record.date, record.notes.unwrap_or_default());
            }
        }
        SleepLogCommand::SignUp | SleepLogCommand::Completions { .. } => {
            unreachable!("handled before logging in")
        }
    }

    session.log_out();
    Ok(())
}
