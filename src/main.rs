use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use teendash::cli::{
    handle_calendar_command, handle_goal_command, handle_quick_command, handle_summary_command,
    handle_task_command, handle_tips_command, CalendarCommands, GoalCommands, QuickCommands,
    TaskCommands,
};
use teendash::config::{DashPaths, Settings};
use teendash::store::{DashboardStore, DataSource, JsonFileSource, SeedSource};

#[derive(Parser)]
#[command(
    name = "teendash",
    version,
    about = "Terminal dashboard for teen personal finance and job tracking",
    long_about = "teendash keeps a teenager's money and job search in one \
                  place: tasks with due dates, a calendar of income, expense \
                  and job events, savings goals, and a quick-entry ledger."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management commands
    #[command(subcommand)]
    Task(TaskCommands),

    /// Calendar commands
    #[command(subcommand, alias = "cal")]
    Calendar(CalendarCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Quick-entry commands for income and expenses
    #[command(subcommand)]
    Quick(QuickCommands),

    /// Monthly financial summary
    Summary {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Print as CSV instead of a formatted report
        #[arg(long)]
        csv: bool,
    },

    /// Show personalized tips
    Tips,

    /// Initialize the dashboard with starter data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let paths = DashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let snapshot_path = paths.dashboard_file();
    let mut store = if snapshot_path.exists() {
        DashboardStore::load_from(&JsonFileSource::new(&snapshot_path))?
    } else {
        DashboardStore::load_from(&SeedSource)?
    };

    let mutated = match cli.command {
        Commands::Task(cmd) => handle_task_command(&mut store, cmd, today)?,
        Commands::Calendar(cmd) => {
            handle_calendar_command(&store, cmd, today)?;
            false
        }
        Commands::Goal(cmd) => handle_goal_command(&mut store, cmd, today)?,
        Commands::Quick(cmd) => handle_quick_command(&mut store, cmd, today)?,
        Commands::Summary { month, csv } => {
            handle_summary_command(&store, month, csv, today)?;
            false
        }
        Commands::Tips => {
            handle_tips_command(&store);
            false
        }
        Commands::Init => {
            if snapshot_path.exists() {
                println!(
                    "Dashboard already initialized at {}",
                    snapshot_path.display()
                );
            } else {
                paths.ensure_directories()?;
                store.save_snapshot(&snapshot_path)?;
                println!(
                    "Initialized dashboard at {} from {}",
                    snapshot_path.display(),
                    SeedSource.describe()
                );
            }
            false
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Snapshot file:   {}", snapshot_path.display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!(
                "Week starts:     {}",
                if settings.first_day_of_week == 0 {
                    "Sunday"
                } else {
                    "Monday"
                }
            );
            false
        }
    };

    // Persist state changes so the next run picks them up
    if mutated {
        paths.ensure_directories()?;
        store.save_snapshot(&snapshot_path)?;
    }

    Ok(())
}
