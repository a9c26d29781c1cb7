// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

// Use library instead of local modules
use numerology_engine::{
    compute_readings, get_sun_sign, load_people, logging, meaning_for, write_records,
    NumberMeaning, Reading,
};

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology numbers and sun signs from a name and birth date.")]
#[command(version)]
struct CommandLine {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four core numbers and the sun sign
    #[command(alias = "p")]
    Profile {
        #[arg(short, long)]
        name: String,
        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sun sign for a birth date
    #[command(alias = "s")]
    Sign { date: String },
    /// Describe a numerology number
    #[command(alias = "m")]
    Meaning { number: u32 },
    /// Compute readings for every row of a CSV (full_name,birth_date)
    #[command(alias = "b")]
    Batch {
        input: PathBuf,
        /// Write CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Interactive terminal form
    Ui,
}

fn main() -> Result<()> {
    let commands = CommandLine::parse();
    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Profile { name, date, json } => run_profile(&name, &date, json),
        Commands::Sign { date } => run_sign(&date),
        Commands::Meaning { number } => run_meaning(number),
        Commands::Batch { input, output } => run_batch(input, output),
        Commands::Ui => run_ui_mode(),
    }
}

fn run_profile(name: &str, date: &str, json: bool) -> Result<()> {
    let reading = Reading::from_raw(name, date)?;
    info!("reading computed for {}", reading.full_name);

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
        return Ok(());
    }

    println!("🔮 {} ({})", reading.full_name, reading.birth_date);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (label, number) in reading.profile.entries() {
        match meaning_for(number) {
            Ok(meaning) => println!("{:<12} {:>2}  {}", label, number, describe(&meaning)),
            Err(_) => println!("{:<12} {:>2}", label, number),
        }
    }
    println!(
        "{:<12} {}  {} ({})",
        "Sun Sign",
        reading.sun_sign.symbol(),
        reading.sun_sign,
        reading.element.as_str()
    );

    Ok(())
}

fn run_sign(date: &str) -> Result<()> {
    let sign = get_sun_sign(date)?;
    println!("{} {}  {}", sign.symbol(), sign, sign.date_range());
    Ok(())
}

fn run_meaning(number: u32) -> Result<()> {
    let meaning = meaning_for(number)?;
    println!("{} - {}", meaning.number, describe(&meaning));
    println!("   {}", meaning.description);
    println!("   {}", meaning.keywords.join(", "));
    Ok(())
}

fn run_batch(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let people = load_people(&input)?;
    let records = compute_readings(&people);

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_records(file, &records)?;
            eprintln!("✓ Wrote {} readings to {:?}", records.len(), path);
        }
        None => write_records(io::stdout().lock(), &records)?,
    }

    Ok(())
}

fn describe(meaning: &NumberMeaning) -> String {
    if meaning.is_master {
        format!("{} ✦ master number", meaning.title)
    } else {
        meaning.title.to_string()
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web form: cargo run --bin numerology-server --features server");
    std::process::exit(1);
}
