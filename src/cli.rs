use std::{
    io,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use tracing::warn;

use crate::{
    app,
    constants::MESSAGES,
    domain::{PlantingRecord, cost_per_hectare, profit_per_hectare},
    seed::SeedType,
    storage,
    validation::{RawSubmission, validate_submission},
};

#[derive(Parser, Debug)]
#[command(name = "seedfall")]
#[command(about = "Planting records with a seed rain", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Open the planting form (default)")]
    Ui {
        #[arg(long, help = "Directory the CSV export is written to")]
        export_dir: Option<PathBuf>,

        #[arg(long, help = "CSV file the export is written to (overrides --export-dir)")]
        out: Option<PathBuf>,
    },

    #[command(about = "Validate one planting and print its profit")]
    Profit {
        #[arg(long, help = "Crop name")]
        crop: String,

        #[arg(long, help = "Planted area in hectares")]
        area: String,

        #[arg(long, help = "Planting date (dd/mm/yyyy)")]
        date: String,

        #[arg(long, help = "Seed price per hectare")]
        seed_price: String,

        #[arg(long, help = "Fertilizer price per hectare")]
        fert_price: String,

        #[arg(long, help = "Sale value per hectare")]
        sale_price: String,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

impl Cli {
    /// The UI owns the terminal, so its logs go to a file instead of stderr.
    pub fn runs_ui(&self) -> bool {
        matches!(self.command, None | Some(Command::Ui { .. }))
    }
}

#[derive(Debug, Serialize)]
pub struct ProfitReport {
    #[serde(skip)]
    pub line: String,
    pub crop: String,
    pub area: f64,
    pub date: String,
    pub seed_type: SeedType,
    pub cost_per_hectare: f64,
    pub profit_per_hectare: f64,
    pub total_profit: f64,
}

pub fn build_profit_report(raw: &RawSubmission) -> Result<ProfitReport, String> {
    let draft = validate_submission(raw).map_err(|e| {
        warn!(error = %e, "profit input rejected");
        format!("{} ({})", MESSAGES.invalid_form, e)
    })?;

    let cost = cost_per_hectare(draft.seed_price, draft.fert_price);
    let per_hectare = profit_per_hectare(draft.seed_price, draft.fert_price, draft.sale_price);
    let record = PlantingRecord::from_draft(draft);

    Ok(ProfitReport {
        line: record.display_line(),
        crop: record.crop().to_string(),
        area: record.area(),
        date: record.date_text().to_string(),
        seed_type: SeedType::classify(record.crop()),
        cost_per_hectare: cost,
        profit_per_hectare: per_hectare,
        total_profit: record.total_profit(),
    })
}

pub fn print_profit(raw: &RawSubmission, json: bool) -> Result<(), String> {
    let report = build_profit_report(raw)?;

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        println!("{}", report.line);
        println!("Custo por ha: R$ {:.2}", report.cost_per_hectare);
        println!("Lucro por ha: R$ {:.2}", report.profit_per_hectare);
        println!("Semente: {}", report.seed_type);
    }

    Ok(())
}

/// An explicit `--out` file wins over `--export-dir`.
pub fn resolve_export_path(out: Option<PathBuf>, export_dir: Option<&Path>) -> PathBuf {
    out.unwrap_or_else(|| storage::default_export_path(export_dir))
}

pub fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    };
    clap_complete::generate(shell, &mut Cli::command(), "seedfall", &mut io::stdout());
    Ok(())
}

pub fn run_cli(cli: Cli) {
    let result = match cli.command {
        None => app::run_ui(storage::default_export_path(None)).map_err(|e| e.to_string()),
        Some(Command::Ui { export_dir, out }) => {
            app::run_ui(resolve_export_path(out, export_dir.as_deref())).map_err(|e| e.to_string())
        }
        Some(Command::Profit {
            crop,
            area,
            date,
            seed_price,
            fert_price,
            sale_price,
            json,
        }) => {
            let raw = RawSubmission {
                crop,
                area,
                date,
                seed_price,
                fert_price,
                sale_price,
            };
            print_profit(&raw, json)
        }
        Some(Command::Completions { shell }) => print_completions(&shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
