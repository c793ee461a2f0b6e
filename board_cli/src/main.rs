//! # Board Calculator CLI
//!
//! Command-line front end for `board_core`: grammage, tonnage, price, MOQ,
//! multi-row price quotes, and the article catalog.
//!
//! Defaults (price per kg, MOQ target, flute) come from `board.toml` in the
//! working directory, or the file given with `--config`. Flags override them.
//! Pass `--json` to get the result as JSON instead of text.

mod format;
mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use board_core::articles::{ArticleCatalog, ArticleSort, ArticleSortKey, SortDirection};
use board_core::calculations::grammage::resolve_with_rule;
use board_core::calculations::{moq, price, tonnage, SheetSpec, TonnageInput};
use board_core::settings::{Settings, DEFAULT_SETTINGS_FILE};
use board_core::{CalcError, CalcResult, FluteCode, PlyWeights};

#[derive(Debug, Parser)]
#[command(name = "board", version, about = "Corrugated board grammage, tonnage, price and MOQ calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (default: ./board.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct SheetArgs {
    /// Sheet length (mm)
    #[arg(short, long, allow_hyphen_values = true)]
    length: f64,

    /// Sheet width (mm)
    #[arg(short, long, allow_hyphen_values = true)]
    width: f64,

    /// Substance, e.g. 125/110/125
    #[arg(short, long)]
    substance: String,

    /// Flute code (A, B, C, E, F, BC, BE, AB)
    #[arg(short, long)]
    flute: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Board grammage (g/m²) of a substance
    Grammage {
        /// Substance, e.g. 125/110/125
        substance: String,

        /// Flute code
        #[arg(short, long)]
        flute: Option<String>,
    },
    /// Total weight of an order in tonnes
    Tonnage {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Number of sheets
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Price of an order
    Price {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Number of sheets
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: i64,

        /// Paper price (USD/kg)
        #[arg(long, allow_hyphen_values = true)]
        price_per_kg: Option<f64>,
    },
    /// Minimum sheets to reach a production tonnage
    Moq {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Target tonnage
        #[arg(long, allow_hyphen_values = true)]
        min_tonnage: Option<f64>,
    },
    /// Multi-row price quote from a JSON file of order rows
    Quote {
        /// JSON array of {length_mm, width_mm, substance, flute, quantity}
        rows: PathBuf,

        /// Paper price (USD/kg)
        #[arg(long, allow_hyphen_values = true)]
        price_per_kg: Option<f64>,
    },
    /// List flute codes and take-up factors
    Flutes,
    /// List catalog articles
    Articles {
        /// Only articles containing this text in any column
        #[arg(long)]
        filter: Option<String>,

        /// Sort column: name, flute, substance, length, width
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show one article and its grammage
    Article {
        /// Article id
        id: String,
    },
}

/// Everything a command needs besides its own arguments
struct Context {
    settings: Settings,
    json: bool,
}

impl Context {
    /// Turn a typed flute code into its table code; unknown text is kept
    /// as-is so the calculators fall back to the plain ply sum.
    fn flute(&self, typed: Option<&str>) -> String {
        match typed {
            None => self.settings.default_flute.code().to_string(),
            Some(text) => match FluteCode::from_str_flexible(text) {
                Ok(code) => code.code().to_string(),
                Err(err) => {
                    tracing::warn!("{err}; grammage falls back to the plain ply sum");
                    text.to_string()
                }
            },
        }
    }

    fn sheet(&self, args: &SheetArgs) -> SheetSpec {
        SheetSpec::new(args.length, args.width, args.substance.clone(), self.flute(args.flute.as_deref()))
    }

    fn catalog(&self) -> CalcResult<ArticleCatalog> {
        match &self.settings.articles_path {
            Some(path) => ArticleCatalog::load(path),
            None => ArticleCatalog::builtin().cloned(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════");
}

fn print_sheet(sheet: &SheetSpec) {
    println!("  Size:      {} x {} mm", sheet.length_mm, sheet.width_mm);
    println!("  Substance: {} ({})", sheet.substance, sheet.plies());
    println!("  Flute:     {}", sheet.flute);
    println!("  Grammage:  {:.2} g/m²", sheet.grammage().0);
}

#[derive(Serialize)]
struct GrammageReport {
    substance: String,
    plies: PlyWeights,
    flute: String,
    grammage: f64,
    rule: &'static str,
}

fn run_grammage(ctx: &Context, substance: &str, flute: Option<&str>) -> CalcResult<()> {
    let flute = ctx.flute(flute);
    let plies = PlyWeights::parse(substance);
    let breakdown = resolve_with_rule(&plies, FluteCode::from_code(&flute));

    if ctx.json {
        return print_json(&GrammageReport {
            substance: substance.to_string(),
            plies,
            flute,
            grammage: breakdown.grammage.0,
            rule: breakdown.rule.display_name(),
        });
    }

    print_banner("GRAMMAGE");
    println!("  Substance: {substance} ({plies})");
    println!("  Flute:     {flute}");
    println!("  Rule:      {}", breakdown.rule.display_name());
    println!();
    println!("  Grammage:  {:.2} g/m²", breakdown.grammage.0);
    Ok(())
}

fn run_tonnage(ctx: &Context, sheet: SheetSpec, quantity: i64) -> CalcResult<()> {
    let input = sheet.with_quantity(quantity);
    let tonnes = tonnage::calculate(&input);

    if ctx.json {
        return print_json(&serde_json::json!({ "input": input, "tonnage": tonnes }));
    }

    print_banner("TONNAGE");
    print_sheet(&input.sheet);
    println!("  Quantity:  {} sheets", input.quantity);
    println!();
    println!("  Tonnage:   {:.4} t ({:.2} kg)", tonnes.0, tonnes.0 * 1000.0);
    Ok(())
}

fn run_price(ctx: &Context, sheet: SheetSpec, quantity: i64, price_per_kg: Option<f64>) -> CalcResult<()> {
    let price_per_kg = price_per_kg.unwrap_or(ctx.settings.price_per_kg);
    let input = sheet.with_quantity(quantity).at_price(price_per_kg);
    let amount = price::calculate(&input);

    if ctx.json {
        return print_json(&serde_json::json!({ "input": input, "price": amount }));
    }

    print_banner("PRICE");
    print_sheet(&input.row.sheet);
    println!("  Quantity:  {} sheets", input.row.quantity);
    println!("  Unit:      {} / kg", format::usd(price_per_kg));
    println!();
    println!("  Price:     {}", format::usd(amount.0));
    Ok(())
}

fn run_moq(ctx: &Context, sheet: SheetSpec, min_tonnage: Option<f64>) -> CalcResult<()> {
    let input = sheet.with_min_tonnage(min_tonnage.unwrap_or(ctx.settings.min_tonnage));
    let result = moq::calculate(&input);

    if ctx.json {
        return print_json(&serde_json::json!({
            "input": input,
            "moq": result,
            "sheets": result.sheets(),
        }));
    }

    print_banner("MINIMUM ORDER QUANTITY");
    print_sheet(&input.sheet);
    println!("  Target:    {} t", input.min_tonnage);
    println!();
    println!("  MOQ:       {}", format::moq(result));
    Ok(())
}

/// Read a JSON array of order rows
fn load_rows(path: &Path) -> CalcResult<Vec<TonnageInput>> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn run_quote(ctx: &Context, path: &Path, price_per_kg: Option<f64>) -> CalcResult<()> {
    let rows = load_rows(path)?;
    let price_per_kg = price_per_kg.unwrap_or(ctx.settings.price_per_kg);
    tracing::debug!(rows = rows.len(), price_per_kg, "pricing quote");
    let quote = price::quote(&rows, price_per_kg);

    if ctx.json {
        return print_json(&quote);
    }

    print_banner("PRICE QUOTE");
    println!("  Unit price: {} / kg", format::usd(price_per_kg));
    println!();
    println!(
        "  {:>8} {:>8} {:<24} {:<5} {:>9} {:>14}",
        "Length", "Width", "Substance", "Flute", "Quantity", "Price"
    );
    for (row, line) in rows.iter().zip(&quote.lines) {
        println!(
            "  {:>8} {:>8} {:<24} {:<5} {:>9} {:>14}",
            row.sheet.length_mm,
            row.sheet.width_mm,
            row.sheet.substance,
            row.sheet.flute,
            row.quantity,
            format::usd(line.0)
        );
    }
    println!();
    println!("  Total estimated price: {}", format::usd(quote.total.0));
    Ok(())
}

fn run_flutes(ctx: &Context) -> CalcResult<()> {
    if ctx.json {
        let table: Vec<_> = FluteCode::ALL
            .iter()
            .map(|f| serde_json::json!({ "code": f, "takeup": f.takeup(), "double_wall": f.is_double_wall() }))
            .collect();
        return print_json(&table);
    }

    print_banner("FLUTE TAKE-UP FACTORS");
    for flute in FluteCode::ALL {
        let wall = if flute.is_double_wall() { "double" } else { "single" };
        println!("  {:<3} {:<7} {:.2}", flute.code(), wall, flute.takeup());
    }
    Ok(())
}

fn run_articles(ctx: &Context, filter: Option<&str>, sort: Option<&str>, desc: bool) -> CalcResult<()> {
    let catalog = ctx.catalog()?;
    let key = match sort {
        Some(text) => ArticleSortKey::from_str_flexible(text)?,
        None => ArticleSort::default().key,
    };
    let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
    let rows = catalog.query(filter.unwrap_or(""), ArticleSort::new(key, direction));

    if ctx.json {
        return print_json(&rows);
    }

    println!(
        "  {:<8} {:<28} {:<5} {:<24} {:>11} {:>10}",
        "Id",
        ArticleSortKey::Name.header(),
        ArticleSortKey::Flute.header(),
        ArticleSortKey::Substance.header(),
        ArticleSortKey::Length.header(),
        ArticleSortKey::Width.header()
    );
    for article in &rows {
        println!(
            "  {:<8} {:<28} {:<5} {:<24} {:>11} {:>10}",
            article.id, article.name, article.flute, article.substance, article.length_mm, article.width_mm
        );
    }
    if rows.is_empty() {
        println!("  No results.");
    }
    Ok(())
}

fn run_article(ctx: &Context, id: &str) -> CalcResult<()> {
    let catalog = ctx.catalog()?;
    let article = catalog.find(id)?;

    if ctx.json {
        return print_json(&serde_json::json!({ "article": article, "grammage": article.grammage() }));
    }

    print_banner(&format!("{} - {}", article.id, article.name));
    print_sheet(&article.sheet());
    Ok(())
}

fn run(cli: Cli) -> CalcResult<()> {
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = Settings::load_or_default(&config_path)?;
    let ctx = Context {
        settings,
        json: cli.json,
    };

    match cli.command {
        Command::Grammage { substance, flute } => run_grammage(&ctx, &substance, flute.as_deref()),
        Command::Tonnage { sheet, quantity } => run_tonnage(&ctx, ctx.sheet(&sheet), quantity),
        Command::Price {
            sheet,
            quantity,
            price_per_kg,
        } => run_price(&ctx, ctx.sheet(&sheet), quantity, price_per_kg),
        Command::Moq { sheet, min_tonnage } => run_moq(&ctx, ctx.sheet(&sheet), min_tonnage),
        Command::Quote { rows, price_per_kg } => run_quote(&ctx, &rows, price_per_kg),
        Command::Flutes => run_flutes(&ctx),
        Command::Articles { filter, sort, desc } => run_articles(&ctx, filter.as_deref(), sort.as_deref(), desc),
        Command::Article { id } => run_article(&ctx, &id),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
