use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unitform::config::{self, FormConfig};
use unitform::form::Form;
use unitform::units::{self, UnitCategory};

#[derive(Parser)]
#[command(name = "unitform")]
#[command(about = "Unit-aware form definitions, values and SI conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List unit categories, or the units of one category
    Units {
        /// Category name (e.g. "length")
        category: Option<String>,
    },

    /// Convert a quantity such as "100 cm" to SI (or to another unit)
    Convert {
        /// Category name (e.g. "length")
        category: String,

        /// Quantity with unit (e.g. "100 cm")
        quantity: String,

        /// Target unit (default: SI)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Render a form as text
    Show {
        /// Form definition (TOML)
        form: String,

        /// Saved values to load first (JSON)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Print a form's values as JSON
    Values {
        /// Form definition (TOML)
        form: String,

        /// Saved values to load first (JSON)
        #[arg(short, long)]
        data: Option<String>,

        /// Convert values to SI
        #[arg(long)]
        si: bool,
    },

    /// Export SI values nested by canonical key
    Export {
        /// Form definition (TOML)
        form: String,

        /// Saved values (JSON)
        #[arg(short, long)]
        data: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check that saved values survive a load/read round trip
    Check {
        /// Form definition (TOML)
        form: String,

        /// Saved values (JSON)
        #[arg(short, long)]
        data: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Units { category } => list_units(category.as_deref()),
        Commands::Convert {
            category,
            quantity,
            to,
        } => convert_quantity(&category, &quantity, to.as_deref()),
        Commands::Show { form, data } => show_form(&form, data.as_deref()),
        Commands::Values { form, data, si } => print_values(&form, data.as_deref(), si),
        Commands::Export { form, data, output } => export_form(&form, &data, output.as_deref()),
        Commands::Check { form, data } => check_round_trip(&form, &data),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_form(form_path: &str, data: Option<&str>) -> Result<Form, Box<dyn std::error::Error>> {
    let mut form = FormConfig::load_from_file(form_path)?.into_form()?;
    if let Some(data_path) = data {
        let values = config::load_values(data_path)?;
        form.load_data(&values)?;
    }
    Ok(form)
}

fn list_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match category {
        None => {
            println!("Categories ({}):", units::categories().len());
            for category in units::categories() {
                println!("  - {} (SI: {})", category, units::si_unit(*category).symbol);
            }
        }
        Some(name) => {
            let category: UnitCategory = name.parse()?;
            println!("Units of {}:", category);
            for (index, unit) in units::entries(category).iter().enumerate() {
                println!(
                    "  {}: {} ({}) x{} {:+}",
                    index, unit.symbol, unit.name, unit.conversion.scale, unit.conversion.offset
                );
            }
        }
    }
    Ok(())
}

fn convert_quantity(
    category: &str,
    quantity: &str,
    to: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category: UnitCategory = category.parse()?;
    let (value, from_index) = units::resolve_quantity(category, quantity)?;

    let to_index = match to {
        Some(symbol) => units::find_unit(category, symbol).ok_or_else(|| {
            units::UnitError::UnknownUnit {
                category,
                symbol: symbol.to_string(),
            }
        })?,
        None => 0,
    };

    let converted = units::convert(category, value, from_index, to_index)?;
    let from = &units::entries(category)[from_index];
    let target = &units::entries(category)[to_index];
    println!("{} {} = {} {}", value, from.symbol, converted, target.symbol);
    Ok(())
}

fn show_form(form_path: &str, data: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let form = load_form(form_path, data)?;
    print!("{}", form.render());
    Ok(())
}

fn print_values(
    form_path: &str,
    data: Option<&str>,
    si: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = load_form(form_path, data)?;
    let values = if si {
        form.get_values_si()
    } else {
        form.get_values()
    };
    println!("{}", config::values_to_json(&values)?);
    Ok(())
}

fn export_form(
    form_path: &str,
    data: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = load_form(form_path, Some(data))?;
    let json = serde_json::to_string_pretty(&form.export_si()?)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Values exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn check_round_trip(form_path: &str, data: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormConfig::load_from_file(form_path)?.into_form()?;
    let saved = config::load_values(data)?;
    let report = form.check_round_trip(&saved)?;

    for (label, saved, read) in &report.changed {
        println!("  {}: saved {} read {}", label, saved, read);
    }

    if report.is_ok() {
        println!("Round trip OK ({} fields)", report.fields);
        Ok(())
    } else {
        Err("round trip changed values".into())
    }
}
