// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use anyhow::{bail, Context, Result};
use log::debug;
use physical_units::{IdentifierKind, PhysicalQuantity, Registry};
use structopt::StructOpt;

/// Inspect the built-in unit catalog and convert values between units
#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// List physical quantities and their units
    List {
        /// Only list this physical quantity
        #[structopt(short, long)]
        quantity: Option<String>,
    },

    /// Describe one unit, given by name or symbol
    Show { unit: String },

    /// Convert a value from one unit to another
    Convert {
        /// Source unit name or symbol
        from: String,

        /// Value to convert, in the source unit
        #[structopt(allow_hyphen_values = true)]
        value: f64,

        /// Target unit name or symbol
        to: String,
    },

    /// Report conversions missing between units of the same quantity
    Audit {
        /// Only audit this physical quantity
        quantity: Option<String>,
    },

    /// Print the catalog as JSON
    Export,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let registry = physical_units::initialize().context("building the unit catalog")?;
    match opt.command {
        Command::List { quantity } => list(registry, quantity.as_deref()),
        Command::Show { unit } => show(registry, &unit),
        Command::Convert { from, value, to } => convert(registry, &from, value, &to),
        Command::Audit { quantity } => audit(registry, quantity.as_deref()),
        Command::Export => {
            println!("{}", registry.as_json().pretty(2));
            Ok(())
        }
    }
}

fn select<'r>(registry: &'r Registry, name: Option<&str>) -> Result<Vec<&'r PhysicalQuantity>> {
    Ok(match name {
        Some(name) => match registry.search_quantity(name) {
            Some(quantity) => vec![quantity],
            None => bail!("unknown physical quantity: {}", name),
        },
        None => registry.quantities().iter().collect(),
    })
}

fn list(registry: &Registry, quantity: Option<&str>) -> Result<()> {
    for quantity in select(registry, quantity)? {
        println!("{} ({}): {}", quantity.name(), quantity.symbol(), quantity.description());
        for unit in registry.family(quantity) {
            println!("    {:<28}{:<8}[{}, {}]", unit.name(), unit.symbol(), unit.min(), unit.max());
        }
    }
    Ok(())
}

fn show(registry: &Registry, identifier: &str) -> Result<()> {
    let unit = match registry.lookup_unit(identifier) {
        Some(unit) => unit,
        None => bail!("unknown unit: {}", identifier),
    };
    println!("{}", unit.describe(registry.quantity_of(unit).name(), 0));
    Ok(())
}

fn identifier_kind(registry: &Registry, identifier: &str) -> Result<IdentifierKind> {
    if registry.unit_by_name(identifier).is_some() {
        Ok(IdentifierKind::Name)
    } else if registry.unit_by_symbol(identifier).is_some() {
        Ok(IdentifierKind::Symbol)
    } else {
        bail!("unknown unit: {}", identifier)
    }
}

fn convert(registry: &Registry, from: &str, value: f64, to: &str) -> Result<()> {
    let from_kind = identifier_kind(registry, from)?;
    let to_kind = identifier_kind(registry, to)?;
    debug!("convert {:?} {} -> {:?} {}", from_kind, from, to_kind, to);
    let f = registry.lookup_conversion(from_kind, from, to_kind, to)?;
    println!("{}", f(value));
    Ok(())
}

fn audit(registry: &Registry, quantity: Option<&str>) -> Result<()> {
    let mut incomplete = 0;
    for quantity in select(registry, quantity)? {
        let report = registry.audit_missing_conversions(quantity);
        if report.complete {
            println!("{}: complete", quantity.name());
        } else {
            incomplete += 1;
            println!("{}: incomplete", quantity.name());
            for missing in &report.missing {
                println!("    {}", missing);
            }
        }
    }
    if incomplete > 0 {
        bail!("{} physical quantities are missing conversions", incomplete);
    }
    Ok(())
}
