mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use pc_chem::ghv_breakdown;
use pc_core::{ConstantContext, Phase, PropertyId};
use pc_correlations::{BoilingPointForm, CorrelationRegistry, RegistryOptions};
use pc_solver::{Characterization, NewtonConfig, Outcome, PropertyStore, Resolver};
use serde::Serialize;
use tracing::Level;

use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "pc-cli")]
#[command(about = "Petroleum pseudo-component characterization", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the missing properties of one pseudo-component
    Characterize {
        /// Phase: gas or liquid
        #[arg(long)]
        phase: String,
        #[command(flatten)]
        properties: PropertyArgs,
        #[command(flatten)]
        relations: RelationArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        constants: ConstantArgs,
    },
    /// Split a measured mixture GHV between pure compounds and the petroleum fraction
    Breakdown {
        /// Composition file, an ordered `name: amount` YAML mapping
        composition: PathBuf,
        /// Measured gross heating value of the mixture [Btu/scf]
        #[arg(long)]
        ghv: f64,
        /// Also characterize the fraction as a gas from its back-calculated GHV
        #[arg(long)]
        characterize: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        constants: ConstantArgs,
    },
    /// Print the physical constants in effect
    Constants {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        constants: ConstantArgs,
    },
}

/// Known property values.
#[derive(Args)]
struct PropertyArgs {
    /// Molecular weight [g/mol]
    #[arg(long)]
    mw: Option<f64>,
    /// Gas specific gravity (air = 1)
    #[arg(long)]
    sg_gas: Option<f64>,
    /// Liquid specific gravity at 60 °F (water = 1)
    #[arg(long)]
    sg_liq: Option<f64>,
    /// Volume-average boiling point
    #[arg(long)]
    vabp: Option<f64>,
    /// API gravity (liquid only)
    #[arg(long)]
    api: Option<f64>,
    /// Gross heating value
    #[arg(long)]
    ghv: Option<f64>,
    /// Net heating value
    #[arg(long)]
    nhv: Option<f64>,
    /// Critical pressure
    #[arg(long)]
    pc: Option<f64>,
    /// Critical temperature
    #[arg(long)]
    tc: Option<f64>,
    /// Acentric factor
    #[arg(long)]
    omega: Option<f64>,
    /// Normal boiling point
    #[arg(long)]
    tb: Option<f64>,
}

impl PropertyArgs {
    fn named(&self) -> [(&'static str, Option<f64>); 11] {
        [
            (PropertyId::Mw.key(), self.mw),
            (PropertyId::SgGas.key(), self.sg_gas),
            (PropertyId::SgLiq.key(), self.sg_liq),
            (PropertyId::Vabp.key(), self.vabp),
            (PropertyId::Api.key(), self.api),
            (PropertyId::Ghv.key(), self.ghv),
            (PropertyId::Nhv.key(), self.nhv),
            (PropertyId::Pc.key(), self.pc),
            (PropertyId::Tc.key(), self.tc),
            (PropertyId::Omega.key(), self.omega),
            (PropertyId::Tb.key(), self.tb),
        ]
    }
}

/// Relation-set selection.
#[derive(Args)]
struct RelationArgs {
    /// Enable the heating-value correlations
    #[arg(long)]
    heating_value: bool,
    /// Use the exponential Tb-mw boiling-point form
    #[arg(long)]
    riazi_tb: bool,
    /// Newton iteration cap per relation
    #[arg(long, default_value_t = NewtonConfig::default().max_iterations)]
    max_iterations: usize,
}

impl RelationArgs {
    fn registry(&self) -> CorrelationRegistry {
        CorrelationRegistry::standard(RegistryOptions {
            heating_value: self.heating_value,
            boiling_point: if self.riazi_tb {
                BoilingPointForm::Riazi
            } else {
                BoilingPointForm::Linear
            },
        })
    }

    fn newton_config(&self) -> NewtonConfig {
        NewtonConfig {
            max_iterations: self.max_iterations,
            ..Default::default()
        }
    }
}

#[derive(Args)]
struct ConstantArgs {
    /// YAML or JSON file of constant overrides
    #[arg(long = "constants", value_name = "FILE")]
    file: Option<PathBuf>,
    /// Override one constant, e.g. --set MW_AIR=28.96 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    sets: Vec<String>,
}

impl ConstantArgs {
    fn context(&self) -> CliResult<ConstantContext> {
        config::build_context(self.file.as_deref(), &self.sets)
    }
}

#[derive(Serialize)]
struct AssignmentOut {
    property: &'static str,
    relation: &'static str,
    value: f64,
    iterations: usize,
    primed: bool,
}

#[derive(Serialize)]
struct CharacterizationOut<'a> {
    properties: &'a pc_solver::FinalizedStore,
    outcome: String,
    complete: bool,
    passes: usize,
    assignments: Vec<AssignmentOut>,
}

impl<'a> From<&'a Characterization> for CharacterizationOut<'a> {
    fn from(c: &'a Characterization) -> Self {
        Self {
            properties: &c.properties,
            outcome: c.report.outcome.to_string(),
            complete: c.report.is_complete(),
            passes: c.report.passes,
            assignments: c
                .report
                .assignments
                .iter()
                .map(|a| AssignmentOut {
                    property: a.property.key(),
                    relation: a.relation.key(),
                    value: a.value,
                    iterations: a.iterations,
                    primed: a.primed,
                })
                .collect(),
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Characterize {
            phase,
            properties,
            relations,
            json,
            constants,
        } => cmd_characterize(&phase, &properties, &relations, json, &constants),
        Commands::Breakdown {
            composition,
            ghv,
            characterize,
            json,
            constants,
        } => cmd_breakdown(&composition, ghv, characterize, json, &constants),
        Commands::Constants { json, constants } => cmd_constants(json, &constants),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_characterize(
    phase: &str,
    properties: &PropertyArgs,
    relations: &RelationArgs,
    json: bool,
    constants: &ConstantArgs,
) -> CliResult<()> {
    let ctx = constants.context()?;
    let registry = relations.registry();
    let store = PropertyStore::from_named(phase, properties.named())?;
    let result = Resolver::new(&registry, &ctx)
        .with_config(relations.newton_config())
        .characterize(store);
    print_characterization(&result, json)
}

fn print_characterization(result: &Characterization, json: bool) -> CliResult<()> {
    if json {
        let out = CharacterizationOut::from(result);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", result.properties);
    println!("Resolution: {}", result.report.outcome);
    for a in &result.report.assignments {
        println!(
            "  {:<7} = {:<20} via {}{}",
            a.property.key(),
            a.value,
            a.relation,
            if a.primed { " (priming)" } else { "" }
        );
    }
    if let Outcome::SolverFailed { property, .. } = &result.report.outcome {
        println!("Error in calculating {property}; later properties were left unresolved");
    }
    Ok(())
}

fn cmd_breakdown(
    path: &Path,
    ghv_total: f64,
    characterize: bool,
    json: bool,
    constants: &ConstantArgs,
) -> CliResult<()> {
    let ctx = constants.context()?;
    let composition = config::load_composition(path)?;
    let breakdown = ghv_breakdown(&composition, ghv_total, &ctx)?;

    let fraction = if characterize {
        let registry = CorrelationRegistry::standard(RegistryOptions {
            heating_value: true,
            ..Default::default()
        });
        let store = PropertyStore::new(Phase::Gas, [(PropertyId::Ghv, breakdown.fraction_ghv())])?;
        Some(Resolver::new(&registry, &ctx).characterize(store))
    } else {
        None
    };

    if json {
        #[derive(Serialize)]
        struct BreakdownOut<'a> {
            breakdown: &'a pc_chem::GhvBreakdown,
            #[serde(skip_serializing_if = "Option::is_none")]
            fraction: Option<CharacterizationOut<'a>>,
        }
        let out = BreakdownOut {
            breakdown: &breakdown,
            fraction: fraction.as_ref().map(CharacterizationOut::from),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{breakdown}");
    println!();
    println!("Fraction GHV: {:.1} Btu/scf", breakdown.fraction_ghv());
    if let Some(result) = &fraction {
        println!();
        println!("Fraction characterized as gas:");
        print_characterization(result, false)?;
    }
    Ok(())
}

fn cmd_constants(json: bool, constants: &ConstantArgs) -> CliResult<()> {
    let ctx = constants.context()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
        return Ok(());
    }
    for (name, value) in ctx.entries() {
        println!("{name:<12} = {value}");
    }
    println!(
        "{:<12} = {} m^3/mol (ideal gas at standard conditions)",
        "V_MOLAR",
        ctx.ideal_gas_molar_volume()
    );
    Ok(())
}
