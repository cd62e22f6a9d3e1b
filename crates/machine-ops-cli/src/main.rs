use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use machine_ops::{
    IrOpcode, MachineOperatorBuilder, MachineRepresentation, Operator, Properties,
    WriteBarrierKind, Zone,
};

#[derive(Parser)]
#[command(name = "machine-ops")]
#[command(about = "Inspect the machine-level operator catalog")]
struct Cli {
    #[arg(
        short,
        long,
        value_enum,
        global = true,
        default_value = "native",
        help = "Native word width of the target"
    )]
    word: WordArg,

    #[arg(long, global = true, help = "Emit JSON instead of text")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum WordArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    Native,
}

impl WordArg {
    fn representation(self) -> MachineRepresentation {
        match self {
            WordArg::W32 => MachineRepresentation::Word32,
            WordArg::W64 => MachineRepresentation::Word64,
            WordArg::Native => MachineRepresentation::pointer_rep(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every parameterless operator with its flags and arity
    List,
    /// Show a single operator; `Word*` names resolve against --word
    Show {
        #[arg(help = "Operator name, e.g. Int32Add or WordShl")]
        name: String,
    },
    /// Show the load and store operators for a representation
    Memory {
        #[arg(help = "Representation: word8, word16, word32, word64, float64, tagged")]
        rep: String,

        #[arg(short, long, default_value = "none", help = "Write barrier: none or full")]
        barrier: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let zone = Zone::new();
    let builder = MachineOperatorBuilder::try_new(&zone, cli.word.representation())
        .context("Invalid word width")?;

    match cli.command {
        Commands::List => {
            let ops: Vec<&Operator> = MachineOperatorBuilder::catalog_opcodes()
                .map(|opcode| builder.simple(opcode))
                .collect::<machine_ops::Result<_>>()?;
            if cli.json {
                let entries: Vec<_> = ops.iter().copied().map(describe_json).collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for op in ops {
                    println!("{}", describe(op));
                }
            }
        }
        Commands::Show { name } => {
            let opcode = match builder.resolve_word_opcode(&name) {
                Some(opcode) => opcode,
                None => name
                    .parse::<IrOpcode>()
                    .with_context(|| format!("No operator named '{name}'"))?,
            };
            tracing::debug!(%name, %opcode, "resolved operator name");
            let op = builder.simple(opcode)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&describe_json(op))?);
            } else {
                println!("{}", describe(op));
            }
        }
        Commands::Memory { rep, barrier } => {
            let rep: MachineRepresentation = rep.parse()?;
            let barrier: WriteBarrierKind = barrier.parse()?;
            let load = builder.load(rep);
            let store = builder.store(rep, barrier);
            if cli.json {
                let mut load_json = describe_json(load);
                load_json["parameter"] = json!(rep.to_string());
                let mut store_json = describe_json(store);
                store_json["parameter"] = json!({
                    "rep": rep.to_string(),
                    "write_barrier": barrier.to_string(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!([load_json, store_json]))?
                );
            } else {
                println!("{:<28} {}", load.to_string(), describe_arity(load));
                println!("{:<28} {}", store.to_string(), describe_arity(store));
            }
        }
    }

    Ok(())
}

fn flag_names(properties: Properties) -> Vec<&'static str> {
    let mut names = Vec::new();
    if properties.is_pure() {
        names.push("pure");
    } else {
        if properties.contains(Properties::NO_READ) {
            names.push("no_read");
        }
        if properties.contains(Properties::NO_WRITE) {
            names.push("no_write");
        }
        if properties.contains(Properties::NO_THROW) {
            names.push("no_throw");
        }
    }
    if properties.contains(Properties::COMMUTATIVE) {
        names.push("commutative");
    }
    if properties.contains(Properties::ASSOCIATIVE) {
        names.push("associative");
    }
    names
}

fn describe_arity(op: &Operator) -> String {
    format!(
        "{} -> {}  {}",
        op.input_count(),
        op.output_count(),
        flag_names(op.properties()).join(",")
    )
}

fn describe(op: &Operator) -> String {
    format!("{:<28} {}", op.mnemonic(), describe_arity(op))
}

fn describe_json(op: &Operator) -> serde_json::Value {
    json!({
        "name": op.mnemonic(),
        "opcode": op.opcode() as u8,
        "inputs": op.input_count(),
        "outputs": op.output_count(),
        "flags": flag_names(op.properties()),
    })
}
