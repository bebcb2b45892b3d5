//! SQL DOUBLE command-line interface

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use cli::output::{self, ColorMode, OutputFormat};
use cli::{cast, eval, hash, list};
use sqldouble_eval::OperatorRegistry;
use std::process::ExitCode;

/// SQL DOUBLE operator tool
#[derive(Parser)]
#[command(name = "dbl")]
#[command(
    author,
    version,
    about = "Evaluate SQL DOUBLE operators, casts and hashes",
    long_about = None
)]
struct Cli {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    format: OutputFormat,

    /// Color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an operator, e.g. `dbl eval add 37.7 17.1`
    Eval {
        /// Operator name (add, between, is_distinct_from, hash_code, ...)
        operator: String,

        /// Arguments; `null` is the SQL null
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,

        /// Operand type
        #[arg(short = 't', long = "type", default_value = "double")]
        operand_type: String,

        /// Use the nullable calling convention
        #[arg(short, long)]
        nullable: bool,
    },

    /// Cast a value, e.g. `dbl cast 1200 --to 'varchar(5)'`
    Cast {
        /// Value to cast
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Target type
        #[arg(long)]
        to: String,

        /// Source type
        #[arg(long, default_value = "double")]
        from: String,

        /// Saturated floor cast instead of a rounding cast
        #[arg(short, long)]
        saturated: bool,

        /// Use the nullable calling convention
        #[arg(short, long)]
        nullable: bool,
    },

    /// Show canonical bits and both hashes of a double
    Hash {
        /// Value to hash
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List every registered operator
    List,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);
    output::setup_logging(cli.verbose);

    let registry = OperatorRegistry::with_double_operators();

    let result = match cli.command {
        Commands::Eval {
            operator,
            args,
            operand_type,
            nullable,
        } => eval::eval(
            &registry,
            eval::EvalConfig {
                operator,
                args,
                operand_type,
                nullable,
            },
        ),

        Commands::Cast {
            value,
            to,
            from,
            saturated,
            nullable,
        } => cast::cast(
            &registry,
            cast::CastConfig {
                value,
                to,
                from,
                saturated,
                nullable,
            },
        ),

        Commands::Hash { value } => hash::hash(&registry, &value),

        Commands::List => Ok(list::list(&registry)),
    };

    match result.and_then(|report| report.render(cli.format)) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&e, cli.format));
            ExitCode::FAILURE
        }
    }
}
