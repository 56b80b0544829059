use clap::{Parser, Subcommand};
use satq_cli::commands::{self, cases, eval};
use satq_cli::telemetry::init_telemetry;
use satq_kernel::config::DEFAULT_BIT_WIDTH;

#[derive(Parser)]
#[command(name = "satq")]
#[command(about = "Saturating fixed-point formula evaluator", long_about = None)]
struct Cli {
    /// Signed bit width N of the result range [-2^(N-1), 2^(N-1) - 1]
    #[arg(long, short = 'n', global = true, env = "SATQ_BIT_WIDTH", default_value_t = DEFAULT_BIT_WIDTH)]
    bit_width: u32,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate q = sat(((a - b)(1 + 3c) - 4d) >> 1) for one input set
    Eval {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        #[arg(allow_negative_numbers = true)]
        c: i64,
        #[arg(allow_negative_numbers = true)]
        d: i64,

        /// Show every intermediate term
        #[arg(long, short)]
        trace: bool,
    },
    /// Evaluate the built-in reference cases
    Cases,
}

fn main() -> anyhow::Result<()> {
    init_telemetry();

    let cli = Cli::parse();
    let config = commands::resolve_config(cli.bit_width)?;

    match cli.command {
        Commands::Eval { a, b, c, d, trace } => {
            eval::run(config, eval::Inputs { a, b, c, d }, trace, cli.json)
        }
        Commands::Cases => cases::run(config, cli.json),
    }
}
