use anyhow::Result;
use clap::Parser;

use aldose::fischer;
use aldose::isomers::distinct_isomers;

#[derive(Parser)]
#[command(name = "isomers")]
#[command(about = "Enumerate the distinct optical isomers of a linear stereocenter chain", long_about = None)]
struct Cli {
    /// Number of asymmetric centers along the backbone
    #[arg(value_name = "CENTERS", default_value_t = 4)]
    centers: usize,

    /// Also print a Fischer projection of each isomer
    #[arg(long, env = "ALDOSE_FORMULAS")]
    formulas: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    for isomer in distinct_isomers(cli.centers)? {
        println!("{}", isomer);
        if cli.formulas {
            println!("{}", fischer::projection(&isomer.configuration));
        }
    }

    Ok(())
}
