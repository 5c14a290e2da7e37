use clap::Parser;
use lenscalc::{console::Args, error::LcResult};

fn main() -> LcResult<()> {
    env_logger::init();
    //parse CLI arguments
    let args = Args::parse();

    let result = args.command.execute()?;
    println!("{result}");
    Ok(())
}
