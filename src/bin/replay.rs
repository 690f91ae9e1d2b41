use anyhow::{bail, Context};
use beerbot::io::replay;
use beerbot::strategy::implementations::OrderUpToPolicy;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 2 {
        bail!("usage: replay <observed.csv> <decisions.csv>");
    }
    let input = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);

    let policy = OrderUpToPolicy::default();
    let rows = replay::replay_csv(&policy, &input, &output)
        .with_context(|| format!("replay of {} failed", input.display()))?;

    println!("Replayed {} rows into {}", rows, output.display());
    Ok(())
}
