use clap::Parser;

use crate::driver::DEFAULT_EXPERIMENT;

/// ttlbench: time bulk inserts and TTL-driven cleanup against MongoDB
#[derive(Parser, Debug)]
#[command(name = "ttlbench", version, about)]
pub struct Cli {
    /// Which experiment to run: 1 deletes every document after the insert,
    /// 2 marks every document expired. Anything else only checks the index.
    #[arg(short, long, alias = "Exp", default_value_t = DEFAULT_EXPERIMENT, allow_negative_numbers = true)]
    pub exp: i64,
}
