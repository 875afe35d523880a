use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    stocktally_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    stocktally_cli::run(stdin.lock(), stdout.lock())
}
