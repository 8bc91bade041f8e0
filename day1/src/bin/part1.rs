use day1::scan_stream;

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    let stdin = io::stdin();

    scan_stream(stdin.lock(), io::stdout().lock(), 1)?;

    Ok(())
}
