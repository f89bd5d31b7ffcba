use std::io;

use npchk::client::FnsClient;
use npchk::core::{NpchkError, Session};

fn main() -> Result<(), NpchkError> {
    let client = FnsClient::new()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run(&client)?;
    Ok(())
}
