pub mod handle;
pub mod init;
pub mod sign;

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Read a file, or all of stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
