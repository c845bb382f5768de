//! Output formatting for CLI results
//!
//! Pretty and table output go through [`table`], JSON through [`json`].

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Something that knows how to render itself in every [`OutputFormat`]
pub trait Formattable {
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Render `data` in `format` and write it to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    println!("{}", data.format(format)?);
    Ok(())
}
