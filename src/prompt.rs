//! Interactive metadata prompts

use inquire::Text;

use crate::error::Result;
use crate::metadata::{Field, UNKNOWN};

/// Ask the user for one metadata field
///
/// An empty answer yields `None`, which later resolves to `UNKNOWN`.
pub fn ask(field: Field) -> Result<Option<String>> {
    let answer = Text::new(&format!("{}:", field.label()))
        .with_placeholder(UNKNOWN)
        .with_help_message("Press Enter to leave it as UNKNOWN")
        .prompt()?;
    Ok(Some(answer))
}
