//! Replies command implementation
//!
//! Lists the canned replies the assistant samples from, in table or
//! JSON format.

use prettytable::{format, row, Table};
use tracing::debug;

use crate::error::{MentoraError, Result};
use crate::responder::CANNED_REPLIES;

/// Lists the canned reply set
///
/// Displays every reply the canned responder can produce, either as a
/// formatted table or as JSON for scripting.
///
/// # Arguments
///
/// * `json` - Whether to output in JSON format instead of a table
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use mentora::commands::replies::list_replies;
///
/// list_replies(false).unwrap();
/// ```
pub fn list_replies(json: bool) -> Result<()> {
    debug!("Listing {} canned replies", CANNED_REPLIES.len());

    if json {
        output_replies_json()
    } else {
        output_replies_table();
        Ok(())
    }
}

/// Outputs the canned replies in JSON format
fn output_replies_json() -> Result<()> {
    let serialized =
        serde_json::to_string_pretty(&CANNED_REPLIES).map_err(MentoraError::Serialization)?;
    println!("{}", serialized);
    Ok(())
}

/// Outputs the canned replies in table format
fn output_replies_table() {
    println!("\nCanned replies ({} total):\n", CANNED_REPLIES.len());

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(row!["#", "Reply"]);

    for (index, reply) in CANNED_REPLIES.iter().enumerate() {
        table.add_row(row![index + 1, reply]);
    }

    table.printstd();
}
