//! Command handlers.

pub mod config_cmd;
pub mod detail;
pub mod list;
mod util;

use std::sync::Arc;

use satlink_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::config::Resolved;
use crate::error::CliError;

/// Run a command that needs a satellite source.
pub async fn dispatch(cmd: Command, resolved: Resolved, global: &GlobalOpts) -> Result<(), CliError> {
    let Resolved {
        core,
        strings,
        output,
        color,
    } = resolved;

    let session = Session::open(core)?.with_strings(Arc::new(strings));
    let result = match cmd {
        Command::List => list::handle(&session, output, global).await,
        Command::Detail(args) => detail::handle(&session, args, output, color, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are handled before dispatch".into(),
        )),
    };
    session.close();
    result
}
