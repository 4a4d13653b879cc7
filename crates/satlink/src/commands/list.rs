//! `satlink list`.

use tabled::Tabled;

use satlink_core::{ResourceState, Satellite, Session};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SatelliteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&Satellite> for SatelliteRow {
    fn from(s: &Satellite) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            active: if s.active { "yes" } else { "no" },
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    format: OutputFormat,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let controller = session.list_controller();

    let spinner = util::spinner("Loading satellites", global.quiet);
    let outcome = controller.load().await;
    spinner.finish_and_clear();

    let list = match outcome {
        Some(ResourceState::Success(list)) => list,
        Some(ResourceState::Error(cause)) => {
            return Err(CliError::ListUnavailable {
                message: cause.to_string(),
            });
        }
        Some(ResourceState::Loading) | None => {
            return Err(CliError::Internal("list load ended without a result".into()));
        }
    };

    let out = output::render_list(
        format,
        list.as_slice(),
        |s| SatelliteRow::from(s),
        |s| s.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
