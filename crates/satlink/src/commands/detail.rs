//! `satlink detail <id>`: one satellite, then its live position.

use futures_util::StreamExt;
use serde::Serialize;

use satlink_core::{Detail, DetailViewModel, PositionDisplay, ResourceState, Session};

use crate::cli::{ColorMode, DetailArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Serializable views ──────────────────────────────────────────────

#[derive(Serialize)]
struct DetailReport<'a> {
    #[serde(flatten)]
    detail: &'a Detail,
    display: DisplayFields,
}

#[derive(Serialize)]
struct DisplayFields {
    name: String,
    height_mass: String,
    first_flight: String,
    cost: String,
}

impl<'a> DetailReport<'a> {
    fn new(detail: &'a Detail, vm: &DetailViewModel) -> Self {
        Self {
            detail,
            display: DisplayFields {
                name: vm.name.clone(),
                height_mass: vm.height_mass.plain_text(),
                first_flight: vm.first_flight.clone(),
                cost: vm.cost.plain_text(),
            },
        }
    }
}

#[derive(Serialize)]
struct PositionReport {
    id: String,
    pos_x: f64,
    pos_y: f64,
    text: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: DetailArgs,
    format: OutputFormat,
    color: ColorMode,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(color);
    let controller = session.detail_controller();
    let mut state = controller.state();
    let mut view_model = controller.view_model();
    let mut positions = controller.position().into_stream();

    let spinner = util::spinner(format!("Loading satellite {}", args.id), global.quiet);
    controller.start(args.id.clone());
    let outcome = state.wait_for(ResourceState::is_terminal).await;
    spinner.finish_and_clear();

    let detail = match outcome {
        Some(ResourceState::Success(detail)) => detail,
        Some(ResourceState::Error(cause)) => {
            return Err(CliError::DetailUnavailable {
                id: args.id,
                message: cause.to_string(),
            });
        }
        Some(ResourceState::Loading) | None => {
            return Err(CliError::Internal("detail load ended without a result".into()));
        }
    };

    let vm = view_model
        .wait_for(|_| true)
        .await
        .ok_or_else(|| CliError::Internal("view model was not published".into()))?;

    let report = DetailReport::new(&detail, &vm);
    let out = output::render_single(
        format,
        &report,
        |_| render_detail(&vm, color),
        |r| r.display.name.clone(),
    )?;
    output::print_output(&out, global.quiet);

    if args.updates == Some(0) {
        controller.shutdown().await;
        return Ok(());
    }

    let mut shown = 0_usize;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("interrupted");
                break;
            }
            next = positions.next() => {
                let Some(display) = next else { break };
                let line = render_position(&args.id, &display, format, color)?;
                output::print_output(&line, global.quiet);

                shown += 1;
                if args.updates.is_some_and(|limit| shown >= limit) {
                    break;
                }
            }
        }
    }

    controller.shutdown().await;
    Ok(())
}

// ── Renderers ───────────────────────────────────────────────────────

fn render_detail(vm: &DetailViewModel, color: bool) -> String {
    use owo_colors::OwoColorize;

    let name = if color {
        vm.name.bold().to_string()
    } else {
        vm.name.clone()
    };
    [
        name,
        output::render_styled(&vm.height_mass, color),
        vm.first_flight.clone(),
        output::render_styled(&vm.cost, color),
    ]
    .join("\n")
}

/// Positions stream as one record per update: a styled line for text
/// formats, compact JSON lines (NDJSON) or YAML documents otherwise.
fn render_position(
    id: &str,
    display: &PositionDisplay,
    format: OutputFormat,
    color: bool,
) -> Result<String, CliError> {
    let report = || PositionReport {
        id: id.to_owned(),
        pos_x: display.position.pos_x,
        pos_y: display.position.pos_y,
        text: display.text.plain_text(),
    };

    match format {
        OutputFormat::Table => Ok(output::render_styled(&display.text, color)),
        OutputFormat::Plain => Ok(display.text.value_text()),
        OutputFormat::Json | OutputFormat::JsonCompact => output::render_json(&report(), true),
        OutputFormat::Yaml => Ok(format!("---\n{}", output::render_yaml(&report())?)),
    }
}
