//! Task board demo page.
//!
//! A three-column board seeded fresh on every request. The URL carries at
//! most one mutation (`add`, `advance`, `move`, `remove`), which is applied
//! to the seed before rendering - a deliberately disposable UI exercise
//! with no storage behind it.

mod data;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use folio_sdk::folio_core::{Method, RequestContext, RouteConfig, WorkloadManifest};
use folio_sdk::folio_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use folio_sdk::folio_streaming::{HeadContent, Shell, StreamingSink};

use data::*;
use sections::*;

/// This page's manifest.
fn manifest() -> WorkloadManifest {
    WorkloadManifest::new("task-board", env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/demos/tasks", "handle"))
}

/// Main HTTP handler for the task board.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(Method::Get, path);
    let request_id = ctx.request_id.clone();
    let manifest = manifest();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(manifest.name.as_str())
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(manifest.name.as_str());
    metrics.set_route(&ctx.path);

    let mut board = seed_board();
    apply_mutation(&mut board, &ctx, &logger);

    let headers = Fields::from_list(&[
        ("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ])
    .unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = Shell::demo_page(
        HeadContent::new("Tasks | Demos | Arjun Mehta")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(BOARD_STYLES),
        "Task Board",
    );

    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();

    metrics.record_section_start("summary");
    let html = render_summary(&board);
    let _ = sink.send_section("summary", &html).await;
    metrics.record_section_sent("summary", Some(html.len()), false);

    metrics.record_section_start("columns");
    let html = render_columns(&board);
    let _ = sink.send_section("columns", &html).await;
    metrics.record_section_sent("columns", Some(html.len()), false);

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    let final_metrics = metrics.finalize(Some(200));
    logger.info("Task board request complete");
    eprintln!("\n{}", final_metrics.to_summary());
}

/// Apply the single mutation the query may carry.
fn apply_mutation(board: &mut Board, ctx: &RequestContext, logger: &StructuredLogger) {
    if let Some(title) = ctx.query_param("add").filter(|t| !t.trim().is_empty()) {
        let priority = ctx
            .query_param("priority")
            .and_then(Priority::from_str)
            .unwrap_or_default();
        let id = board.add(title.trim(), "", priority);
        logger.info_builder("Task added")
            .field_i64("id", id as i64)
            .emit();
        return;
    }

    if let Some(id) = ctx.query_param("advance").and_then(|v| v.parse().ok()) {
        if !board.advance(id) {
            logger.warn("Advance targeted an unknown or finished task");
        }
        return;
    }

    if let (Some(id), Some(status)) = (
        ctx.query_param("move").and_then(|v| v.parse().ok()),
        ctx.query_param("to").and_then(TaskStatus::from_str),
    ) {
        board.move_to(id, status);
        return;
    }

    if let Some(id) = ctx.query_param("remove").and_then(|v| v.parse().ok()) {
        if !board.remove(id) {
            logger.warn("Remove targeted an unknown task");
        }
    }
}

/// CSS styles for the task board.
const BOARD_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f4f2ee; }
.demo-header { background: #2b2118; color: white; padding: 1rem 2rem; }
.demo-header a { color: #ffd9a0; text-decoration: none; }
.demo-footer { background: #2b2118; color: #b8a; padding: 1.5rem 2rem; text-align: center; margin-top: 2rem; }
.demo-container { max-width: 1100px; margin: 0 auto; padding: 2rem; }

.count-row { display: flex; gap: 1rem; margin-bottom: 1rem; }
.count-tile { background: white; border-radius: 8px; padding: 0.75rem 1.25rem; display: flex; flex-direction: column; align-items: center; }
.count-num { font-size: 1.5rem; font-weight: 700; }
.count-label { color: #776; font-size: 0.8rem; }
.add-form { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.add-form input { flex: 1; padding: 0.55rem 0.9rem; border: 1px solid #ddd6c8; border-radius: 6px; }
.add-form select, .add-form button { padding: 0.55rem 0.9rem; border-radius: 6px; border: 1px solid #ddd6c8; background: white; }
.add-form button { background: #2b2118; color: white; border: none; cursor: pointer; }

.board-columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.board-column { background: #eae6dd; border-radius: 8px; padding: 1rem; }
.column-count { color: #887; font-weight: 400; font-size: 0.9rem; }
.column-empty { color: #998; font-size: 0.9rem; }
.task-card { background: white; border-radius: 6px; padding: 0.9rem 1rem; margin-bottom: 0.75rem; border-left: 3px solid #c9c2b2; }
.task-card.priority-high { border-left-color: #c0392b; }
.task-card.priority-medium { border-left-color: #d4a017; }
.task-card h4 { margin: 0 0 0.25rem; }
.task-card p { margin: 0 0 0.5rem; color: #665; font-size: 0.85rem; }
.card-footer { display: flex; align-items: center; gap: 0.75rem; font-size: 0.8rem; }
.priority-tag { text-transform: uppercase; color: #887; letter-spacing: 0.05em; }
.card-action { color: #2b6cb0; text-decoration: none; }
.card-remove { color: #c0392b; margin-left: auto; }
"#;
