//! Portfolio/resume generator demo page.
//!
//! Renders the resume as a printable preview and serves a PDF download. The
//! download prefers the static `assets/resume.pdf` shipped with the site;
//! when that file is absent the PDF is synthesized from the same resume data
//! the preview renders.

mod data;
mod pdf;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use folio_sdk::folio_core::{Method, RequestContext, RouteConfig, WorkloadManifest};
use folio_sdk::folio_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use folio_sdk::folio_streaming::{HeadContent, Shell, StreamingSink};

use data::resume;
use sections::*;

/// Path of the optional pre-rendered PDF, mounted alongside the component.
const STATIC_PDF_ASSET: &str = "assets/resume.pdf";

/// This page's manifest.
fn manifest() -> WorkloadManifest {
    WorkloadManifest::new("resume-studio", env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/demos/resume", "handle"))
        .with_route(RouteConfig::new("/demos/resume/resume.pdf", "serve_pdf"))
}

/// Main HTTP handler for the resume studio.
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

    if ctx.path.ends_with("/resume.pdf") {
        serve_pdf(response_out, &ctx, &logger).await;
        return;
    }

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(manifest.name.as_str());
    metrics.set_route(&ctx.path);

    let resume = resume();
    let static_asset = std::fs::metadata(STATIC_PDF_ASSET).is_ok();

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
        HeadContent::new("Resume | Demos | Arjun Mehta")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(RESUME_STYLES),
        "Resume Studio",
    );

    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();

    metrics.record_section_start("controls");
    let html = render_controls(static_asset);
    let _ = sink.send_section("controls", &html).await;
    metrics.record_section_sent("controls", Some(html.len()), false);

    metrics.record_section_start("preview");
    let html = render_preview(&resume);
    let _ = sink.send_section("preview", &html).await;
    metrics.record_section_sent("preview", Some(html.len()), false);

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    let final_metrics = metrics.finalize(Some(200));
    logger.info("Resume studio request complete");
    eprintln!("\n{}", final_metrics.to_summary());
}

/// Serve the PDF download: the bundled asset when it ships with the site,
/// a synthesized document otherwise.
async fn serve_pdf(response_out: ResponseOutparam, ctx: &RequestContext, logger: &StructuredLogger) {
    let bytes = match std::fs::read(STATIC_PDF_ASSET) {
        Ok(bytes) => {
            logger.info_builder("Serving bundled resume PDF")
                .field_i64("bytes", bytes.len() as i64)
                .emit();
            bytes
        }
        Err(_) => {
            let bytes = pdf::synthesize_pdf(&resume());
            logger.info_builder("Serving synthesized resume PDF")
                .field_i64("bytes", bytes.len() as i64)
                .emit();
            bytes
        }
    };

    let headers = Fields::from_list(&[
        ("content-type".to_owned(), b"application/pdf".to_vec()),
        (
            "content-disposition".to_owned(),
            b"inline; filename=\"arjun-mehta-resume.pdf\"".to_vec(),
        ),
        ("content-length".to_owned(), bytes.len().to_string().into_bytes()),
    ])
    .unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    if let Err(e) = sink.send_raw(bytes).await {
        logger.error_builder("Failed to send PDF")
            .field("error", e.to_string())
            .emit();
        return;
    }
    sink.complete();
}

/// CSS styles for the resume studio.
const RESUME_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #edeef2; }
.demo-header { background: #23253a; color: white; padding: 1rem 2rem; }
.demo-header a { color: #aab4ff; text-decoration: none; }
.demo-footer { background: #23253a; color: #99a; padding: 1.5rem 2rem; text-align: center; margin-top: 2rem; }
.demo-container { max-width: 800px; margin: 0 auto; padding: 2rem; }

.resume-controls { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.25rem; }
.btn-download { background: #23253a; color: white; text-decoration: none; padding: 0.6rem 1.2rem; border-radius: 6px; }
.pdf-source { color: #778; font-size: 0.85rem; }

.resume-preview { background: white; border-radius: 10px; padding: 2.5rem 3rem; box-shadow: 0 2px 8px rgba(20, 22, 40, 0.08); }
.resume-head h2 { margin: 0; }
.resume-sub { color: #556; margin: 0.25rem 0; }
.resume-contact { color: #778; font-size: 0.9rem; margin: 0; }
.resume-preview h3 { border-bottom: 1px solid #dde; padding-bottom: 0.25rem; margin-top: 1.75rem; }
.skill-row { display: flex; gap: 0.75rem; margin: 0.3rem 0; }
.skill-group { min-width: 7rem; font-weight: 600; }
.role { margin-bottom: 1rem; }
.role-head { margin-bottom: 0.25rem; }
.period { color: #889; font-size: 0.85rem; }
.role ul { margin: 0.25rem 0 0; color: #445; }
.edu-row { margin: 0.3rem 0; }
"#;
