//! Weather lookup demo page.
//!
//! Looks up current conditions and a five-day forecast from a public
//! provider when an API key is configured. Without a key, or whenever a
//! fetch fails, the bundled city table answers instead so the page never
//! renders empty.

mod data;
mod sections;

use futures::future::join;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use folio_sdk::folio_core::{Method, RequestContext, RouteConfig, WeatherConfig, WorkloadManifest};
use folio_sdk::folio_data::{DependencyTag, FetchClient};
use folio_sdk::folio_executor::{FallbackResult, FallbackStrategy, SectionScheduler};
use folio_sdk::folio_observability::{
    DependencyMetrics, LogFormat, LogLevel, MetricsCollector, StructuredLogger,
};
use folio_sdk::folio_streaming::{HeadContent, Section, Shell, StreamingSink};

use data::*;
use sections::*;

/// This page's manifest.
fn manifest() -> WorkloadManifest {
    WorkloadManifest::new("weather-lookup", env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/demos/weather", "handle"))
}

/// Main HTTP handler for the weather demo.
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

    let city = ctx
        .query_param("q")
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(DEFAULT_CITY)
        .to_string();

    // The key is injected via Spin variables; it is configuration, not
    // something the page digs out of browser storage.
    let weather_config = match spin_sdk::variables::get("weather_api_key") {
        Ok(key) if !key.is_empty() => WeatherConfig::with_key(key),
        _ => WeatherConfig::default(),
    };

    logger.info_builder("Weather lookup")
        .field("city", city.clone())
        .field_bool("live", weather_config.has_key())
        .emit();

    // Fallback HTML is computed up front from the city table, so a failed
    // fetch only has to swap it in.
    let table_current_html = table_conditions(&city)
        .map(|c| render_current(&c, true))
        .unwrap_or_else(|| render_current_unknown(&city));
    let table_forecast_html = table_forecast(&city)
        .map(|f| render_forecast(&f))
        .unwrap_or_else(render_forecast_unavailable);

    let mut scheduler = SectionScheduler::new();
    scheduler.add_section(Section::new("search"));
    scheduler.add_section(
        Section::new("current")
            .depends_on("weather")
            .with_fallback(table_current_html.clone()),
    );
    scheduler.add_section(
        Section::new("forecast")
            .depends_on("forecast")
            .with_fallback(table_forecast_html.clone()),
    );

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
        HeadContent::new("Weather | Demos | Arjun Mehta")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(WEATHER_STYLES),
        "Weather",
    );

    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();

    // The search form has no dependencies and streams first.
    scheduler.start_section("search");
    metrics.record_section_start("search");
    let html = render_search(&city);
    let _ = sink.send_section("search", &html).await;
    metrics.record_section_sent("search", Some(html.len()), false);
    scheduler.complete_section("search");

    // Live data path: one attempt per endpoint, in parallel. Errors are
    // logged and swapped for the precomputed table fallbacks.
    let (current_html, current_fallback, forecast_html, forecast_fallback) =
        if weather_config.has_key() {
            let client = FetchClient::new(request_id.clone());
            let key = weather_config.api_key.as_deref().unwrap_or_default();
            let current_url = format!(
                "{}/weather?q={}&units=metric&appid={}",
                weather_config.base_url, city, key
            );
            let forecast_url = format!(
                "{}/forecast?q={}&units=metric&appid={}",
                weather_config.base_url, city, key
            );

            let fetch_started = std::time::Instant::now();
            let (current_res, forecast_res) = join(
                fetch_current(&client, &current_url),
                fetch_forecast(&client, &forecast_url),
            )
            .await;
            let fetch_time = fetch_started.elapsed();

            metrics.record_dependency(match &current_res {
                Ok(_) => DependencyMetrics::ok(
                    DependencyTag::Weather.name(),
                    &current_url,
                    fetch_time,
                    200,
                ),
                Err(e) => DependencyMetrics::failed(
                    DependencyTag::Weather.name(),
                    &current_url,
                    fetch_time,
                    e.to_string(),
                ),
            });
            metrics.record_dependency(match &forecast_res {
                Ok(_) => DependencyMetrics::ok(
                    DependencyTag::Forecast.name(),
                    &forecast_url,
                    fetch_time,
                    200,
                ),
                Err(e) => DependencyMetrics::failed(
                    DependencyTag::Forecast.name(),
                    &forecast_url,
                    fetch_time,
                    e.to_string(),
                ),
            });

            let (current_html, current_fallback) = match current_res {
                Ok(conditions) => (render_current(&conditions, false), false),
                Err(e) => {
                    logger.warn_builder("Current conditions fetch failed")
                        .field("error", e.to_string())
                        .emit();
                    let fallback = FallbackStrategy::html(
                        scheduler.fallback_for("current").unwrap_or_default(),
                    );
                    match fallback.apply(&e.to_string()) {
                        FallbackResult::Rendered(html) => (html, true),
                        FallbackResult::Skipped => (table_current_html.clone(), true),
                    }
                }
            };

            let (forecast_html, forecast_fallback) = match forecast_res {
                Ok(forecast) => (render_forecast(&forecast), false),
                Err(e) => {
                    logger.warn_builder("Forecast fetch failed")
                        .field("error", e.to_string())
                        .emit();
                    let fallback = FallbackStrategy::html(
                        scheduler.fallback_for("forecast").unwrap_or_default(),
                    );
                    match fallback.apply(&e.to_string()) {
                        FallbackResult::Rendered(html) => (html, true),
                        FallbackResult::Skipped => (table_forecast_html.clone(), true),
                    }
                }
            };

            (current_html, current_fallback, forecast_html, forecast_fallback)
        } else {
            (table_current_html.clone(), true, table_forecast_html.clone(), true)
        };

    scheduler.complete_dependency("weather");
    scheduler.complete_dependency("forecast");

    let ready: Vec<String> = scheduler
        .ready_sections()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for name in &ready {
        scheduler.start_section(name);
    }

    metrics.record_section_start("current");
    let _ = sink.send_section("current", &current_html).await;
    metrics.record_section_sent("current", Some(current_html.len()), current_fallback);
    scheduler.complete_section("current");

    metrics.record_section_start("forecast");
    let _ = sink.send_section("forecast", &forecast_html).await;
    metrics.record_section_sent("forecast", Some(forecast_html.len()), forecast_fallback);
    scheduler.complete_section("forecast");

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    debug_assert!(scheduler.is_complete());

    let final_metrics = metrics.finalize(Some(200));
    logger.info("Weather lookup complete");
    eprintln!("\n{}", final_metrics.to_summary());
}

/// Fetch and decode current conditions from the provider.
async fn fetch_current(client: &FetchClient, url: &str) -> anyhow::Result<CurrentConditions> {
    let payload: ProviderCurrent = client.get_json(url, DependencyTag::Weather).await?;
    Ok(payload.into_conditions())
}

/// Fetch and decode the five-day forecast from the provider.
async fn fetch_forecast(client: &FetchClient, url: &str) -> anyhow::Result<Forecast> {
    let payload: ProviderForecast = client.get_json(url, DependencyTag::Forecast).await?;
    Ok(payload.into_forecast())
}

/// CSS styles for the weather demo.
const WEATHER_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #eef3f8; }
.demo-header { background: #10304a; color: white; padding: 1rem 2rem; }
.demo-header a { color: #9ecbff; text-decoration: none; }
.demo-footer { background: #10304a; color: #aac; padding: 1.5rem 2rem; text-align: center; margin-top: 2rem; }
.demo-container { max-width: 720px; margin: 0 auto; padding: 2rem; }

.weather-search form { display: flex; gap: 0.5rem; }
.weather-search input { flex: 1; padding: 0.6rem 0.9rem; border: 1px solid #cdd9e5; border-radius: 6px; }
.weather-search button { padding: 0.6rem 1rem; border: none; border-radius: 6px; background: #10304a; color: white; cursor: pointer; }
.toast { margin-top: 0.75rem; background: #3b2322; color: #ffd9d6; padding: 0.6rem 1rem; border-radius: 6px; }

.weather-current { background: white; border-radius: 10px; padding: 1.5rem 2rem; margin-top: 1.25rem; }
.temp-main { font-size: 3rem; font-weight: 700; margin: 0.25rem 0; }
.temp-detail { color: #667; }
.conditions { display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; color: #445; }
.data-source { color: #889; font-size: 0.8rem; }

.weather-forecast { background: white; border-radius: 10px; padding: 1.5rem 2rem; margin-top: 1.25rem; }
.forecast-strip { display: flex; justify-content: space-between; gap: 0.5rem; }
.forecast-day { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; }
.day-label { color: #667; font-size: 0.85rem; }
.day-icon { font-size: 1.5rem; }
.day-high { font-weight: 700; }
.day-low { color: #99a; }
"#;
