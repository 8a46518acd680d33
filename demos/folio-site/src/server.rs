//! Server-side rendering entry point for Spin/WASI.
//!
//! The WASI HTTP guest hands each request to leptos_wasi, which renders the
//! app shell, resolves the registered server functions, and streams the
//! response back through the outparam.

use leptos::config::get_configuration;
use leptos::task::Executor as LeptosExecutor;
use leptos_wasi::handler::HandlerError;
use leptos_wasi::prelude::{Handler, IncomingRequest, ResponseOutparam, WasiExecutor};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use crate::app::{shell, App, SendContactMessage, SendProjectInquiry};

struct FolioServer;

impl Guest for FolioServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            eprintln!("Executor init error: {e:?}");
            return;
        }
        executor.run_until(async {
            if let Err(e) = serve(request, response_out).await {
                eprintln!("Request error: {e:?}");
            }
        })
    }
}

async fn serve(
    request: IncomingRequest,
    response_out: ResponseOutparam,
) -> Result<(), HandlerError> {
    let leptos_options = get_configuration(None).unwrap().leptos_options;

    Handler::build(request, response_out)?
        .with_server_fn::<SendContactMessage>()
        .with_server_fn::<SendProjectInquiry>()
        .generate_routes(App)
        .handle_with_context(move || shell(leptos_options.clone()), || {})
        .await?;

    Ok(())
}

export!(FolioServer with_types_in wasi);
