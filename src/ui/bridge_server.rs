use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{sleep_duration_millis, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::enums::editor_command::EditorCommand;
use crate::enums::extension_message::ExtensionMessage;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::structs::menu::action_click::ActionClick;
use crate::structs::menu::menu_click::MenuClick;
use crate::workers::background::Background;

/// Local HTTP bridge through which a browser-side shim feeds menu clicks,
/// icon clicks, messages and lifecycle events into the background. The
/// options page edits webhooks through `/options`.
pub struct BridgeServer {
    background: Arc<Background>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl BridgeServer {
    pub const fn new(background: Arc<Background>) -> Self {
        Self {
            background,
            addr: None,
            shutdown_tx: None,
        }
    }

    pub const fn addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    pub async fn start(&mut self, host: &str, port: u16) -> HookmenuResult<SocketAddr> {
        let addr: SocketAddr = format!("{host}:{port}").parse().map_err(|_| {
            HookmenuError::validation_error(
                "server.host",
                host,
                "must be an IP address",
                Some("Use 127.0.0.1 to keep the bridge local"),
            )
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let (bound, server) = warp::serve(routes(Arc::clone(&self.background)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| HookmenuError::system_error("bridge server bind", &e.to_string()))?;

        tokio::spawn(server);
        self.addr = Some(bound);

        log::info!("🌐 Bridge server listening on http://{bound}");
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> HookmenuResult<()> {
        log::info!("🛑 Shutting down bridge server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|()| {
                HookmenuError::system_error("shutdown", "Failed to send shutdown signal")
            })?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Bridge server shutdown complete");

        Ok(())
    }
}

pub fn routes(
    background: Arc<Background>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let background_filter = warp::any().map(move || Arc::clone(&background));

    let get_menus = warp::path!("menus")
        .and(warp::get())
        .and(background_filter.clone())
        .and_then(get_menus_handler);

    let get_indicator = warp::path!("indicator")
        .and(warp::get())
        .and(background_filter.clone())
        .and_then(get_indicator_handler);

    let menu_clicked = warp::path!("menus" / "clicked")
        .and(warp::post())
        .and(warp::body::json())
        .and(background_filter.clone())
        .and_then(menu_clicked_handler);

    let action_clicked = warp::path!("action" / "clicked")
        .and(warp::post())
        .and(warp::body::json())
        .and(background_filter.clone())
        .and_then(action_clicked_handler);

    let message = warp::path!("messages")
        .and(warp::post())
        .and(warp::body::json())
        .and(background_filter.clone())
        .and_then(message_handler);

    let lifecycle = warp::path!("lifecycle" / String)
        .and(warp::post())
        .and(background_filter.clone())
        .and_then(lifecycle_handler);

    let get_options = warp::path!("options")
        .and(warp::get())
        .and(background_filter.clone())
        .and_then(get_options_handler);

    let edit_options = warp::path!("options" / "edit")
        .and(warp::post())
        .and(warp::body::json())
        .and(background_filter)
        .and_then(edit_options_handler);

    get_menus
        .or(get_indicator)
        .or(menu_clicked)
        .or(action_clicked)
        .or(message)
        .or(lifecycle)
        .or(get_options)
        .or(edit_options)
        .with(warp::cors()
            .allow_origin("http://127.0.0.1")
            .allow_origin("http://localhost")
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST"]))
}

fn error_reply(error: &HookmenuError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match error {
        HookmenuError::WebhookNotFound { .. } => StatusCode::NOT_FOUND,
        HookmenuError::ValidationError { .. } | HookmenuError::UserInputError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warp::reply::with_status(warp::reply::json(&json!({ "error": error.user_message() })), status)
}

async fn get_menus_handler(background: Arc<Background>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&background.menus.entries().await))
}

async fn get_indicator_handler(background: Arc<Background>) -> Result<impl warp::Reply, Infallible> {
    let status = background.reporter().current();
    Ok(warp::reply::json(&json!({
        "status": status.kind(),
        "detail": status.detail(),
        "indicator": background.indicator.state(),
    })))
}

async fn menu_clicked_handler(
    click: MenuClick,
    background: Arc<Background>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    log::debug!("🖱️ Menu click on '{}'", click.menu_item_id);

    match background.engine.handle_menu_click(&click).await {
        Ok(Some(outcome)) => Ok(warp::reply::with_status(warp::reply::json(&outcome), StatusCode::OK)),
        Ok(None) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "handled": false })),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn action_clicked_handler(
    click: ActionClick,
    background: Arc<Background>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    match background.engine.handle_action_click(&click).await {
        Ok(Some(outcome)) => Ok(warp::reply::with_status(warp::reply::json(&outcome), StatusCode::OK)),
        Ok(None) => {
            let options = background.config_path.display().to_string();
            log::info!("⚙️ Opening options: {options}");
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "options": options })),
                StatusCode::OK,
            ))
        }
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn message_handler(
    message: ExtensionMessage,
    background: Arc<Background>,
) -> Result<impl warp::Reply, Infallible> {
    let handled = background.reporter().handle_message(&message).await;
    if !handled {
        log::debug!("Ignoring unrecognised message");
    }
    Ok(warp::reply::json(&json!({ "handled": handled })))
}

async fn lifecycle_handler(
    event: String,
    background: Arc<Background>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let result = match event.as_str() {
        "installed" => background.menu_sync.on_installed().await,
        "startup" => background.menu_sync.on_startup().await,
        _ => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "error": format!("Unknown lifecycle event '{event}'") })),
                StatusCode::NOT_FOUND,
            ));
        }
    };

    match result {
        Ok(count) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "menus": count })),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn get_options_handler(
    background: Arc<Background>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    match background.editor().await {
        Ok(editor) => Ok(warp::reply::with_status(warp::reply::json(&editor.view()), StatusCode::OK)),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn edit_options_handler(
    command: EditorCommand,
    background: Arc<Background>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let editor = match background.editor().await {
        Ok(editor) => editor,
        Err(e) => return Ok(error_reply(&e)),
    };

    log::debug!("✏️ Options edit: {command:?}");
    match editor.apply(command) {
        Ok(result) => {
            editor.request_save();
            let mut view = editor.view();
            view["result"] = result;
            Ok(warp::reply::with_status(warp::reply::json(&view), StatusCode::OK))
        }
        Err(e) => Ok(error_reply(&e)),
    }
}
