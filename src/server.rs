use {
    crate::{
        station::{self, SharedStation},
        template,
    },
    anyhow::Result,
    hyper::{
        header::CONTENT_TYPE,
        service::{make_service_fn, service_fn},
        Body, Method, Request, Response, Server, StatusCode,
    },
    log::{error, info},
    std::{convert::Infallible, net::TcpListener, path::PathBuf, sync::Arc},
};

pub const SENSORS_PATH: &str = "/sensors";

#[derive(Clone)]
pub struct AppState {
    pub station: SharedStation,
    pub template_path: Arc<PathBuf>,
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let make_svc = make_service_fn(move |_conn| {
        let state = state.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let state = state.clone();
                async move { Ok::<_, Infallible>(handle(req, &state).await) }
            }))
        }
    });

    let addr = listener.local_addr()?;
    listener.set_nonblocking(true)?;
    let server = Server::from_tcp(listener)?.serve(make_svc);
    info!("Server listening on: http://{}", addr);
    server.await?;

    Ok(())
}

pub async fn handle(req: Request<Body>, state: &AppState) -> Response<Body> {
    info!("{} {}", req.method(), req.uri());

    if req.method() != Method::GET || req.uri().path() != SENSORS_PATH {
        return response(StatusCode::NOT_FOUND, "text/plain", "Not Found".to_string());
    }

    match sensors(state).await {
        Ok(html) => response(StatusCode::OK, "text/html", html),
        Err(e) => {
            error!("Failed to serve {}: {:#}", SENSORS_PATH, e);
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain",
                "Internal Server Error".to_string(),
            )
        }
    }
}

async fn sensors(state: &AppState) -> Result<String> {
    let snapshot = station::refresh(&state.station)?;
    template::render_file(&state.template_path, &snapshot).await
}

fn response(status: StatusCode, content_type: &str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Ok(value) = content_type.parse() {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }

    response
}
