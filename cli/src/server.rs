#[cfg(feature = "server")]
pub mod http {
    use axum::{
        body::Body,
        extract::{Query, Request},
        http::{header, Method, Response, StatusCode, Uri},
        response::{IntoResponse, Json},
        routing::get,
        Router,
    };
    use decicalc::{HttpResponse, RequestEvent};
    use std::collections::BTreeMap;
    use std::net::SocketAddr;
    use tower_http::trace::TraceLayer;
    use tracing::{error, info, warn};

    /// Largest request body read into an event
    const BODY_LIMIT: usize = 2 * 1024 * 1024;

    /// Local stand-in for the API gateway.
    ///
    /// Every request other than `GET /health` is turned into a gateway event
    /// and answered by the calculator handler, whatever its path.
    pub fn router() -> Router {
        Router::new()
            .route("/health", get(health_check))
            .fallback(gateway)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start_server(host: &str, port: u16) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("decicalc gateway listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router()).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "decicalc",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    /// Takes the whole request so no extractor can answer on the handler's
    /// behalf. Undecodable parts degrade to what the gateway would forward.
    async fn gateway(request: Request) -> Response<Body> {
        let (parts, body) = request.into_parts();
        let params = query_parameters(&parts.uri);

        let body = match axum::body::to_bytes(body, BODY_LIMIT).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                error!("Failed to read request body: {}", e);
                return into_response(HttpResponse::internal_error());
            }
        };

        let event = to_event(&parts.method, params, body);
        into_response(decicalc::handle(&event))
    }

    /// Query parameters by name. A query string that does not decode counts
    /// as absent.
    fn query_parameters(uri: &Uri) -> BTreeMap<String, String> {
        match Query::<BTreeMap<String, String>>::try_from_uri(uri) {
            Ok(Query(params)) => params,
            Err(e) => {
                warn!("Ignoring undecodable query string: {}", e);
                BTreeMap::new()
            }
        }
    }

    fn to_event(method: &Method, params: BTreeMap<String, String>, body: String) -> RequestEvent {
        let mut event = RequestEvent::new(method.as_str());
        if !params.is_empty() {
            event.query_string_parameters = Some(params);
        }
        if !body.is_empty() {
            event.body = Some(body);
        }
        event
    }

    fn into_response(response: HttpResponse) -> Response<Body> {
        let status =
            StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut builder = Response::builder().status(status);
        for (name, value) in &response.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !response.body.is_empty() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        builder
            .body(Body::from(response.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(_host: &str, _port: u16) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
