use axum::Router;
use reqwest::Url;
use tokio::net::TcpListener;

/// Bind an ephemeral local port and return it with its base URL.
pub async fn bind_local() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
    (listener, base)
}

/// Serve `app` on an already bound listener in the background.
pub fn serve(listener: TcpListener, app: Router) {
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_server(app: Router) -> Url {
    let (listener, base) = bind_local().await;
    serve(listener, app);
    base
}
