use crate::app::routes::{ApiResponse, Router};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use std::future::Future;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tiny_http::{Header, Request, Response, Server};

/// HTTP front end: a bound listener plus a fixed pool of blocking workers.
pub struct PlannerServer {
    server: Arc<Server>,
    router: Arc<Router>,
    workers: usize,
    addr: SocketAddr,
}

impl PlannerServer {
    pub fn bind<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let addr = format!("{}:{}", config.host(), config.port());
        let server = Server::http(&addr).map_err(|e| PlannerError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;
        let local = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| PlannerError::ServerError {
                message: format!("listener on {} has no IP address", addr),
            })?;

        Ok(Self {
            server: Arc::new(server),
            router: Arc::new(Router::from_config(config)),
            workers: config.workers().max(1),
            addr: local,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves requests until `shutdown` resolves, then drains the workers.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tracing::info!(
            "🚀 Listening on http://{} with {} workers",
            self.addr,
            self.workers
        );

        let stopping = Arc::new(AtomicBool::new(false));
        let mut handles = Vec::with_capacity(self.workers);
        for id in 0..self.workers {
            let server = Arc::clone(&self.server);
            let router = Arc::clone(&self.router);
            let stopping = Arc::clone(&stopping);
            handles.push(tokio::task::spawn_blocking(move || {
                worker_loop(id, &server, &router, &stopping)
            }));
        }

        shutdown.await;
        tracing::info!("🛑 Shutting down, waiting for {} workers", self.workers);

        stopping.store(true, Ordering::SeqCst);
        for _ in 0..self.workers {
            self.server.unblock();
        }

        for handle in handles {
            handle.await.map_err(|e| PlannerError::ServerError {
                message: format!("worker failed: {}", e),
            })?;
        }

        tracing::info!("✅ Server stopped");
        Ok(())
    }
}

fn worker_loop(id: usize, server: &Server, router: &Router, stopping: &AtomicBool) {
    loop {
        match server.recv() {
            Ok(request) => serve(router, request),
            Err(e) => {
                if stopping.load(Ordering::SeqCst) {
                    break;
                }
                tracing::warn!(worker = id, "Failed to accept request: {}", e);
            }
        }
    }
    tracing::debug!(worker = id, "worker stopped");
}

fn serve(router: &Router, request: Request) {
    let started = Instant::now();
    let method = request.method().to_string();
    let url = request.url().to_string();

    let reply = router.handle(&method, &url);
    let status = reply.status;

    if let Err(e) = request.respond(into_response(reply)) {
        tracing::warn!("Failed to write response for {} {}: {}", method, url, e);
        return;
    }

    tracing::debug!(
        method = %method,
        path = %url,
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "served request"
    );
}

fn into_response(reply: ApiResponse) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(reply.body.into_bytes()).with_status_code(reply.status);
    match Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
