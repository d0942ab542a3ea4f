use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::services::Services;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("response writer stopped")]
    WriterClosed,
    #[error("response writer panicked: {0}")]
    WriterTask(#[from] tokio::task::JoinError),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
///
/// Every `tools/call` runs as its own task, so a slow backend call does not
/// hold up other requests. Responses are written as they complete.
pub struct McpServer {
    services: Arc<Services>,
    initialized: bool,
}

impl McpServer {
    pub fn new(services: Services) -> Self {
        Self {
            services: Arc::new(services),
            initialized: false,
        }
    }

    pub async fn run(&mut self) -> Result<(), ServerError> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read from `input` until EOF, writing responses to
    /// `output`. Returns once every in-flight tool call has answered.
    pub async fn serve<R, W>(&mut self, input: R, output: W) -> Result<(), ServerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_responses(output, rx));

        let mut reader = BufReader::new(input);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                warn!("Message too large: {n} bytes (limit {MAX_MESSAGE_BYTES})");
                send(&tx, JsonRpcResponse::error(None, JsonRpcError::parse_error()))?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    send(&tx, JsonRpcResponse::error(None, JsonRpcError::parse_error()))?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!("Parse error: {e}");
                    send(&tx, JsonRpcResponse::error(None, JsonRpcError::parse_error()))?;
                    continue;
                }
            };

            if req.jsonrpc != "2.0" {
                send(
                    &tx,
                    JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                )?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.id.is_none() {
                    continue;
                }
                send(
                    &tx,
                    JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )?;
                continue;
            }

            debug!(method = %req.method, "request");

            if req.method == "tools/call" {
                let services = Arc::clone(&self.services);
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(resp) = handlers::dispatch(&req, &services).await {
                        if tx.send(resp).is_err() {
                            warn!("response dropped, writer already stopped");
                        }
                    }
                });
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.services).await {
                send(&tx, resp)?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        drop(tx);
        writer.await??;
        Ok(())
    }
}

fn send(
    tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    resp: JsonRpcResponse,
) -> Result<(), ServerError> {
    tx.send(resp).map_err(|_| ServerError::WriterClosed)
}

async fn write_responses<W>(
    mut output: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(resp) = rx.recv().await {
        let out = serde_json::to_string(&resp)?;
        output.write_all(out.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
