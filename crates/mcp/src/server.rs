// MCP server: JSON-RPC 2.0 over stdio, one message per line

use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    JSONRPC_VERSION, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, error, info, warn};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "notion";

/// Outgoing messages waiting for the writer task.
const OUTBOX_CAPACITY: usize = 64;

/// Longest accepted input line, in bytes.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 8 * 1024 * 1024;

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    max_message_len: usize,
}

/// One input line, or the reason it could not be read as text.
enum Frame {
    Message(String),
    Malformed(String),
}

/// Line decoder that reports undecodable and over-long lines as frames
/// instead of errors, so the stream keeps going. Only I/O errors remain
/// errors.
struct MessageCodec {
    lines: LinesCodec,
    max_len: usize,
}

impl MessageCodec {
    fn new(max_len: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_len),
            max_len,
        }
    }

    fn frame(
        &self,
        decoded: Result<Option<String>, LinesCodecError>,
    ) -> Result<Option<Frame>, LinesCodecError> {
        match decoded {
            Ok(line) => Ok(line.map(Frame::Message)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Frame::Malformed(format!(
                "message exceeds {} bytes",
                self.max_len
            )))),
            // LinesCodec consumes the offending line before reporting it.
            Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Some(Frame::Malformed(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}

impl Decoder for MessageCodec {
    type Item = Frame;
    type Error = LinesCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, LinesCodecError> {
        let decoded = self.lines.decode(src);
        self.frame(decoded)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, LinesCodecError> {
        let decoded = self.lines.decode_eof(src);
        self.frame(decoded)
    }
}

/// What a single input line turned out to be.
enum Incoming {
    Request(JsonRpcRequest),
    Notification(String),
    Rejected(JsonRpcResponse),
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }

    /// Cap the length of a single input line.
    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }

    /// Serve on stdin/stdout until stdin is closed.
    pub async fn start(&self) -> Result<()> {
        info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await?;
        info!("MCP server stopped (stdin closed)");
        Ok(())
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    ///
    /// Every request runs on its own task; responses go through a single
    /// writer task so lines never interleave. Lines that are not valid UTF-8
    /// or exceed the length cap are answered with a parse error. Returns once
    /// the input is exhausted or fails to read, after every in-flight request
    /// has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, MessageCodec::new(self.max_message_len));
        let (outbox, mut pending) = mpsc::channel::<String>(OUTBOX_CAPACITY);

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(line) = pending.recv().await {
                sink.send(line).await.context("Failed to write response")?;
            }
            Ok::<_, anyhow::Error>(())
        });

        let mut in_flight = JoinSet::new();
        let mut read_error = None;

        while let Some(frame) = lines.next().await {
            let line = match frame {
                Ok(Frame::Message(line)) => line,
                Ok(Frame::Malformed(reason)) => {
                    warn!(reason = %reason, "Unreadable JSON-RPC message");
                    let response = JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error(format!("Parse error: {}", reason)),
                    );
                    send(&outbox, &response).await;
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "Failed to read request");
                    read_error = Some(e);
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!(message = %line, "MCP message received");

            match classify(line) {
                Incoming::Request(request) => {
                    let registry = Arc::clone(&self.registry);
                    let outbox = outbox.clone();
                    in_flight.spawn(async move {
                        let response = handle_request(&registry, request).await;
                        send(&outbox, &response).await;
                    });
                }
                Incoming::Notification(method) => {
                    debug!(method = %method, "Notification received");
                }
                Incoming::Rejected(response) => send(&outbox, &response).await,
            }

            while let Some(finished) = in_flight.try_join_next() {
                report_join(finished);
            }
        }

        while let Some(finished) = in_flight.join_next().await {
            report_join(finished);
        }

        drop(outbox);
        let written = writer_task.await.context("Writer task failed")?;

        if let Some(e) = read_error {
            return Err(anyhow::Error::new(e).context("Failed to read request"));
        }
        written
    }
}

fn classify(line: &str) -> Incoming {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Failed to parse JSON-RPC message");
            return Incoming::Rejected(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::parse_error(format!("Parse error: {}", e)),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Incoming::Rejected(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(format!("Invalid request: {}", e)),
            ))
        }
    };

    if request.jsonrpc != JSONRPC_VERSION {
        return Incoming::Rejected(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_request(format!(
                "Invalid request: unsupported jsonrpc version '{}'",
                request.jsonrpc
            )),
        ));
    }

    if request.is_notification() {
        Incoming::Notification(request.method)
    } else {
        Incoming::Request(request)
    }
}

/// Dispatch one request and build its response.
async fn handle_request(registry: &ToolRegistry, request: JsonRpcRequest) -> JsonRpcResponse {
    let id = request.id.unwrap_or(Value::Null);

    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize(request.params)),
        "ping" => Ok(Value::Object(Default::default())),
        "tools/list" => list_tools(registry),
        "tools/call" => call_tool(registry, request.params).await,
        method => {
            warn!(method, "Unknown MCP method");
            Err(JsonRpcError::method_not_found(method))
        }
    };

    match outcome {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(e) => {
            debug!(code = e.code, message = %e.message, "Request failed");
            JsonRpcResponse::error(id, e)
        }
    }
}

fn initialize(params: Option<Value>) -> Value {
    // Params only feed the log; clients sending less are still served.
    if let Some(Ok(params)) = params.map(serde_json::from_value::<InitializeParams>) {
        let client = params.client_info.map(|c| c.name).unwrap_or_default();
        info!(client = %client, protocol = %params.protocol_version, "Client initialized");
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {
                list_changed: false,
            }),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).unwrap_or_default()
}

fn list_tools(registry: &ToolRegistry) -> Result<Value, JsonRpcError> {
    let result = ListToolsResult {
        tools: registry.list_schemas(),
    };
    serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

async fn call_tool(registry: &ToolRegistry, params: Option<Value>) -> Result<Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

    let tool = registry
        .get(&params.name)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

    debug!(tool = %params.name, "Calling tool");
    let result = tool
        .execute(params.arguments.unwrap_or(Value::Null))
        .await
        .map_err(|e| JsonRpcError::invalid_params(format!("{:#}", e)))?;

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

async fn send(outbox: &mpsc::Sender<String>, response: &JsonRpcResponse) {
    let line = match serde_json::to_string(response) {
        Ok(line) => line,
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            return;
        }
    };

    if outbox.send(line).await.is_err() {
        warn!("Response dropped: output closed");
    }
}

fn report_join(finished: std::result::Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "Request handler failed");
    }
}
