#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::sync::mpsc::UnboundedReceiver;

pub async fn send_msg<W: AsyncWriteExt + Unpin>(writer: &mut W, msg: &str) {
    let content = format!("Content-Length: {}\r\n\r\n{}", msg.len(), msg);
    writer.write_all(content.as_bytes()).await.unwrap();
    writer.flush().await.unwrap();
}

pub async fn recv_msg<R: AsyncReadExt + Unpin>(reader: &mut R) -> Option<String> {
    let mut buffer = Vec::new();
    let mut content_length = 0;

    loop {
        let byte = reader.read_u8().await.ok()?;
        buffer.push(byte);
        if buffer.ends_with(b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buffer);
            for line in headers.lines() {
                if line.to_lowercase().starts_with("content-length:") {
                    let parts: Vec<&str> = line.split(':').collect();
                    if parts.len() == 2 {
                        content_length = parts[1].trim().parse().unwrap_or_else(|e| {
                            panic!("Failed to parse Content-Length: {e}, header: {line}")
                        });
                    }
                }
            }
            break;
        }
    }

    if content_length == 0 {
        return None;
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await.ok()?;

    Some(String::from_utf8(body).unwrap())
}

/// A client talking to an in-process server over duplex pipes.
pub struct TestClient {
    writer: DuplexStream,
    rx: UnboundedReceiver<Value>,
    next_id: i64,
}

impl TestClient {
    /// Starts the server and completes the initialize handshake.
    pub async fn start(root_uri: Option<&str>) -> Self {
        let (client_read, server_write) = tokio::io::duplex(64 * 1024);
        let (server_read, client_write) = tokio::io::duplex(64 * 1024);

        let (service, socket) = outlinetext_lsp::build_service();
        tokio::spawn(async move {
            tower_lsp::Server::new(server_read, server_write, socket)
                .serve(service)
                .await;
        });

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut reader = tokio::io::BufReader::new(client_read);
            while let Some(msg) = recv_msg(&mut reader).await {
                let value: Value = serde_json::from_str(&msg).unwrap();
                if tx.send(value).is_err() {
                    break;
                }
            }
        });

        let mut client = Self {
            writer: client_write,
            rx,
            next_id: 1,
        };

        let root = root_uri.map_or(Value::Null, |uri| json!(uri));
        client
            .request("initialize", json!({ "rootUri": root, "capabilities": {} }))
            .await;
        client.notify("initialized", json!({})).await;
        client
    }

    /// Sends a request and waits for its response.
    pub async fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;

        let msg = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params });
        send_msg(&mut self.writer, &msg.to_string()).await;

        loop {
            let msg = self.recv().await.expect("server closed before responding");
            if msg.get("id") == Some(&json!(id)) && msg.get("method").is_none() {
                return msg;
            }
        }
    }

    /// Sends a notification.
    pub async fn notify(&mut self, method: &str, params: Value) {
        let msg = json!({ "jsonrpc": "2.0", "method": method, "params": params });
        send_msg(&mut self.writer, &msg.to_string()).await;
    }

    /// Waits for the next `publishDiagnostics` notification.
    pub async fn next_diagnostics(&mut self) -> Value {
        loop {
            let msg = self.recv().await.expect("no diagnostics published");
            if msg["method"] == "textDocument/publishDiagnostics" {
                return msg["params"].clone();
            }
        }
    }

    /// Opens a document.
    pub async fn open(&mut self, uri: &str, text: &str) {
        self.notify(
            "textDocument/didOpen",
            json!({
                "textDocument": {
                    "uri": uri,
                    "languageId": "outlinetext",
                    "version": 1,
                    "text": text,
                }
            }),
        )
        .await;
    }

    async fn recv(&mut self) -> Option<Value> {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .ok()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recv_msg_success() {
        let payload = r#"{"jsonrpc":"2.0","method":"abc","params":{}}"#;
        let data = format!("Content-Length: {}\r\n\r\n{}", payload.len(), payload);
        let mut cursor = std::io::Cursor::new(data.into_bytes());

        let result = recv_msg(&mut cursor).await;
        assert_eq!(result.unwrap(), payload);
    }
}
