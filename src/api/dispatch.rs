/*!
JSON-lines request dispatch.

One request object per line, tagged by `op`:

```text
{"op":"keygen","algorithm":"ecdh"}
{"op":"encapsulate","algorithm":"ecdh","publicKey":"02ab..."}
{"op":"decapsulate","algorithm":"ecdh","privateKey":"...","ciphertext":"..."}
{"op":"sign","algorithm":"ecdsa","privateKey":"...","message":"hello"}
{"op":"verify","algorithm":"ecdsa","publicKey":"...","message":"hello","signature":"..."}
{"op":"metrics"}
{"op":"health"}
```

Every reply is a single line `{"status":<code>,"body":<payload>}` where the
status follows HTTP conventions (200, 400 for client errors, 500 otherwise).
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::handler::CryptoHandler;
use super::types::{DecapsulateRequest, EncapsulateRequest, ErrorResponse, SignRequest, VerifyRequest};
use crate::core::error::{Error, Result};

/// A decoded request line
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Request {
    KeyGen {
        algorithm: String,
    },
    Encapsulate {
        algorithm: String,
        public_key: String,
    },
    Decapsulate {
        algorithm: String,
        private_key: String,
        ciphertext: String,
    },
    Sign {
        algorithm: String,
        private_key: String,
        #[serde(default)]
        message: String,
    },
    Verify {
        algorithm: String,
        public_key: String,
        #[serde(default)]
        message: String,
        signature: String,
    },
    Metrics,
    Health,
}

/// A reply line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(error: &Error) -> Self {
        Self {
            status: error.status_code(),
            body: serde_json::to_value(ErrorResponse::from(error)).unwrap_or(Value::Null),
        }
    }

    /// Wrap the outcome of [`handle`]
    pub fn from_result(result: Result<Value>) -> Self {
        match result {
            Ok(body) => Self::ok(body),
            Err(e) => Self::error(&e),
        }
    }

    /// Reply for a line that did not decode as a request
    pub fn invalid(reason: impl std::fmt::Display) -> Self {
        Self::error(&Error::InvalidRequest(reason.to_string()))
    }

    /// Encode as a single JSON line (without the trailing newline)
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("failed to encode reply: {}", e);
            r#"{"status":500,"body":{"error":"failed to encode reply","kind":"internal"}}"#.to_string()
        })
    }
}

/// Decode one request line
pub fn parse_line(line: &str) -> std::result::Result<Request, Reply> {
    serde_json::from_str(line).map_err(Reply::invalid)
}

/// Execute a decoded request
pub fn handle(handler: &CryptoHandler, request: Request) -> Result<Value> {
    let body = match request {
        Request::KeyGen { algorithm } => serde_json::to_value(handler.keygen(&algorithm)?)?,
        Request::Encapsulate { algorithm, public_key } => {
            serde_json::to_value(handler.encapsulate(&EncapsulateRequest { public_key, algorithm })?)?
        }
        Request::Decapsulate {
            algorithm,
            private_key,
            ciphertext,
        } => serde_json::to_value(handler.decapsulate(&DecapsulateRequest {
            private_key,
            ciphertext,
            algorithm,
        })?)?,
        Request::Sign {
            algorithm,
            private_key,
            message,
        } => serde_json::to_value(handler.sign(&algorithm, &SignRequest { private_key, message })?)?,
        Request::Verify {
            algorithm,
            public_key,
            message,
            signature,
        } => serde_json::to_value(handler.verify(
            &algorithm,
            &VerifyRequest {
                public_key,
                message,
                signature,
            },
        )?)?,
        Request::Metrics => serde_json::to_value(handler.stats())?,
        Request::Health => serde_json::to_value(handler.health())?,
    };
    Ok(body)
}

/// Decode one line, execute it, and encode the reply
pub fn dispatch_line(handler: &CryptoHandler, line: &str) -> String {
    let reply = match parse_line(line) {
        Ok(request) => Reply::from_result(handle(handler, request)),
        Err(reply) => reply,
    };
    reply.to_line()
}
