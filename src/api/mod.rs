/*!
Request handlers for pqcd.

Thin glue between a transport and the core: decode wire requests, resolve a
provider from the registry, time the call, record metrics, encode the reply.
The transport itself (HTTP routing, CORS) lives outside this crate.
*/

pub mod dispatch;
pub mod handler;
pub mod types;

#[cfg(feature = "async")]
pub mod async_handler;

pub use dispatch::{Reply, Request, dispatch_line, parse_line};
pub use handler::CryptoHandler;
pub use types::{
    DecapsulateRequest, DecapsulateResponse, EncapsulateRequest, EncapsulateResponse,
    ErrorResponse, HealthResponse, KeyGenResponse, SignRequest, SignResponse, VerifyRequest,
    VerifyResponse,
};

#[cfg(feature = "async")]
pub use async_handler::AsyncCryptoHandler;
