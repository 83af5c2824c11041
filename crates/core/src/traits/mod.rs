//! Core traits for the Comprehend client
//!
//! The remote service is reached only through [`ComprehendService`], which
//! enables:
//! - Swapping the network-backed adapter for an in-memory stub in tests
//! - Sharing one capability handle across many clients and tasks
//!
//! ```text
//! ComprehendClient ──▶ dyn ComprehendService
//!                          ├── AwsComprehend   (aws-sdk-comprehend)
//!                          └── StubComprehend  (in-memory, deterministic)
//! ```

mod service;

pub use service::ComprehendService;
