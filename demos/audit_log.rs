//! Example: Structured audit log of intercepted faults
//!
//! Every fault becomes a `FaultReport` serialized as one JSON line, the shape
//! log shippers expect. Requires the `serde` feature.

use std::sync::{Arc, Mutex};

use error_boundary::{Boundary, FaultReport};

#[derive(Debug)]
enum ApiError {
    Timeout { millis: u64 },
    BadRequest(String),
    Shutdown,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Timeout { millis } => write!(f, "upstream timed out after {millis}ms"),
            ApiError::BadRequest(reason) => write!(f, "bad request: {reason}"),
            ApiError::Shutdown => f.write_str("server shutting down"),
        }
    }
}

error_boundary::impl_termination_class!(ApiError => ApiError::Shutdown);

fn main() {
    let audit_log: Arc<Mutex<Vec<FaultReport>>> = Arc::default();
    let writer = Arc::clone(&audit_log);

    let boundary = Boundary::<ApiError>::builder("The service is temporarily unavailable.")
        .on_error(move |fault| {
            let report = fault.report();
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("audit serialization failed: {e}"),
            }
            if let Ok(mut log) = writer.lock() {
                log.push(report);
            }
        })
        .message_sink(|message| println!("[banner] {message}"))
        .build();

    let requests: [fn() -> Result<&'static str, ApiError>; 4] = [
        || Ok("200 OK"),
        || Err(ApiError::Timeout { millis: 1500 }),
        || Err(ApiError::BadRequest("missing field `email`".into())),
        || panic!("handler bug"),
    ];

    for request in requests {
        let _ = boundary.call(request);
    }

    let shutdown = boundary.call(|| Err::<(), _>(ApiError::Shutdown));
    println!("termination passed through: {shutdown:?}");

    let entries = audit_log.lock().map(|log| log.len()).unwrap_or_default();
    println!("{entries} faults recorded");
}
