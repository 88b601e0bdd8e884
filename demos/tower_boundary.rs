//! Example: Guarding a Tower service
//!
//! Each request to the action service runs inside the boundary. Ordinary
//! failures come back as `Ok(None)` after the hooks and the fallback ran;
//! shutdown passes through as `Err`. Requires the `tower` feature.

use error_boundary::tower::BoundaryLayer;
use error_boundary::Boundary;
use tower::{service_fn, Service, ServiceBuilder, ServiceExt};

#[derive(Debug)]
enum ActionError {
    NotFound(u32),
    Shutdown,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::NotFound(id) => write!(f, "record {id} not found"),
            ActionError::Shutdown => f.write_str("shutting down"),
        }
    }
}

error_boundary::impl_termination_class!(ActionError => ActionError::Shutdown);

#[tokio::main]
async fn main() {
    let boundary = Boundary::<ActionError>::builder("Could not load the record.")
        .on_error(|fault| eprintln!("audit: {fault}"))
        .message_sink(|message| println!("[banner] {message}"))
        .build();

    let mut service = ServiceBuilder::new().layer(BoundaryLayer::new(boundary)).service(
        service_fn(|id: u32| async move {
            match id {
                0 => Err(ActionError::Shutdown),
                id if id % 2 == 1 => Err(ActionError::NotFound(id)),
                id => Ok(format!("record {id}")),
            }
        }),
    );

    for id in [2, 3, 0] {
        match ServiceExt::<u32>::ready(&mut service).await {
            Ok(ready) => match ready.call(id).await {
                Ok(Some(record)) => println!("{id}: {record}"),
                Ok(None) => println!("{id}: fallback shown"),
                Err(termination) => {
                    println!("{id}: {termination}");
                    break;
                },
            },
            Err(e) => {
                println!("service unavailable: {e}");
                break;
            },
        }
    }
}
