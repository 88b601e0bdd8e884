//! Example: A minimal page guarded by one boundary
//!
//! A toy "page" with two buttons. One fails inside the page body, the other
//! inside an on-click callback. Both failures are audited and replaced by a
//! support banner; neither crashes the page loop.

use std::sync::{Arc, Mutex};

use error_boundary::{callback, Boundary, Fallback, Fault};

#[derive(Debug)]
enum PageError {
    DivisionByZero,
    Quit,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::DivisionByZero => f.write_str("division by zero"),
            PageError::Quit => f.write_str("quit requested"),
        }
    }
}

error_boundary::impl_termination_class!(PageError => PageError::Quit);

fn divide(a: i32, b: i32) -> Result<i32, PageError> {
    a.checked_div(b).ok_or(PageError::DivisionByZero)
}

/// Raises an error from an on-click slot.
fn trigger_error_callback() -> Result<(), PageError> {
    divide(1, 0).map(|_| ())
}

fn main() {
    let last_error = Arc::new(Mutex::new(None::<String>));
    let audit_state = Arc::clone(&last_error);

    let boundary = Boundary::<PageError>::builder(Fallback::render(|_: &Fault<PageError>| {
        println!("[error] An unexpected error occurred. Please contact support.");
        println!("[link]  Contact Support -> https://example.com/support");
        println!("[button] Retry");
    }))
    .on_error(move |fault| {
        if let Ok(mut slot) = audit_state.lock() {
            *slot = Some(fault.to_string());
        }
    })
    .build();

    let on_click = boundary.wrap_callback(callback!(trigger_error_callback));
    println!("registered callback `{}`: {:?}", on_click.name(), on_click.doc());

    let page = boundary.decorate_with(|clicked: &str| {
        println!("== error boundary demo ==");
        match clicked {
            "direct" => {
                divide(1, 0)?;
            },
            "callback" => {
                on_click.call()?;
            },
            "quit" => return Err(PageError::Quit),
            _ => println!("nothing clicked"),
        }
        Ok(())
    });

    for clicked in ["none", "direct", "callback", "quit"] {
        match page(clicked) {
            Ok(Some(())) => println!("-> rendered normally"),
            Ok(None) => {
                let audited = last_error.lock().ok().and_then(|slot| slot.clone());
                println!("-> fallback shown (audit: {audited:?})");
            },
            Err(termination) => {
                println!("-> stopping: {termination}");
                break;
            },
        }
    }
}
