use error_boundary::{ErrorClass, Fault, FaultOrigin, FaultReport, PanicMessage, Signal};

use crate::support::AppError;

#[test]
fn error_fault_exposes_the_original_value() {
    let fault = Fault::Error(AppError::runtime("db down"));

    assert_eq!(fault.origin(), FaultOrigin::Error);
    assert_eq!(fault.error(), Some(&AppError::runtime("db down")));
    assert!(fault.panic_message().is_none());
    assert!(!fault.is_panic());
    assert_eq!(fault.into_error(), Some(AppError::runtime("db down")));
}

#[test]
fn panic_fault_exposes_the_message() {
    let fault: Fault<AppError> = Fault::Panic(PanicMessage::new("index out of bounds"));

    assert_eq!(fault.origin(), FaultOrigin::Panic);
    assert_eq!(fault.panic_message().map(PanicMessage::as_str), Some("index out of bounds"));
    assert_eq!(fault.class(), ErrorClass::Ordinary);
    assert_eq!(fault.into_error(), None);
}

#[test]
fn display_distinguishes_panics() {
    let error = Fault::Error(AppError::runtime("x"));
    let panic: Fault<AppError> = Fault::Panic(PanicMessage::new("boom"));

    assert_eq!(error.to_string(), "runtime error: x");
    assert_eq!(panic.to_string(), "panicked: boom");
    assert_eq!(format!("{panic:?}"), "Panic(\"boom\")");
}

#[test]
fn report_captures_origin_class_and_message() {
    let report = Fault::Error(Signal::Exit(4)).report();

    assert_eq!(
        report,
        FaultReport {
            origin: FaultOrigin::Error,
            class: ErrorClass::Termination,
            message: "exit requested (code 4)".to_string(),
        }
    );
}

#[test]
fn panic_message_from_payloads() {
    let borrowed: Box<dyn std::any::Any + Send> = Box::new("static text");
    let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned text"));
    let opaque: Box<dyn std::any::Any + Send> = Box::new(7_i64);

    assert_eq!(PanicMessage::from_payload(borrowed.as_ref()).as_str(), "static text");
    assert_eq!(PanicMessage::from_payload(owned.as_ref()).as_str(), "owned text");
    assert_eq!(PanicMessage::from_payload(opaque.as_ref()).as_str(), PanicMessage::OPAQUE);
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_with_snake_case_tags() {
    let report = Fault::Error(AppError::runtime("x")).report();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "origin": "error",
            "class": "ordinary",
            "message": "runtime error: x",
        })
    );

    let back: FaultReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
