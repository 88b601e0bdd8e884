use error_boundary::{Boundary, DiscardSink, Fallback, FallbackRenderer, Fault};

use crate::support::{AppError, Recorder};

fn fail() -> Result<u8, AppError> {
    Err(AppError::runtime("boom"))
}

#[test]
fn message_goes_to_the_sink_exactly_once() {
    let recorder = Recorder::new();
    let boundary =
        Boundary::<AppError>::builder("Please retry.").message_sink(recorder.sink()).build();

    let _ = boundary.call(fail);

    assert_eq!(recorder.entries(), ["sink:Please retry."]);
}

#[test]
fn owned_message_is_accepted() {
    let recorder = Recorder::new();
    let text = format!("Failed after {} attempts.", 3);
    let boundary = Boundary::<AppError>::builder(text).message_sink(recorder.sink()).build();

    assert_eq!(boundary.fallback().text(), Some("Failed after 3 attempts."));
    let _ = boundary.call(fail);
    assert_eq!(recorder.entries(), ["sink:Failed after 3 attempts."]);
}

#[test]
fn renderer_runs_with_no_arguments_beyond_the_fault() {
    let recorder = Recorder::new();
    let rendered = recorder.clone();
    let boundary = Boundary::<AppError>::builder(Fallback::render(move |_: &Fault<AppError>| {
        rendered.push("render")
    }))
    .message_sink(recorder.sink())
    .build();

    assert!(boundary.fallback().is_renderer());
    assert_eq!(boundary.call(fail), Ok(None));
    assert_eq!(recorder.entries(), ["render"]);
}

#[test]
fn renderer_can_inspect_the_fault() {
    let recorder = Recorder::new();
    let rendered = recorder.clone();
    let boundary = Boundary::<AppError>::builder(Fallback::render(move |fault: &Fault<AppError>| {
        rendered.push(format!("Error: {fault}"))
    }))
    .build();

    let _ = boundary.call(fail);

    assert_eq!(recorder.entries(), ["Error: runtime error: boom"]);
}

#[test]
fn named_renderer_types_are_accepted() {
    struct Banner(Recorder);

    impl FallbackRenderer<AppError> for Banner {
        fn render(&self, fault: &Fault<AppError>) {
            self.0.push(format!("banner:{:?}", fault.origin()));
        }
    }

    let recorder = Recorder::new();
    let boundary =
        Boundary::<AppError>::builder(Fallback::renderer(Banner(recorder.clone()))).build();

    let _ = boundary.call(fail);

    assert_eq!(recorder.entries(), ["banner:Error"]);
}

#[test]
fn hooks_complete_before_the_fallback() {
    let recorder = Recorder::new();
    let rendered = recorder.clone();
    let boundary = Boundary::<AppError>::builder(Fallback::render(move |_: &Fault<AppError>| {
        rendered.push("render")
    }))
    .on_error(recorder.hook("h1"))
    .on_error(recorder.hook("h2"))
    .build();

    let _ = boundary.call(fail);

    assert_eq!(recorder.entries(), ["h1", "h2", "render"]);
}

#[test]
fn termination_never_reaches_the_fallback() {
    let recorder = Recorder::new();
    let rendered = recorder.clone();
    let boundary = Boundary::<AppError>::builder(Fallback::render(move |_: &Fault<AppError>| {
        rendered.push("render")
    }))
    .build();

    assert_eq!(boundary.call(|| Err::<u8, _>(AppError::Interrupted)), Err(AppError::Interrupted));
    assert!(recorder.entries().is_empty());
}

#[cfg(feature = "std")]
#[test]
fn failing_renderer_propagates_to_the_caller() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let recorder = Recorder::new();
    let boundary = Boundary::<AppError>::builder(Fallback::render(|_: &Fault<AppError>| {
        panic!("renderer broke")
    }))
    .on_error(recorder.hook("h1"))
    .build();

    let caught = catch_unwind(AssertUnwindSafe(|| boundary.call(fail)));

    let payload = caught.expect_err("renderer failure must escape");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"renderer broke"));
    assert_eq!(recorder.entries(), ["h1"]);
}

#[test]
fn discard_sink_swallows_messages() {
    let recorder = Recorder::new();
    let boundary = Boundary::<AppError>::builder("hidden")
        .on_error(recorder.hook("h1"))
        .sink(DiscardSink)
        .build();

    assert_eq!(boundary.call(fail), Ok(None));
    assert_eq!(recorder.entries(), ["h1"]);
}

#[test]
fn debug_formats_without_calling_the_renderer() {
    let message: Fallback<AppError> = "Oops".into();
    let renderer = Fallback::<AppError>::render(|_| unreachable!());

    assert_eq!(format!("{message:?}"), "Message(\"Oops\")");
    assert_eq!(format!("{renderer:?}"), "Render(..)");
    assert_eq!(renderer.text(), None);
}
