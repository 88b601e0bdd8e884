//! End-to-end behavior of a boundary guarding a small UI app.

use error_boundary::{callback, hook, Boundary, Fallback, Fault, Hooks};

use crate::support::{AppError, Recorder};

fn raise_runtime() -> Result<(), AppError> {
    Err(AppError::runtime("x"))
}

#[test]
fn hook_runs_and_message_is_rendered_once() {
    let recorder = Recorder::new();
    let log = recorder.clone();
    let boundary = Boundary::<AppError>::builder("Oops")
        .on_error(move |_| log.push("A"))
        .message_sink(recorder.sink())
        .build();

    assert_eq!(boundary.call(raise_runtime), Ok(None));
    assert_eq!(recorder.entries(), ["A", "sink:Oops"]);
}

#[cfg(feature = "std")]
#[test]
fn failing_hook_is_contained_and_the_next_hook_runs() {
    let recorder = Recorder::new();
    let log = recorder.clone();
    let hooks: Hooks<AppError> = [
        hook(|_: &Fault<AppError>| panic!("hook failed")),
        hook(move |_: &Fault<AppError>| log.push("B")),
    ]
    .into();
    let boundary = Boundary::new(hooks, "Oops");

    let outcome = boundary.call(raise_runtime);

    assert_eq!(outcome, Ok(None));
    assert_eq!(recorder.entries().last().map(String::as_str), Some("B"));
}

#[test]
fn renderer_replaces_the_message_sink() {
    let recorder = Recorder::new();
    let rendered = recorder.clone();
    let boundary = Boundary::<AppError>::builder(Fallback::render(move |fault: &Fault<AppError>| {
        rendered.push(format!("render:{}", fault.error().is_some()))
    }))
    .message_sink(recorder.sink())
    .build();

    let _ = boundary.call(raise_runtime);

    assert_eq!(recorder.entries(), ["render:true"]);
}

#[test]
fn termination_is_reraised_without_hooks() {
    let recorder = Recorder::new();
    let boundary = Boundary::<AppError>::builder("Oops")
        .on_error(recorder.hook("A"))
        .message_sink(recorder.sink())
        .build();

    let outcome = boundary.call(|| Err::<(), _>(AppError::Interrupted));

    assert_eq!(outcome, Err(AppError::Interrupted));
    assert!(recorder.entries().is_empty());
}

#[test]
fn one_boundary_guards_entry_point_and_callbacks() {
    let recorder = Recorder::new();
    let boundary = Boundary::<AppError>::builder("An error occurred. Please try again.")
        .on_error(recorder.hook("audit"))
        .message_sink(recorder.sink())
        .build();

    fn trigger_error() -> Result<(), AppError> {
        Err(AppError::runtime("division by zero"))
    }

    let on_click = boundary.wrap_callback(callback!(trigger_error));
    let main = boundary.decorate(|| {
        let clicked = on_click.call();
        assert_eq!(clicked, Ok(None));
        Ok::<_, AppError>("page rendered")
    });

    assert_eq!(main(), Ok(Some("page rendered")));
    assert_eq!(
        recorder.entries(),
        ["audit", "sink:An error occurred. Please try again."]
    );
}

#[test]
fn nested_boundaries_handle_at_the_innermost_level() {
    let outer_log = Recorder::new();
    let inner_log = Recorder::new();
    let outer = Boundary::<AppError>::builder("outer")
        .on_error(outer_log.hook("outer"))
        .message_sink(outer_log.sink())
        .build();
    let inner = Boundary::<AppError>::builder("inner")
        .on_error(inner_log.hook("inner"))
        .message_sink(inner_log.sink())
        .build();

    let outcome = outer.call(|| Ok(inner.call(raise_runtime)?));

    assert_eq!(outcome, Ok(Some(None)));
    assert_eq!(inner_log.entries(), ["inner", "sink:inner"]);
    assert!(outer_log.entries().is_empty());
}

#[test]
fn termination_crosses_nested_boundaries() {
    let recorder = Recorder::new();
    let outer = Boundary::<AppError>::builder("outer").on_error(recorder.hook("outer")).build();
    let inner = Boundary::<AppError>::builder("inner").on_error(recorder.hook("inner")).build();

    let outcome = outer.call(|| inner.call(|| Err::<(), _>(AppError::Exit(1))));

    assert_eq!(outcome, Err(AppError::Exit(1)));
    assert!(recorder.entries().is_empty());
}
