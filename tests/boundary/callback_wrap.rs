use error_boundary::{callback, Boundary, Callback, CallbackMeta, Outcome};

use crate::support::{AppError, Recorder};

/// Saves the current form.
fn save_form() -> Result<&'static str, AppError> {
    Ok("saved")
}

fn delete_row() -> Result<(), AppError> {
    Err(AppError::runtime("row locked"))
}

fn boundary(recorder: &Recorder) -> Boundary<AppError> {
    Boundary::builder("fallback")
        .on_error(recorder.hook("hook"))
        .message_sink(recorder.sink())
        .build()
}

#[test]
fn wrapping_preserves_name_and_doc() {
    let recorder = Recorder::new();
    let original = callback!(save_form, "Saves the current form.");

    let wrapped = boundary(&recorder).wrap_callback(original.clone());

    assert_eq!(wrapped.name(), "save_form");
    assert_eq!(wrapped.doc(), Some("Saves the current form."));
    assert_eq!(wrapped.meta(), original.meta());
}

#[test]
fn wrapped_callback_succeeds_like_the_original() {
    let recorder = Recorder::new();
    let wrapped = boundary(&recorder).wrap_callback(callback!(save_form));

    assert_eq!(wrapped.call(), Ok(Some("saved")));
    assert!(recorder.entries().is_empty());
}

#[test]
fn wrapped_callback_is_intercepted() {
    let recorder = Recorder::new();
    let wrapped = boundary(&recorder).wrap_callback(callback!(delete_row));

    assert_eq!(wrapped.call(), Ok(None));
    assert_eq!(recorder.entries(), ["hook", "sink:fallback"]);
}

#[test]
fn wrapped_callback_with_arguments() {
    let recorder = Recorder::new();
    let select = Callback::new("select_row", |index: usize| {
        if index < 3 {
            Ok(index * 10)
        } else {
            Err(AppError::runtime("out of range"))
        }
    });

    let wrapped = boundary(&recorder).wrap_callback_with(select);

    assert_eq!(wrapped.name(), "select_row");
    assert_eq!(wrapped.call_with(2), Ok(Some(20)));
    assert_eq!(wrapped.call_with(7), Ok(None));
    assert_eq!(recorder.entries(), ["hook", "sink:fallback"]);
}

#[test]
fn explicit_metadata_survives_wrapping() {
    let recorder = Recorder::new();
    let meta = CallbackMeta::new("on_click").with_doc("Submit button handler.");
    let wrapped =
        boundary(&recorder).wrap_callback(Callback::with_meta(meta.clone(), delete_row));

    let (wrapped_meta, func) = wrapped.into_parts();

    assert_eq!(wrapped_meta, meta);
    assert_eq!(func(), Ok(None));
}

#[test]
fn from_fn_names_plain_functions() {
    let callback = Callback::from_fn(save_form);

    assert_eq!(callback.name(), "save_form");
    assert_eq!(callback.doc(), None);
}

#[test]
fn wrapper_is_handed_to_a_host_table() {
    let recorder = Recorder::new();
    let boundary = boundary(&recorder);

    type Slot = Box<dyn Fn() -> Outcome<(), AppError>>;

    let table: Vec<Callback<Slot>> =
        vec![boundary.wrap_callback(callback!(delete_row)).map(|f| Box::new(f) as Slot)];

    for entry in &table {
        assert_eq!(entry.name(), "delete_row");
        assert_eq!(entry.call(), Ok(None));
    }
}

#[test]
fn debug_shows_identity_only() {
    let callback = callback!(save_form, "Saves the current form.");

    let debug = format!("{callback:?}");

    assert!(debug.contains("save_form"));
    assert!(debug.contains("Saves the current form."));
}
