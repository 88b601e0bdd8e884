use error_boundary::{Boundary, ResultBoundaryExt};

use crate::support::{AppError, Recorder};

fn parse_quantity(input: &str) -> Result<u32, AppError> {
    input.trim().parse().map_err(|_| AppError::Runtime(format!("not a quantity: {input}")))
}

#[test]
fn within_routes_results_through_the_boundary() {
    let recorder = Recorder::new();
    let boundary = Boundary::<AppError>::builder("Invalid quantity.")
        .on_error(recorder.hook("hook"))
        .message_sink(recorder.sink())
        .build();

    assert_eq!(parse_quantity(" 12 ").within(&boundary), Ok(Some(12)));
    assert_eq!(parse_quantity("twelve").within(&boundary), Ok(None));
    assert_eq!(Err::<u32, _>(AppError::Exit(9)).within(&boundary), Err(AppError::Exit(9)));

    assert_eq!(recorder.entries(), ["hook", "sink:Invalid quantity."]);
}

#[test]
fn within_composes_with_question_mark() {
    let boundary = Boundary::<AppError>::builder("fallback").message_sink(|_| {}).build();

    let handler = || -> Result<Option<u32>, AppError> {
        let first = parse_quantity("3").within(&boundary)?;
        let second = parse_quantity("x").within(&boundary)?;
        Ok(first.zip(second).map(|(a, b)| a + b))
    };

    assert_eq!(handler(), Ok(None));
}
