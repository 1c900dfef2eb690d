use cpv_derive::cpv_error;
use std::borrow::Cow;

#[cpv_error]
pub enum DemoError {
    #[error("Dataset unreadable{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let missing: Result<(), std::io::Error> = Err(std::io::ErrorKind::NotFound.into());
    missing.context("reading cpvCodes.json")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().contains("(reading cpvCodes.json)"));

    let internal: DemoError = "index poisoned".into();
    assert!(matches!(internal, DemoError::Internal { .. }));

    let with_context: Result<(), DemoError> = Err(internal);
    let err = with_context.context("lookup").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (lookup): index poisoned");
}
