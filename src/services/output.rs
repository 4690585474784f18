use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::services::config::ConfigError;
use crate::services::transcoder::TranscodeError;
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(data);
    }
    println!("{}", row(&data));
    Ok(())
}

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<TranscodeError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return e.code();
        }
    }
    "ERROR"
}

/// JSON-mode failure envelope, printed to stdout so callers parse one stream.
pub fn print_error(err: &anyhow::Error) {
    let body = JsonErr {
        ok: false,
        error: ErrorBody {
            code: error_code(err),
            message: format!("{:#}", err),
        },
    };
    match serde_json::to_string_pretty(&body) {
        Ok(s) => println!("{}", s),
        Err(_) => eprintln!("{:#}", err),
    }
}
