//! One-shot `validate` and `submit` commands.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use userdata_lib::form::{Form, JsonDisplay, Submission};
use userdata_lib::model::FormSnapshot;
use userdata_lib::validation::validate_with;
use userdata_lib::FormConfig;

use crate::{CliError, Outcome};

/// Read a snapshot from `path`, or from `stdin` when the path is `-`.
pub fn read_snapshot(path: &Path, stdin: impl Read) -> Result<FormSnapshot, CliError> {
    let snapshot = if path.as_os_str() == "-" {
        serde_json::from_reader(stdin)?
    } else {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text)?
    };
    log::debug!("Loaded snapshot {:?}", snapshot);
    Ok(snapshot)
}

/// Print the error mapping for `snapshot` as pretty JSON (`{}` when valid).
pub fn validate(
    snapshot: &FormSnapshot,
    config: &FormConfig,
    mut out: impl Write,
) -> Result<Outcome, CliError> {
    let errors = validate_with(snapshot, config);
    writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
    Ok(if errors.is_empty() {
        Outcome::Valid
    } else {
        log::info!("Snapshot has {} invalid field(s)", errors.len());
        Outcome::Invalid
    })
}

/// Submit `snapshot`. Accepted data is displayed as JSON; otherwise the
/// error mapping is printed instead.
pub fn submit(
    snapshot: FormSnapshot,
    config: FormConfig,
    mut out: impl Write,
) -> Result<Outcome, CliError> {
    let mut form = Form::new(config).with_snapshot(snapshot);
    let mut display = JsonDisplay::new(&mut out);

    match form.submit(&mut display)? {
        Submission::Accepted(_) => Ok(Outcome::Valid),
        Submission::Rejected(errors) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
            Ok(Outcome::Invalid)
        }
    }
}
