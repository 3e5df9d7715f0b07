//! Interactive form filling over a line-based terminal.

use std::io::{BufRead, Write};

use userdata_lib::form::{Form, JsonDisplay, Submission};
use userdata_lib::model::FieldName;

use crate::CliError;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The form was submitted and accepted.
    Accepted,
    /// Input ran out before the form was accepted.
    Abandoned,
}

/// Prompts for each field, submits, and re-prompts for the fields that
/// failed until the form is accepted.
pub struct Session<R, W> {
    form: Form,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(form: Form, input: R, output: W) -> Self {
        Self {
            form,
            input,
            output,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }

    pub fn run(&mut self) -> Result<SessionEnd, CliError> {
        writeln!(self.output, "User Data")?;
        writeln!(
            self.output,
            "Either an email address or a phone number is required."
        )?;

        let mut pending: Vec<FieldName> = FieldName::ALL.to_vec();
        loop {
            for field in pending {
                if !self.prompt(field)? {
                    log::info!("Input closed before the form was accepted");
                    return Ok(SessionEnd::Abandoned);
                }
            }

            let mut display = JsonDisplay::new(&mut self.output);
            match self.form.submit(&mut display)? {
                Submission::Accepted(_) => return Ok(SessionEnd::Accepted),
                Submission::Rejected(errors) => {
                    writeln!(self.output)?;
                    for (field, message) in errors.iter() {
                        writeln!(self.output, "  {}: {}", field.label(), message)?;
                    }
                    writeln!(self.output)?;
                    pending = errors.fields().collect();
                }
            }
        }
    }

    /// Ask for one field until the edit is accepted. Returns false on end of input.
    fn prompt(&mut self, field: FieldName) -> Result<bool, CliError> {
        loop {
            let current = self.form.snapshot().value(field).into_owned();
            match field {
                FieldName::Gender => write!(self.output, "{} (M/F, blank to skip): ", field.label())?,
                FieldName::DateOfBirth => write!(
                    self.output,
                    "{} (YYYY-MM-DD, up to {}): ",
                    field.label(),
                    self.form.max_date_of_birth()
                )?,
                FieldName::PhoneNumber => write!(self.output, "{} [{}]: ", field.label(), current)?,
                _ => write!(self.output, "{}: ", field.label())?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            let text = line.trim_end_matches(['\r', '\n']);

            // Blank keeps the prefilled country code.
            let text = if field == FieldName::PhoneNumber && text.is_empty() {
                current.as_str()
            } else {
                text
            };

            match self.form.change(field, text) {
                Ok(()) => return Ok(true),
                Err(e) => {
                    log::debug!("Rejected edit to {}: {}", field, e);
                    writeln!(self.output, "  {}", e)?;
                }
            }
        }
    }
}
