use crate::domain::model::{FormFields, StatusLevel};
use crate::domain::ports::{FormSource, StatusSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

const ANSI_RESET: &str = "\x1b[0m";

/// Form backed by the values captured from CLI arguments.
///
/// Kept behind a mutex so a successful submission can clear the fields
/// through `&self`, mirroring a form reset.
pub struct ArgsForm {
    fields: Mutex<FormFields>,
}

impl ArgsForm {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields: Mutex::new(fields),
        }
    }
}

#[async_trait]
impl FormSource for ArgsForm {
    async fn fields(&self) -> Result<FormFields> {
        Ok(self.fields.lock().await.clone())
    }

    async fn reset(&self) -> Result<()> {
        *self.fields.lock().await = FormFields::default();
        Ok(())
    }
}

/// Status region on stderr: one colored line per update.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStatus;

impl ConsoleStatus {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for ConsoleStatus {
    fn set_status(&self, text: &str, level: StatusLevel) {
        eprintln!("{}{}{}", level.color(), text, ANSI_RESET);
    }
}
