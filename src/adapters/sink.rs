use crate::domain::model::{OutputFormat, PlanBlock};
use crate::domain::ports::PlanSink;
use crate::utils::error::{PlanError, Result};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Renders blocks onto any writer, one block per emit.
///
/// Text mode prints the banner layout; JSON mode prints one object per line.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write + Send> PlanSink for WriterSink<W> {
    fn emit(&self, block: &PlanBlock) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => block.to_string(),
            OutputFormat::Json => {
                // serde_json writes NaN and infinity as null, which no reader can load back.
                if let Some(field) = block.non_finite_field() {
                    return Err(PlanError::NonFiniteValue {
                        field: field.to_string(),
                    });
                }
                serde_json::to_string(block)?
            }
        };

        let mut writer = self.lock();
        writeln!(writer, "{}", rendered)?;
        writer.flush().map_err(PlanError::IoError)
    }
}

/// Keeps every emitted block in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<PlanBlock>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> Vec<PlanBlock> {
        self.blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PlanSink for MemorySink {
    fn emit(&self, block: &PlanBlock) -> Result<()> {
        self.blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(block.clone());
        Ok(())
    }
}
