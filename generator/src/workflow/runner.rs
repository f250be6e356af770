use anyhow::Context;
use sinetable::{TableConfig, TableEmitter, TableReport};
use std::io::Write;

/// Drives one emission of the table into an output stream.
pub struct Runner {
    emitter: TableEmitter,
}

impl Runner {
    pub fn new(config: TableConfig) -> Self {
        Self {
            emitter: TableEmitter::new(config),
        }
    }

    pub fn execute<W: Write>(&self, writer: &mut W) -> anyhow::Result<TableReport> {
        let config = self.emitter.config();
        let report = self
            .emitter
            .emit(writer)
            .with_context(|| format!("emitting table {}", config.name))?;

        if report.samples != config.declared_len {
            log::debug!(
                "{} declares {} elements but holds {}",
                config.name,
                config.declared_len,
                report.samples
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_writes_full_table() {
        let runner = Runner::new(TableConfig::default());
        let mut out = Vec::new();
        let report = runner.execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.samples, 512);
        assert!(text.starts_with("byte sinbytes[256] = {\n"));
        assert!(text.ends_with("\n};"));
        assert_eq!(text.matches('\n').count(), 66);
    }
}
