use crate::math::{generate, StatsHelper};
use crate::prelude::{TableConfig, TableReport, TableResult};
use crate::table::layout::layout;
use crate::telemetry::log::LogManager;
use std::io::Write;

/// Writes the table declaration for a config to any byte sink.
pub struct TableEmitter {
    config: TableConfig,
    logger: LogManager,
}

impl TableEmitter {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            logger: LogManager::new("emitter"),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn header(&self) -> String {
        format!(
            "{} {}[{}] = {{\n",
            self.config.element_type, self.config.name, self.config.declared_len
        )
    }

    pub fn emit<W: Write>(&self, writer: &mut W) -> TableResult<TableReport> {
        self.logger
            .detail(&format!("config {}", serde_json::to_string(&self.config)?));

        let samples = generate(&self.config);
        let stats = StatsHelper::summarize(&samples);
        let body = layout(&self.config, &samples);

        writer.write_all(self.header().as_bytes())?;
        writer.write_all(body.body.as_bytes())?;
        writer.write_all(b"\n};")?;
        writer.flush()?;

        self.logger.record(&format!(
            "emitted {} samples over {} lines, range [{}, {}]",
            stats.count, body.breaks, stats.min, stats.max
        ));

        Ok(TableReport {
            samples: samples.len(),
            lines: body.breaks,
            stats,
        })
    }
}

pub fn render<W: Write>(config: &TableConfig, writer: &mut W) -> TableResult<TableReport> {
    TableEmitter::new(config.clone()).emit(writer)
}

pub fn render_to_string(config: &TableConfig) -> TableResult<String> {
    let mut buffer = Vec::new();
    render(config, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
