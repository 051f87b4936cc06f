// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use env_logger::Logger;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Re-levels records from one target prefix, e.g. to quiet a chatty dependency
/// without lowering the global filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRule {
    pub target_prefix: String,
    pub from: Level,
    pub to: Level,
}

impl LevelRule {
    pub fn new(target_prefix: &str, from: Level, to: Level) -> Self {
        Self {
            target_prefix: target_prefix.to_string(),
            from,
            to,
        }
    }
}

struct RelevelingLogger {
    inner: Logger,
    rules: Vec<LevelRule>,
}

impl RelevelingLogger {
    fn level_for(&self, target: &str, level: Level) -> Level {
        relevel(&self.rules, target, level)
    }
}

fn relevel(rules: &[LevelRule], target: &str, level: Level) -> Level {
    rules
        .iter()
        .find(|rule| rule.from == level && target.starts_with(&rule.target_prefix))
        .map(|rule| rule.to)
        .unwrap_or(level)
}

impl Log for RelevelingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let relevelled = Metadata::builder()
            .level(self.level_for(metadata.target(), metadata.level()))
            .target(metadata.target())
            .build();
        self.inner.enabled(&relevelled)
    }

    fn log(&self, record: &Record) {
        let relevelled = Record::builder()
            .level(self.level_for(record.target(), record.level()))
            .target(record.target())
            .args(*record.args())
            .module_path(record.module_path())
            .file(record.file())
            .line(record.line())
            .build();
        self.inner.log(&relevelled);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Installs `logger` as the global logger with `rules` applied in front of it.
pub fn init_logger(rules: Vec<LevelRule>, logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(RelevelingLogger {
        inner: logger,
        rules,
    }))?;
    // Filtering happens in the inner logger after rules are applied.
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
