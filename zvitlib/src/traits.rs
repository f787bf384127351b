//! Шви до зовнішніх співпрацівників: джерело повідомлень та приймач рядків.

use crate::{error::Result, model::DailyReport};

/// Послідовне витягування: одне повідомлення за раз, `None` — кінець потоку.
pub trait MessageSource {
    fn next_message(&mut self) -> Result<Option<String>>;
}

pub trait ReportSink {
    fn append(&mut self, report: &DailyReport) -> Result<()>;
}
