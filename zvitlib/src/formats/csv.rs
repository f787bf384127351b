//! Табличний вивід: заголовки
//! Date,Section,Client,Master,Service,Revenue,PaymentMethod
//!
//! Сховище — текст лише на дозапис: BOM і заголовок пишуться один раз при
//! створенні файлу, далі рядки тільки додаються. BOM потрібен, щоб табличні
//! програми коректно розкодували кирилицю.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::Result;
use crate::model::DailyReport;
use crate::traits::ReportSink;

const BOM: &str = "\u{feff}";

#[derive(serde::Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Section")]
    section: &'a str,
    #[serde(rename = "Client")]
    client: Option<&'a str>,
    #[serde(rename = "Master")]
    master: Option<&'a str>,
    #[serde(rename = "Service")]
    service: &'a str,
    #[serde(rename = "Revenue")]
    revenue: i64,
    #[serde(rename = "PaymentMethod")]
    payment_method: Option<&'a str>,
}

pub struct CsvSink<W: Write> {
    wrt: Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// `write_header` — лише для нового (порожнього) сховища.
    pub fn new(mut w: W, write_header: bool) -> Result<Self> {
        if write_header {
            w.write_all(BOM.as_bytes())?;
        }
        let wrt = WriterBuilder::new().has_headers(write_header).from_writer(w);
        Ok(CsvSink { wrt })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.wrt.flush()?;
        Ok(())
    }
}

impl CsvSink<std::fs::File> {
    /// Відкриває сховище на дозапис; для нового або порожнього файлу
    /// пише BOM та заголовок.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let fresh = file.metadata()?.len() == 0;
        CsvSink::new(file, fresh)
    }

    /// Створює сховище заново: наявний файл обрізається одним відкриттям,
    /// BOM і заголовок пишуться завжди.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        CsvSink::new(file, true)
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    /// Спершу рядки транзакцій у порядку звіту, потім підсумкові рядки
    /// (`Section = "Summary"`, мітка — у колонці `Service`).
    fn append(&mut self, report: &DailyReport) -> Result<()> {
        let date = report.date.format("%Y-%m-%d").to_string();

        for t in &report.transactions {
            self.wrt.serialize(CsvRow {
                date: date.clone(),
                section: t.section.as_str(),
                client: t.client.as_deref(),
                master: t.master.as_deref(),
                service: &t.description,
                revenue: t.revenue,
                payment_method: t.payment_method.map(|pm| pm.as_str()),
            })?;
        }

        for s in &report.summary {
            self.wrt.serialize(CsvRow {
                date: date.clone(),
                section: "Summary",
                client: None,
                master: None,
                service: s.key.label(),
                revenue: s.value,
                payment_method: None,
            })?;
        }

        self.wrt.flush()?;
        Ok(())
    }
}
