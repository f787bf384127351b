//! Збирач звіту: один прохід рядками, явний стан секції та відкритий
//! запис послуги, що скидається лише на межах.

use chrono::{Datelike, Local};

use crate::error::{Result, ZvitError};
use crate::model::DailyReport;
use crate::report::date::DateExtractor;
use crate::report::entry::EntryBuilder;
use crate::report::line::{Line, LineMatcher, SectionState};
use crate::report::sections;

pub struct ReportParser {
    dates: DateExtractor,
    matcher: LineMatcher,
}

impl ReportParser {
    pub fn new() -> Result<Self> {
        Ok(ReportParser {
            dates: DateExtractor::new()?,
            matcher: LineMatcher::new()?,
        })
    }

    /// Рік звіту береться поточний — у заголовку його немає.
    pub fn parse(&self, text: &str) -> Result<DailyReport> {
        self.parse_with_year(text, Local::now().year())
    }

    /// Чиста функція від (текст, рік): два виклики дають той самий результат.
    pub fn parse_with_year(&self, text: &str, year: i32) -> Result<DailyReport> {
        let date = self
            .dates
            .extract(text, year)
            .ok_or(ZvitError::MissingDate)?;

        let mut report = DailyReport::new(date);
        let mut state = SectionState::Services;
        let mut pending: Option<EntryBuilder> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match self.matcher.classify(line) {
                Line::Header(next) => {
                    // межа секції: відкритий запис скидається
                    if let Some(rec) = pending.take().and_then(|e| e.finish(date)) {
                        report.transactions.push(rec);
                    }
                    state = next;
                }
                Line::Summary { key, value } => report.upsert_summary(key, value),
                other => match state {
                    SectionState::Services => {
                        self.service_line(other, date, &mut pending, &mut report)
                    }
                    SectionState::Certificates => {
                        if let Some(rec) = sections::certificate(&self.matcher, line, date) {
                            report.transactions.push(rec);
                        }
                    }
                    SectionState::Cosmetics => {
                        if let Some(rec) = sections::cosmetic(&self.matcher, line, date) {
                            report.transactions.push(rec);
                        }
                    }
                    SectionState::Expenses => {
                        if let Some(rec) = sections::expense(&self.matcher, line, date) {
                            report.transactions.push(rec);
                        }
                    }
                    SectionState::OnAccount => {
                        if let Some(rec) = sections::on_account(&self.matcher, line, date) {
                            report.transactions.push(rec);
                        }
                    }
                    // у блоці підсумків значущі лише підсумкові рядки
                    SectionState::Summary => {}
                },
            }
        }

        // кінець звіту — остання межа
        if let Some(rec) = pending.take().and_then(|e| e.finish(date)) {
            report.transactions.push(rec);
        }

        Ok(report)
    }

    fn service_line(
        &self,
        line: Line<'_>,
        date: chrono::NaiveDate,
        pending: &mut Option<EntryBuilder>,
        report: &mut DailyReport,
    ) {
        match line {
            Line::Time { client } => {
                if let Some(rec) = pending.take().and_then(|e| e.finish(date)) {
                    report.transactions.push(rec);
                }
                *pending = Some(EntryBuilder::new(client));
            }
            Line::Master(name) => {
                if let Some(entry) = pending.take() {
                    report.transactions.push(entry.close(name, date));
                }
            }
            Line::Revenue(value) => {
                if let Some(entry) = pending.as_mut() {
                    entry.set_revenue(value);
                }
            }
            Line::Payment(pm) => {
                if let Some(entry) = pending.as_mut() {
                    entry.set_payment(pm);
                }
            }
            Line::Text(text) => {
                if let Some(entry) = pending.as_mut() {
                    entry.push_text(text);
                }
            }
            // заголовки та підсумки оброблено до диспетчеризації
            Line::Header(_) | Line::Summary { .. } => {}
        }
    }
}
