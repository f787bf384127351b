//! Класифікація одного рядка звіту: впорядкований набір шаблонів,
//! перемагає перший збіг.

use regex::Regex;

use crate::error::{Result, ZvitError};
use crate::model::{PaymentMethod, SummaryKey};

/// Стан розбору — поточна секція звіту. Початковий стан — послуги.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Services,
    Certificates,
    Cosmetics,
    Expenses,
    OnAccount,
    Summary,
}

/// Результат класифікації рядка.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Заголовок секції; сам по собі запису не породжує.
    Header(SectionState),
    /// Підсумковий рядок — розпізнається у будь-якому стані.
    Summary { key: SummaryKey, value: i64 },
    /// `HH:MM <клієнт>` — початок нового запису послуги.
    Time { client: &'a str },
    /// Завершальний рядок `(майстер)` — закриває запис.
    Master(&'a str),
    /// `<сума> грн`.
    Revenue(i64),
    /// `(Готівка)` або `(Карта)`.
    Payment(PaymentMethod),
    /// Будь-який інший непорожній рядок.
    Text(&'a str),
}

/// Літеральні заголовки секцій з шаблону звіту. «На рахунок :» — саме так,
/// з пробілом перед двокрапкою.
const HEADERS: [(&str, SectionState); 5] = [
    ("Продаж сертифікатів:", SectionState::Certificates),
    ("Витрати:", SectionState::Expenses),
    ("Підсумки дня:", SectionState::Summary),
    ("Продаж косметики:", SectionState::Cosmetics),
    ("На рахунок :", SectionState::OnAccount),
];

pub struct LineMatcher {
    re_summary: Regex,
    re_time: Regex,
    re_master: Regex,
    re_revenue: Regex,
    re_payment: Regex,
}

impl LineMatcher {
    pub fn new() -> Result<Self> {
        let build = |p: &str| Regex::new(p).map_err(|e| ZvitError::Parse(e.to_string()));
        Ok(LineMatcher {
            re_summary: build(r"(.+):\s*(-?\s*\d+)\s*грн")?,
            re_time: build(r"^(\d{1,2}:\d{2})\s(.+)")?,
            re_master: build(r"\((\w+)\)$")?,
            re_revenue: build(r"(-?\s*\d+)\s*грн")?,
            re_payment: build(r"\((Готівка|Карта)\)")?,
        })
    }

    /// Класифікує обрізаний непорожній рядок. Порядок гілок фіксований:
    /// заголовок, підсумок, час, майстер, сума, оплата, текст.
    pub fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        for (needle, state) in HEADERS {
            if line.contains(needle) {
                return Line::Header(state);
            }
        }

        if let Some(caps) = self.re_summary.captures(line) {
            let label = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if let Some(key) = SummaryKey::from_label(label) {
                if let Some(value) = parse_amount(&caps[2]) {
                    return Line::Summary { key, value };
                }
            }
            // нерозпізнана мітка — не підсумок, рядок іде далі по гілках
        }

        if let Some(caps) = self.re_time.captures(line) {
            if let Some(client) = caps.get(2) {
                return Line::Time {
                    client: client.as_str().trim(),
                };
            }
        }

        // Токен оплати у дужках — не ім'я майстра, навіть наприкінці рядка.
        if let Some(caps) = self.re_master.captures(line) {
            if let Some(word) = caps.get(1) {
                if PaymentMethod::from_token(word.as_str()).is_none() {
                    return Line::Master(word.as_str());
                }
            }
        }

        if let Some(caps) = self.re_revenue.captures(line) {
            if let Some(value) = parse_amount(&caps[1]) {
                return Line::Revenue(value);
            }
        }

        if let Some(caps) = self.re_payment.captures(line) {
            if let Some(pm) = PaymentMethod::from_token(&caps[1]) {
                return Line::Payment(pm);
            }
        }

        Line::Text(line)
    }

    pub(crate) fn revenue(&self, line: &str) -> Option<i64> {
        self.re_revenue
            .captures(line)
            .and_then(|caps| parse_amount(&caps[1]))
    }

    pub(crate) fn payment(&self, line: &str) -> Option<PaymentMethod> {
        self.re_payment
            .captures(line)
            .and_then(|caps| PaymentMethod::from_token(&caps[1]))
    }
}

/// Сума як ціле: пробіли всередині збігу («- 500») відкидаються.
fn parse_amount(s: &str) -> Option<i64> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    compact.parse().ok()
}
