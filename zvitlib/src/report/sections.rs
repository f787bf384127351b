//! Однорядкові секції: сертифікати, косметика, витрати, на рахунок.
//! Кожен рядок розбирається незалежно; `None` — рядок мовчки відкидається.

use chrono::NaiveDate;

use crate::model::{Section, TransactionRecord};
use crate::report::line::LineMatcher;

/// Текст до першого дефіса — назва позиції.
fn before_hyphen(line: &str) -> String {
    line.split('-').next().unwrap_or(line).trim().to_string()
}

/// Продаж сертифіката: потрібні і сума, і токен оплати в дужках.
pub fn certificate(m: &LineMatcher, line: &str, date: NaiveDate) -> Option<TransactionRecord> {
    let revenue = m.revenue(line)?;
    let payment = m.payment(line)?;
    let name = before_hyphen(line);
    Some(TransactionRecord {
        date,
        section: Section::CertificateSale,
        client: Some(name.clone()),
        master: None,
        description: name,
        revenue: revenue.abs(),
        payment_method: Some(payment),
    })
}

/// Продаж косметики: як сертифікат, але без клієнта.
pub fn cosmetic(m: &LineMatcher, line: &str, date: NaiveDate) -> Option<TransactionRecord> {
    let revenue = m.revenue(line)?;
    let payment = m.payment(line)?;
    Some(TransactionRecord {
        date,
        section: Section::CosmeticSale,
        client: None,
        master: None,
        description: before_hyphen(line),
        revenue: revenue.abs(),
        payment_method: Some(payment),
    })
}

/// Витрата: достатньо суми; знак зберігається як записано.
pub fn expense(m: &LineMatcher, line: &str, date: NaiveDate) -> Option<TransactionRecord> {
    let revenue = m.revenue(line)?;
    Some(TransactionRecord {
        date,
        section: Section::Expenses,
        client: None,
        master: None,
        description: before_hyphen(line),
        revenue,
        payment_method: None,
    })
}

/// Оплата на рахунок: клієнт — текст до « -», опис — рядок цілком
/// (не обрізаний, на відміну від інших секцій: так пише шаблон і так
/// рядок потрапляє у колонку `Service`).
pub fn on_account(m: &LineMatcher, line: &str, date: NaiveDate) -> Option<TransactionRecord> {
    let revenue = m.revenue(line)?;
    let client = line.split(" -").next().unwrap_or(line).trim().to_string();
    Some(TransactionRecord {
        date,
        section: Section::OnAccount,
        client: Some(client),
        master: None,
        description: line.to_string(),
        revenue: revenue.abs(),
        payment_method: None,
    })
}
