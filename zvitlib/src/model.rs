//! Доменні моделі — «нормалізований» шар між текстом звіту та таблицею.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    Service,
    CertificateSale,
    CosmeticSale,
    Expenses,
    OnAccount,
}

impl Section {
    /// Мітка колонки `Section` у вихідній таблиці.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Service => "Service",
            Section::CertificateSale => "Certificate Sale",
            Section::CosmeticSale => "Cosmetic Sale",
            Section::Expenses => "Expenses",
            Section::OnAccount => "On Account",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Готівка",
            PaymentMethod::Card => "Карта",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Готівка" => Some(PaymentMethod::Cash),
            "Карта" => Some(PaymentMethod::Card),
            _ => None,
        }
    }
}

/// П'ять фіксованих міток блоку «Підсумки дня». Рядкові значення є частиною
/// вихідного контракту: аналітика нижче за течією порівнює їх дослівно.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SummaryKey {
    OpeningBalance,
    CardTotal,
    CashTotal,
    DayTotal,
    SafeBalance,
}

impl SummaryKey {
    pub fn label(self) -> &'static str {
        match self {
            SummaryKey::OpeningBalance => "Залишок який був",
            SummaryKey::CardTotal => "Карта",
            SummaryKey::CashTotal => "Готівка",
            SummaryKey::DayTotal => "Всього за день",
            SummaryKey::SafeBalance => "Залишок в сейфі",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Залишок який був" => Some(SummaryKey::OpeningBalance),
            "Карта" => Some(SummaryKey::CardTotal),
            "Готівка" => Some(SummaryKey::CashTotal),
            "Всього за день" => Some(SummaryKey::DayTotal),
            "Залишок в сейфі" => Some(SummaryKey::SafeBalance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub section: Section,
    pub client: Option<String>,
    pub master: Option<String>,
    /// Для послуг — рядки опису, з'єднані через " / ".
    pub description: String,
    /// Ціла сума у гривнях; від'ємна лише у розділі витрат.
    pub revenue: i64,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryEntry {
    pub key: SummaryKey,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub transactions: Vec<TransactionRecord>,
    pub summary: Vec<SummaryEntry>,
}

impl DailyReport {
    pub fn new(date: NaiveDate) -> Self {
        DailyReport {
            date,
            transactions: Vec::new(),
            summary: Vec::new(),
        }
    }

    /// Ключі підсумків унікальні в межах звіту: повторна мітка перезаписує
    /// значення, порядок першої появи зберігається.
    pub fn upsert_summary(&mut self, key: SummaryKey, value: i64) {
        match self.summary.iter_mut().find(|e| e.key == key) {
            Some(e) => e.value = value,
            None => self.summary.push(SummaryEntry { key, value }),
        }
    }

    pub fn summary_value(&self, key: SummaryKey) -> Option<i64> {
        self.summary.iter().find(|e| e.key == key).map(|e| e.value)
    }
}
