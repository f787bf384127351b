//! Накопичувач запису послуги: будується з кількох рядків, завершується
//! явною операцією — ніякого прихованого стану між ітераціями.

use chrono::NaiveDate;

use crate::model::{PaymentMethod, Section, TransactionRecord};

/// Відкритий запис послуги. Створюється рядком часу, закривається рядком
/// майстра; решта полів заповнюється по дорозі.
#[derive(Debug)]
pub struct EntryBuilder {
    client: String,
    descriptions: Vec<String>,
    master: Option<String>,
    revenue: Option<i64>,
    payment: Option<PaymentMethod>,
}

impl EntryBuilder {
    pub fn new(client: &str) -> Self {
        EntryBuilder {
            client: client.to_string(),
            descriptions: Vec::new(),
            master: None,
            revenue: None,
            payment: None,
        }
    }

    pub fn push_text(&mut self, line: &str) {
        self.descriptions.push(line.to_string());
    }

    /// Сума послуги завжди додатна, знак відкидається.
    pub fn set_revenue(&mut self, value: i64) {
        self.revenue = Some(value.abs());
    }

    pub fn set_payment(&mut self, pm: PaymentMethod) {
        self.payment = Some(pm);
    }

    /// Рядок майстра — сигнал завершення: сума за замовчуванням 0,
    /// запис випускається одразу.
    pub fn close(self, master: &str, date: NaiveDate) -> TransactionRecord {
        let master = master.to_string();
        self.build(master, date)
    }

    /// Примусове скидання на межі (заголовок секції, кінець звіту).
    /// Запис без майстра відкидається: інваріант «послуга завжди має
    /// майстра» тримається всюди.
    pub fn finish(mut self, date: NaiveDate) -> Option<TransactionRecord> {
        let master = self.master.take()?;
        Some(self.build(master, date))
    }

    fn build(self, master: String, date: NaiveDate) -> TransactionRecord {
        TransactionRecord {
            date,
            section: Section::Service,
            client: Some(self.client),
            master: Some(master),
            description: self.descriptions.join(" / "),
            revenue: self.revenue.unwrap_or(0),
            payment_method: self.payment,
        }
    }
}
