use zvitlib::{
    error::ZvitError,
    model::{PaymentMethod, Section, SummaryKey},
    report::parser::ReportParser,
};

const FULL_REPORT: &str = "\
Звіт 12.08

10:00 Ірина Коваль
Стрижка модельна
Укладка
450 грн
(Карта)
(Олена)

11:30 Марія
Манікюр
300 грн
(Готівка)
(Наталя)

Продаж сертифікатів:
Подарунковий сертифікат - 500 грн (Карта)
Сертифікат без оплати - 100 грн

Продаж косметики:
Шампунь відновлюючий - 450 грн (Готівка)

Витрати:
Оренда - -500 грн

На рахунок :
Світлана Петрівна - 700 грн за фарбування

Підсумки дня:
Залишок який був: 1000 грн
Готівка: 830 грн
Карта: 950 грн
Всього за день: 1780 грн
Залишок в сейфі: 1500 грн
";

#[test]
fn full_report_end_to_end() {
    let parser = ReportParser::new().expect("parser");
    let report = parser.parse_with_year(FULL_REPORT, 2025).expect("parse");

    assert_eq!(report.date.to_string(), "2025-08-12");
    // 2 послуги + 1 сертифікат (другий без оплати відкинуто) + 1 косметика
    // + 1 витрата + 1 на рахунок
    assert_eq!(report.transactions.len(), 6);

    let svc = &report.transactions[0];
    assert_eq!(svc.section, Section::Service);
    assert_eq!(svc.client.as_deref(), Some("Ірина Коваль"));
    assert_eq!(svc.description, "Стрижка модельна / Укладка");
    assert_eq!(svc.revenue, 450);
    assert_eq!(svc.payment_method, Some(PaymentMethod::Card));
    assert_eq!(svc.master.as_deref(), Some("Олена"));

    let svc2 = &report.transactions[1];
    assert_eq!(svc2.client.as_deref(), Some("Марія"));
    assert_eq!(svc2.master.as_deref(), Some("Наталя"));
    assert_eq!(svc2.payment_method, Some(PaymentMethod::Cash));

    let cert = &report.transactions[2];
    assert_eq!(cert.section, Section::CertificateSale);
    assert_eq!(cert.client.as_deref(), Some("Подарунковий сертифікат"));
    assert_eq!(cert.description, "Подарунковий сертифікат");
    assert_eq!(cert.revenue, 500);
    assert_eq!(cert.payment_method, Some(PaymentMethod::Card));

    let cosm = &report.transactions[3];
    assert_eq!(cosm.section, Section::CosmeticSale);
    assert_eq!(cosm.client, None);
    assert_eq!(cosm.revenue, 450);

    let exp = &report.transactions[4];
    assert_eq!(exp.section, Section::Expenses);
    assert_eq!(exp.description, "Оренда");
    assert_eq!(exp.revenue, -500);
    assert_eq!(exp.payment_method, None);

    let acc = &report.transactions[5];
    assert_eq!(acc.section, Section::OnAccount);
    assert_eq!(acc.client.as_deref(), Some("Світлана Петрівна"));
    assert_eq!(acc.description, "Світлана Петрівна - 700 грн за фарбування");
    assert_eq!(acc.revenue, 700);

    // підсумки: всі п'ять міток, у порядку появи
    let keys: Vec<SummaryKey> = report.summary.iter().map(|e| e.key).collect();
    assert_eq!(
        keys,
        vec![
            SummaryKey::OpeningBalance,
            SummaryKey::CashTotal,
            SummaryKey::CardTotal,
            SummaryKey::DayTotal,
            SummaryKey::SafeBalance,
        ]
    );
    assert_eq!(report.summary_value(SummaryKey::DayTotal), Some(1780));
    assert_eq!(report.summary_value(SummaryKey::SafeBalance), Some(1500));
}

#[test]
fn parsing_is_deterministic() {
    let parser = ReportParser::new().expect("parser");
    let a = parser.parse_with_year(FULL_REPORT, 2025).expect("parse");
    let b = parser.parse_with_year(FULL_REPORT, 2025).expect("parse");
    assert_eq!(a, b);
}

#[test]
fn missing_date_rejects_whole_report() {
    let parser = ReportParser::new().expect("parser");
    let err = parser
        .parse_with_year("10:00 Ірина\nСтрижка\n(Олена)", 2025)
        .unwrap_err();
    assert!(matches!(err, ZvitError::MissingDate));
}

#[test]
fn invalid_calendar_date_rejects_whole_report() {
    let parser = ReportParser::new().expect("parser");
    let err = parser.parse_with_year("Звіт 31.02\n...", 2025).unwrap_err();
    assert!(matches!(err, ZvitError::MissingDate));
}

#[test]
fn summary_last_write_wins() {
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\nПідсумки дня:\nВсього за день: 1500 грн\nВсього за день: 1700 грн\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.summary.len(), 1);
    assert_eq!(report.summary_value(SummaryKey::DayTotal), Some(1700));
}

#[test]
fn summary_recognized_inside_services() {
    // підсумковий рядок спрацьовує у будь-якому стані, до диспетчеризації
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\nГотівка: 830 грн\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.summary_value(SummaryKey::CashTotal), Some(830));
    assert!(report.transactions.is_empty());
}

#[test]
fn entry_without_master_is_discarded_at_boundary() {
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\n10:00 Ірина\nСтрижка\n200 грн\nВитрати:\nВода - -80 грн\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].section, Section::Expenses);
}

#[test]
fn entry_without_master_is_discarded_at_end_of_report() {
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\n10:00 Ірина\nСтрижка\n200 грн\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert!(report.transactions.is_empty());
}

#[test]
fn new_time_line_discards_open_masterless_entry() {
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\n10:00 Ірина\nСтрижка\n11:00 Марія\nМанікюр\n(Наталя)\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].client.as_deref(), Some("Марія"));
}

#[test]
fn master_line_defaults_revenue_to_zero() {
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\n10:00 Ірина\nКонсультація\n(Олена)\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].revenue, 0);
}

#[test]
fn expense_separator_hyphen_reads_as_sign() {
    // «Вода - 80 грн»: дефіс-роздільник прилипає до числа, сума від'ємна —
    // так читає шаблон і так рахує аналітика витрат
    let parser = ReportParser::new().expect("parser");
    let text = "Звіт 12.08\nВитрати:\nВода - 80 грн\n";
    let report = parser.parse_with_year(text, 2025).expect("parse");
    assert_eq!(report.transactions[0].revenue, -80);
}
