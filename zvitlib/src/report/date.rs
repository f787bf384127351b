//! Дата звіту з заголовка «Звіт DD.MM»; рік підставляється ззовні.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Result, ZvitError};

pub struct DateExtractor {
    re: Regex,
}

impl DateExtractor {
    pub fn new() -> Result<Self> {
        let re = Regex::new(r"Звіт\s+(\d{2})\.(\d{2})")
            .map_err(|e| ZvitError::Parse(e.to_string()))?;
        Ok(DateExtractor { re })
    }

    /// `None` — заголовка немає або день/місяць не складаються в календарну
    /// дату (наприклад 31.02); такий звіт відкидається цілком.
    pub fn extract(&self, text: &str, year: i32) -> Option<NaiveDate> {
        let caps = self.re.captures(text)?;
        // дві цифри, помилки парсингу тут неможливі
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}
