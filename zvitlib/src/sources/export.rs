//! Джерело повідомлень — JSON-експорт чату (файл `result.json` з Telegram
//! Desktop). Мережі та авторизації тут немає: збір працює з офлайн-вивантаження.

use std::io::Read;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, ZvitError};
use crate::traits::MessageSource;

/// Поле `text` в експорті — або рядок, або масив фрагментів, де форматовані
/// шматки загорнуті в об'єкти `{ "text": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextField {
    Plain(String),
    Pieces(Vec<TextPiece>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextPiece {
    Plain(String),
    Entity { text: String },
}

impl TextField {
    fn flatten(self) -> String {
        match self {
            TextField::Plain(s) => s,
            TextField::Pieces(pieces) => pieces
                .into_iter()
                .map(|p| match p {
                    TextPiece::Plain(s) => s,
                    TextPiece::Entity { text } => text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    text: Option<TextField>,
}

#[derive(Debug, Deserialize)]
struct ExportFile {
    messages: Vec<RawMessage>,
}

pub struct ExportSource {
    messages: std::vec::IntoIter<RawMessage>,
}

impl ExportSource {
    pub fn from_reader<R: Read>(r: R) -> Result<Self> {
        let file: ExportFile = serde_json::from_reader(r)?;
        Ok(ExportSource {
            messages: file.messages.into_iter(),
        })
    }
}

impl MessageSource for ExportSource {
    fn next_message(&mut self) -> Result<Option<String>> {
        for msg in self.messages.by_ref() {
            if let Some(text) = msg.text {
                let text = text.flatten();
                if !text.is_empty() {
                    return Ok(Some(text));
                }
            }
        }
        Ok(None)
    }
}

/// Фільтр кандидатів перед розбором: у тексті є слово «Звіт» і токен дати
/// `DD.MM`. Решта повідомлень — не звіти, їх пропускають ще до парсера.
pub struct CandidateFilter {
    re_date: Regex,
}

impl CandidateFilter {
    pub fn new() -> Result<Self> {
        let re_date =
            Regex::new(r"\d{2}\.\d{2}").map_err(|e| ZvitError::Parse(e.to_string()))?;
        Ok(CandidateFilter { re_date })
    }

    pub fn is_report_candidate(&self, text: &str) -> bool {
        text.contains("Звіт") && self.re_date.is_match(text)
    }
}
