//! zvitlib — розбір щоденних звітів салону (текст з чату) у структуровані
//! записи транзакцій та фінансові підсумки дня.

pub mod error;
pub mod model;
pub mod traits;

pub mod report {
    pub mod date;
    pub mod entry;
    pub mod line;
    pub mod parser;
    pub mod sections;
}

pub mod formats {
    pub mod csv;
}

pub mod sources {
    pub mod export;
}
