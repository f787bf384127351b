use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader};
use zvitlib::{
    error::Result,
    formats::csv::CsvSink,
    report::parser::ReportParser,
    sources::export::{CandidateFilter, ExportSource},
    traits::{MessageSource, ReportSink},
};

#[derive(Parser, Debug)]
#[command(name = "zvit", version, about = "Збір щоденних звітів з експорту чату у CSV")]
struct Cli {
    /// JSON-експорт чату (за замовчуванням stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Файл-таблиця для дозапису
    #[arg(short = 'o', long = "output", default_value = "all_reports.csv")]
    output: String,

    /// Рік звітів (за замовчуванням поточний)
    #[arg(long = "year")]
    year: Option<i32>,

    /// Дописувати до наявного файлу замість перезапису
    #[arg(long = "append")]
    append: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut source = ExportSource::from_reader(BufReader::new(reader))?;

    // свіжий файл на кожен запуск, як і оригінальний збирач
    let mut sink = if cli.append {
        CsvSink::open(&cli.output)?
    } else {
        CsvSink::create(&cli.output)?
    };

    let filter = CandidateFilter::new()?;
    let parser = ReportParser::new()?;

    let mut reports_found = 0usize;
    while let Some(text) = source.next_message()? {
        if !filter.is_report_candidate(&text) {
            continue;
        }
        // збій одного звіту не зупиняє потік
        let parsed = match cli.year {
            Some(year) => parser.parse_with_year(&text, year),
            None => parser.parse(&text),
        };
        match parsed.and_then(|report| {
            sink.append(&report)?;
            Ok(())
        }) {
            Ok(()) => reports_found += 1,
            Err(e) => warn!("звіт пропущено: {e}"),
        }
    }

    sink.flush()?;
    info!("зібрано звітів: {reports_found}");
    Ok(())
}
