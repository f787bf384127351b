use zvitlib::{
    formats::csv::CsvSink,
    report::parser::ReportParser,
    sources::export::{CandidateFilter, ExportSource},
    traits::{MessageSource, ReportSink},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Приклад: JSON-експорт чату (stdin) -> CSV (stdout)
    let mut source = ExportSource::from_reader(std::io::BufReader::new(std::io::stdin()))?;
    let filter = CandidateFilter::new()?;
    let parser = ReportParser::new()?;
    let mut sink = CsvSink::new(std::io::stdout(), true)?;

    while let Some(text) = source.next_message()? {
        if !filter.is_report_candidate(&text) {
            continue;
        }
        if let Ok(report) = parser.parse(&text) {
            sink.append(&report)?;
        }
    }
    sink.flush()?;
    Ok(())
}
