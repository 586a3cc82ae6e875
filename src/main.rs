use chrono_tz::America::New_York;
use log::{error, info};
use news_lexicon::constants::DATE_COLUMN;
use news_lexicon::{
    analyze_corpus_with_custom_config, parse_dates, parse_top_n, read_dataset_from_path,
    read_dataset_from_reader, CorpusReport, CorpusReportConfig, Dataset, Error, RankedList,
};
use std::io;

const USAGE: &str = "Usage: news-lexicon-cli [CSV_PATH | -] [TOP_N]";

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(report) => print_report(&report),
        Err(e) => {
            error!("Error analyzing headlines: {}", e);
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<CorpusReport, Error> {
    let mut config = CorpusReportConfig::default();

    if let Some(top_n) = args.get(1) {
        let top_n = parse_top_n(top_n)?;
        config.top_keywords_n = top_n;
        config.top_ngrams_n = top_n;
    }

    // Read from stdin when no path (or "-") is given
    let dataset = match args.first().map(String::as_str) {
        None | Some("-") => read_dataset_from_reader(io::stdin().lock())?,
        Some(path) => read_dataset_from_path(path)?,
    };

    let dataset = with_parsed_dates(dataset)?;

    info!("Analyzing {} headlines", dataset.len());

    analyze_corpus_with_custom_config(&config, &dataset)
}

fn with_parsed_dates(dataset: Dataset) -> Result<Dataset, Error> {
    if dataset.has_column(DATE_COLUMN) {
        parse_dates(&dataset, &[DATE_COLUMN], New_York)
    } else {
        Ok(dataset)
    }
}

fn print_ranked_list(title: &str, ranked_list: &RankedList) {
    println!("{}", title);
    for (term, count) in ranked_list {
        println!("  {}: {}", term, count);
    }
    println!();
}

fn print_report(report: &CorpusReport) {
    print_ranked_list("Top keywords", &report.top_keywords);
    print_ranked_list("Top n-grams", &report.top_ngrams);
    print_ranked_list("Publisher counts", &report.publisher_counts);

    println!("Top tickers per publisher");
    for (publisher, tickers) in &report.publisher_tickers {
        let tickers: Vec<String> = tickers
            .iter()
            .map(|(ticker_symbol, count)| format!("{} ({})", ticker_symbol, count))
            .collect();
        println!("  {}: {}", publisher, tickers.join(", "));
    }
    println!();

    print_ranked_list("Publisher domains", &report.publisher_domains);
}
