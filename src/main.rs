use ipv4_cidr_util::config::Config;
use ipv4_cidr_util::logging::init_logging;
use ipv4_cidr_util::output::format_summary;
use ipv4_cidr_util::record::process_records;
use std::error::Error;
use std::io::{self, BufWriter};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() column={} format={:?}", config.column, config.format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let stats = process_records(stdin.lock(), &mut writer, &config)?;

    eprintln!("{}", format_summary(&stats));
    Ok(())
}
