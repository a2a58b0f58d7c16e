use crate::fetch::*;
use crate::imports::*;
use crate::output::*;
use crate::parser::*;
use crate::types::*;
use ::itertools::Itertools;
use ::strum::IntoEnumIterator;

async fn get_html(options: &Options) -> Result<String> {
    if let Some(input_file) = &options.input_file {
        Ok(read_html_file(input_file)?)
    } else {
        let fetcher = Fetcher::new(&options.user_agent)?;
        fetcher
            .fetch_text(&options.url)
            .await
            .with_context(|| format!("Failed to download traffic conditions HTML from: {:?}", options.url))
    }
}

fn log_report_summary(report: &WaitTimeReport) {
    if report.has_known_timestamp() {
        info!("Wait times as of: {}", report.timestamp);
    } else {
        warn!("Traffic conditions page has no timestamp");
    }
    for direction in Direction::iter() {
        for (bridge, wait_times) in report.table(direction).iter().filter(|(bridge, _)| !is_nexus_only(bridge)) {
            debug!(
                "{}: {}: {}",
                direction.title(),
                bridge_display_name(bridge),
                wait_times
                    .iter()
                    .map(|(vehicle_type, wait_time)| format!(
                        "{} {} ({:?})",
                        vehicle_type,
                        wait_time_display(wait_time),
                        WaitStatus::classify(wait_time)
                    ))
                    .join(", ")
            );
        }
    }
}

/// Downloads (or reads) the traffic conditions page, parses both wait time tables and writes the report. Nothing is
/// written if downloading or parsing fails.
pub async fn run(options: &Options) -> Result<WaitTimeReport> {
    let inner = async {
        let html = get_html(options).await?;
        let report = parse_report(&html).context("Failed to parse traffic conditions HTML")?;
        log_report_summary(&report);
        write_output(&report, &options.output_file)?;
        Ok(report) as Result<_>
    };
    inner.await.context("Failed to update bridge wait times")
}
