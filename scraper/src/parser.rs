use crate::error::*;
use crate::imports::*;
use crate::macros::*;
use crate::utils::*;

fn parse_timestamp(document: &Html) -> String {
    document
        .select(selector!("p.timestamp"))
        .next()
        .map(|timestamp_elem| element_text(&timestamp_elem))
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string())
}

fn parse_table(table_elem: &ElementRef, direction: Direction) -> Result<BridgeTable, ScrapeError> {
    let mut row_elems = table_elem.select(selector!("tr"));
    let header_row_elem = row_elems.next().ok_or(ScrapeError::MissingHeaderRow { direction })?;
    let header: Vec<String> =
        header_row_elem.select(selector!("th")).map(|elem| element_text(&elem).to_lowercase()).collect();
    let mut bridges = BridgeTable::new();
    let mut skipped_rows = 0;
    for row_elem in row_elems {
        let cell_texts: Vec<String> = row_elem.select(selector!("td, th")).map(|elem| element_text(&elem)).collect();
        if cell_texts.len() != header.len() {
            debug!(
                "Skipping {} row with {} cells (expect {}): {:?}",
                direction,
                cell_texts.len(),
                header.len(),
                cell_texts
            );
            skipped_rows += 1;
            continue;
        }
        let mut cell_texts = cell_texts.into_iter();
        if let Some(bridge) = cell_texts.next() {
            let wait_times: VehicleWaitTimes = header.iter().skip(1).cloned().zip(cell_texts).collect();
            bridges.insert(bridge, wait_times);
        }
    }
    info!("Parsed {} bridges for {} ({} rows skipped)", bridges.len(), direction.title(), skipped_rows);
    Ok(bridges)
}

/// Parses the traffic conditions page. The first table holds wait times into the USA and the second into Canada;
/// any further tables are ignored.
pub fn parse_report(html: &str) -> Result<WaitTimeReport, ScrapeError> {
    let document = Html::parse_document(html);
    let timestamp = parse_timestamp(&document);
    let table_elems: Vec<ElementRef> = document.select(selector!("table")).collect();
    if table_elems.len() < 2 {
        return Err(ScrapeError::MissingTables { found: table_elems.len() });
    }
    let to_usa = parse_table(&table_elems[Direction::ToUsa.table_index()], Direction::ToUsa)?;
    let to_canada = parse_table(&table_elems[Direction::ToCanada.table_index()], Direction::ToCanada)?;
    Ok(WaitTimeReport::new(timestamp, to_usa, to_canada))
}
