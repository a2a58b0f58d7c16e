use crate::error::*;
use crate::imports::*;
use ::std::io;

/// Overwrites the output file with the report as JSON indented by two spaces. The JSON is fully serialized before
/// the file is opened, but the write itself is not atomic.
pub fn write_output(report: &WaitTimeReport, output_file_path: &Path) -> Result<(), ScrapeError> {
    let output_error = |source: io::Error| ScrapeError::Output { path: output_file_path.to_path_buf(), source };
    info!("Writing wait times JSON to: {:?}", output_file_path);
    let contents = serde_json::to_vec_pretty(report).map_err(|err| output_error(err.into()))?;
    if let Some(output_dir) = output_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(output_dir).map_err(output_error)?;
    }
    fs::write(output_file_path, contents).map_err(output_error)?;
    info!("Saved {} bridge wait times to: {:?}", report.to_usa.len() + report.to_canada.len(), output_file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::tempfile::TempDir;

    fn sample_report() -> WaitTimeReport {
        let mut to_usa = BridgeTable::new();
        to_usa.insert(
            "Rainbow Bridge".to_string(),
            [("cars", "5 min"), ("trucks", "8 min")].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        );
        WaitTimeReport::new("10:15 AM".to_string(), to_usa, BridgeTable::new())
    }

    #[test]
    fn test_write_output() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("public").join(WAIT_TIMES_FILE_NAME);
        write_output(&sample_report(), &path)?;
        assert_eq!(
            fs::read_to_string(&path)?,
            concat!(
                "{\n",
                "  \"timestamp\": \"10:15 AM\",\n",
                "  \"to_usa\": {\n",
                "    \"Rainbow Bridge\": {\n",
                "      \"cars\": \"5 min\",\n",
                "      \"trucks\": \"8 min\"\n",
                "    }\n",
                "  },\n",
                "  \"to_canada\": {}\n",
                "}",
            )
        );
        Ok(())
    }

    #[test]
    fn test_write_output_overwrites() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(WAIT_TIMES_FILE_NAME);
        fs::write(&path, "previous contents that are longer than the new report ".repeat(100))?;
        let report = sample_report();
        write_output(&report, &path)?;
        assert_eq!(serde_json::from_str::<WaitTimeReport>(&fs::read_to_string(&path)?)?, report);
        Ok(())
    }

    #[test]
    fn test_write_output_to_directory_fails() -> Result<()> {
        let dir = TempDir::new()?;
        match write_output(&sample_report(), dir.path()) {
            Err(ScrapeError::Output { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("Expect output error, got: {:?}", other),
        }
        Ok(())
    }
}
