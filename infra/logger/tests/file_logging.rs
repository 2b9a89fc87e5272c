use sledger_logger::{FileSink, LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_sink_writes_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file")
        .console(false)
        .level(LevelFilter::INFO)
        .file(FileSink::new(&dir).rotation(Rotation::NEVER).json(true))
        .init()?;
    assert!(logger.has_file_sink());

    tracing::info!(order_id = "ORD-TEST0001", "order created");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let file = fs::read_dir(&dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should exist");

    let contents = fs::read_to_string(file)?;
    assert!(contents.contains("ORD-TEST0001"));
    assert!(contents.trim_start().starts_with('{'), "json sink writes one object per line");
    Ok(())
}
