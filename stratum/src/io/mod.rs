use crate::EPOCH;
use crate::entities::Superitem;
use anyhow::{Context, Result};
use log::{LevelFilter, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

///External (serializable) representations of the superitem table.
pub mod ext_repr;

mod import;

/// Imports a superitem table from its external representation.
pub use import::import;

/// Reads a superitem table from a JSON file.
pub fn read_superitems(path: &Path) -> Result<Vec<Superitem>> {
    let file = File::open(path)
        .with_context(|| format!("could not open superitem file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let ext_superitems: Vec<ext_repr::ExtSuperitem> = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse superitem file: {}", path.display()))?;
    import(&ext_superitems)
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!(
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
    Ok(())
}
