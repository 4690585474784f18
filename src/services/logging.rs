use crate::domain::constants::LOG_ENV;
use log::LevelFilter;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn level_from_env(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

pub fn resolve_level(verbose: u8, env: Option<&str>) -> LevelFilter {
    env.and_then(level_from_env)
        .unwrap_or_else(|| level_for(verbose))
}

/// Logs go to stderr; stdout is reserved for command output.
pub fn setup_logging(verbose: u8) -> anyhow::Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(verbose, env.as_deref());
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
