use std::io::Write;

use chrono::Local;
use colored::Colorize;
use env_logger::{Builder, Env};
use log::Level;

/// Installs the global logger: `RUST_LOG` controls filtering, `info` when
/// unset, colored level tags and local timestamps.
pub fn init() {
    let env = Env::default().default_filter_or("info");

    Builder::from_env(env)
        .format(|buf, record| {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let level = match record.level() {
                Level::Error => "ERROR".red().bold(),
                Level::Warn => " WARN".yellow(),
                Level::Info => " INFO".green(),
                Level::Debug => "DEBUG".blue(),
                Level::Trace => "TRACE".magenta(),
            };

            writeln!(
                buf,
                "[{} {} {}] {}",
                timestamp,
                level,
                record.target(),
                record.args()
            )
        })
        .init();
}
