use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::WLogConfig;

/// Initializes the global logger from the app configuration.
///
/// Everything goes to a single stderr console appender. The root level
/// defaults to `info` and individual targets may be overridden.
pub fn init(config: &WLogConfig) -> anyhow::Result<()> {
    let encoder = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {h({l:>5})} {t} - {m}{n}");
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(encoder))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));

    for (target, level) in &config.targets {
        builder = builder.logger(Logger::builder().build(target.clone(), *level));
    }

    let root = Root::builder()
        .appender("stderr")
        .build(config.default.unwrap_or(log::LevelFilter::Info));

    log4rs::init_config(builder.build(root)?)?;
    Ok(())
}
