use crate::{Result, Error};

use fern::colors::{Color, ColoredLevelConfig};

const TIME_FORMAT: &str = "%_m/%_d/%y %l:%M:%S%P";

/// Colored output goes to stderr; stdout carries the composed message on dry runs.
pub fn init(log_file: Option<&str>) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::BrightBlue)
        .trace(Color::BrightMagenta);

    let mut dispatch = fern::Dispatch::new()
        .level_for("html5ever", log::LevelFilter::Error)
        .chain(fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{} [{}] [{}] {}",
                    chrono::Local::now().format(TIME_FORMAT),
                    colors.color(record.level()),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Warn)
            .level_for("still_here", log::LevelFilter::Debug)
            .chain(std::io::stderr())
        );

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] [{}] {}",
                    chrono::Local::now().format(TIME_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .level_for("still_here", log::LevelFilter::Trace)
            .chain(fern::log_file(path)?)
        );
    }

    dispatch
        .apply()
        .map_err(Error::from)
}
