use std::process;

use chrono::Datelike;
use log::{error, info};
use rand::thread_rng;

use still_here::{
    Config,
    Credentials,
    Error,
    PipelineError,
    Print,
    Publisher,
    Result,
    Twitter,
    fetch,
};

fn run(config: &Config) -> Result<()> {
    let current_year = chrono::Local::now().year();
    let client = fetch::client(&config.user_agent())?;

    let mut publisher: Box<dyn Publisher> = if config.dry_run {
        Box::new(Print::stdout())
    } else {
        Box::new(Twitter::new(client.clone(), Credentials::load()?, thread_rng()))
    };

    still_here::run(&client, &config.source_url, current_year, publisher.as_mut(), &mut thread_rng())
        .map_err(Error::from)
}

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("loading config: {}", e);
            process::exit(1);
        },
    };

    if let Err(e) = still_here::log::init(config.log_file.as_ref().map(String::as_str)) {
        eprintln!("initializing logging: {}", e);
        process::exit(1);
    }

    info!("starting (source: {}, dry run: {})", config.source_url, config.dry_run);

    match run(&config) {
        Ok(()) => info!("done"),

        Err(e) => match e.downcast_ref::<PipelineError>() {
            Some(pe) if pe.is_clean_exit() => {
                info!("nothing to post this time: {}", pe);
            },
            _ => {
                error!("error encountered running bot: {:?}", e);
                process::exit(1);
            },
        },
    }
}
