use std::{fs::OpenOptions, thread};

use config::Config;

mod clipboard;
mod config;
mod event;
mod message;
mod ui;

fn main() {
    let (config, config_err) = match Config::from_file() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    // log file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .expect("log file open failed");
    log_panics::init();
    let log_level = simplelog::LevelFilter::Info;
    let log_config = simplelog::ConfigBuilder::new().set_time_format_str("%+").build();
    simplelog::WriteLogger::init(log_level, log_config, log_file).expect("log set failed");
    if let Some(e) = config_err {
        log::warn!("config load failed, using defaults: {}", e);
    }

    let (s_main, r_back) = crossbeam_channel::unbounded();
    let (s_back, r_main) = crossbeam_channel::unbounded();
    let s_event = s_back.clone();
    let event_th = thread::spawn(move || {
        if let Err(e) = event::handle(s_event) {
            log::error!("key event thread failed: {}", e);
        }
    });
    let clipboard_th = thread::spawn(move || {
        if let Err(e) = clipboard::handle(s_back, r_back) {
            log::error!("clipboard thread failed: {}", e);
        }
    });
    if let Err(e) = ui::run(config, s_main, r_main) {
        log::error!("tui failed: {}", e);
    }
    event_th.join().ok();
    clipboard_th.join().ok();
}
