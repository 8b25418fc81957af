use log::{debug, error, info, warn, Level};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

const MAX_CHARS: usize = 400;
const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static CONFIGURED_LEVEL: AtomicU32 = AtomicU32::new(2); // LogLevel::Warn

#[derive(Clone, Debug)]
pub enum LogLevel {
    None,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            "none" => LogLevel::None,
            _ => DEFAULT_LOG_LEVEL,
        }
    }
}

impl LogLevel {
    fn to_third_party_level(&self) -> Option<Level> {
        match self {
            LogLevel::Debug => Some(Level::Debug),
            LogLevel::Info => Some(Level::Info),
            LogLevel::Warn => Some(Level::Warn),
            LogLevel::Error => Some(Level::Error),
            LogLevel::None => None,
        }
    }

    fn to_number(&self) -> u32 {
        match self {
            LogLevel::Debug => 4,
            LogLevel::Info => 3,
            LogLevel::Warn => 2,
            LogLevel::Error => 1,
            LogLevel::None => 0,
        }
    }
}

pub fn initialize_output_logger(level: &Option<LogLevel>) {
    let was_initialized = INITIALIZED.swap(true, Ordering::SeqCst);
    if was_initialized {
        return;
    }

    let level = level.as_ref().unwrap_or(&DEFAULT_LOG_LEVEL).clone();
    CONFIGURED_LEVEL.store(level.to_number(), Ordering::SeqCst);

    let final_level = match level.to_third_party_level() {
        Some(level) => level,
        None => return,
    };

    match simple_logger::init_with_level(final_level) {
        Ok(()) => {}
        Err(_) => {
            // A logger is already installed. Keep it, but honor our level.
            log::set_max_level(final_level.to_level_filter());
        }
    }
}

pub fn log_message(tag: &str, level: LogLevel, msg: String) {
    let truncated_msg = truncate_message(msg);

    if let Some(level) = level.to_third_party_level() {
        let mut target = String::from("Freeproxy::");
        target += tag;

        match level {
            Level::Debug => debug!(target: target.as_str(), "{}", truncated_msg),
            Level::Info => info!(target: target.as_str(), "{}", truncated_msg),
            Level::Warn => warn!(target: target.as_str(), "{}", truncated_msg),
            Level::Error => error!(target: target.as_str(), "{}", truncated_msg),
            _ => {}
        };
    }
}

pub fn has_valid_log_level(level: &LogLevel) -> bool {
    level.to_number() <= CONFIGURED_LEVEL.load(Ordering::SeqCst)
}

fn truncate_message(msg: String) -> String {
    if msg.chars().count() <= MAX_CHARS {
        return msg;
    }

    let visible_chars = MAX_CHARS.saturating_sub(TRUNCATED_SUFFIX.len());
    format!(
        "{}{}",
        msg.chars().take(visible_chars).collect::<String>(),
        TRUNCATED_SUFFIX
    )
}

#[macro_export]
macro_rules! log_d {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Debug;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_i {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Info;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_w {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Warn;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_e {
  ($tag:expr, $($arg:tt)*) => {
        {
            let level = $crate::output_logger::LogLevel::Error;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}
