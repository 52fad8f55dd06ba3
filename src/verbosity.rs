// Global verbosity system for probe output control
use std::sync::atomic::{AtomicU8, Ordering};

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        println!("📢 Verbosity level: {} (0=normal, 1=verbose, 2=trace)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

// Level 0: the normal diagnostic narration of each probe step
#[macro_export]
macro_rules! v_out {
    ($($arg:tt)*) => { println!($($arg)*) };
}

// Level 1: request payloads, per-record field listings
#[macro_export]
macro_rules! v_verbose {
    ($($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 1 {
            println!($($arg)*);
        }
    };
}

// Level 2: raw response bodies and other firehose output
#[macro_export]
macro_rules! v_trace {
    ($($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 2 {
            println!($($arg)*);
        }
    };
}

// Always print errors regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { println!($($arg)*) };
}
