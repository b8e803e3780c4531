//! End-to-end demo: two producer threads feed one logger, a background
//! worker renders everything to stdout.
//!
//! Run with `cargo run --example engine_log`.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rtlog::{rt_log, DrainWorker, MpscLogger, SequenceCounter};

#[derive(Clone, Copy)]
enum Level {
    Debug,
    Info,
    Warning,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBG",
            Level::Info => "INFO",
            Level::Warning => "WARN",
        }
    }
}

#[derive(Clone, Copy)]
enum Region {
    Audio,
    Network,
}

impl Region {
    fn as_str(self) -> &'static str {
        match self {
            Region::Audio => "AUDIO",
            Region::Network => "NETWK",
        }
    }
}

/// Payload carried next to each message.
#[derive(Clone, Copy)]
struct Tag {
    level: Level,
    region: Region,
}

/// Stand-in for an audio callback: never sleeps, spins out its period.
fn busy_wait(period: Duration) {
    let start = Instant::now();
    while start.elapsed() < period {}
}

fn main() {
    let seq = Arc::new(SequenceCounter::new());
    let logger: Arc<MpscLogger<Tag, 256>> = Arc::new(MpscLogger::new(100, Arc::clone(&seq)));

    let worker = DrainWorker::spawn(
        Arc::clone(&logger),
        |tag: &Tag, seq, text| {
            println!(
                "{{{seq}}} [{}] ({}): {text}",
                tag.level.as_str(),
                tag.region.as_str()
            );
        },
        Duration::from_millis(10),
    );

    // "Realtime" producer: logs from a busy loop, counts its drops
    let audio = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            let mut dropped = 0u64;
            for i in 0..50 {
                let tag = Tag {
                    level: Level::Debug,
                    region: Region::Audio,
                };
                if rt_log!(logger, tag, "block {} rendered", i).is_dropped() {
                    dropped += 1;
                }
                busy_wait(Duration::from_millis(1));
            }
            dropped
        })
    };

    // Ordinary producer: may sleep between messages
    let network = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..20 {
                let tag = Tag {
                    level: if i % 5 == 0 {
                        Level::Warning
                    } else {
                        Level::Info
                    },
                    region: Region::Network,
                };
                let _ = rt_log!(logger, tag, "peer poll {}", i);
                thread::sleep(Duration::from_millis(2));
            }
        })
    };

    let dropped = audio.join().unwrap();
    network.join().unwrap();
    worker.join();

    println!("-- {} records numbered, {} dropped", seq.current(), dropped);
}
