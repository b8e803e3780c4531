//! Logger pipeline tests: ordering, round-trip, truncation, overflow.

use std::sync::Arc;

use rtlog::{rt_log, SequenceCounter, SpscLogger, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warning,
    Critical,
}

fn new_logger<const MAX_MESSAGE_BYTES: usize>(
    capacity: usize,
) -> SpscLogger<Level, MAX_MESSAGE_BYTES> {
    SpscLogger::new(capacity, Arc::new(SequenceCounter::new()))
}

#[test]
fn test_drain_yields_call_order_with_contiguous_sequences() {
    let logger = new_logger::<64>(32);

    for i in 0..10 {
        let status = rt_log!(logger, Level::Info, "event {}", i);
        assert_eq!(status, Status::Success);
    }

    let mut drained = vec![];
    let n = logger.drain(|_, seq, text| drained.push((seq, text.to_string())));

    assert_eq!(n, 10);
    for (i, (seq, text)) in drained.iter().enumerate() {
        assert_eq!(*seq, i as u64 + 1);
        assert_eq!(text, &format!("event {}", i));
    }
}

#[test]
fn test_round_trip_matches_standalone_format() {
    let logger = new_logger::<128>(8);

    let status = rt_log!(
        logger,
        Level::Debug,
        "sample {} at {:.2} ms ({:#06x})",
        17,
        3.5,
        0xbeef
    );
    assert_eq!(status, Status::Success);

    let expected = format!("sample {} at {:.2} ms ({:#06x})", 17, 3.5, 0xbeef);
    logger.drain(|_, _, text| assert_eq!(text, expected));
}

#[test]
fn test_empty_drain_is_idempotent() {
    let logger = new_logger::<64>(8);

    for _ in 0..3 {
        let n = logger.drain(|_, _, _| panic!("sink must not be invoked"));
        assert_eq!(n, 0);
    }

    // Still idempotent after the queue has been used and emptied
    let _ = rt_log!(logger, Level::Info, "one");
    assert_eq!(logger.drain(|_, _, _| {}), 1);
    assert_eq!(logger.drain(|_, _, _| panic!("sink must not be invoked")), 0);
}

#[test]
fn test_truncation_boundary() {
    // 16-byte buffer: 15 content bytes + terminator
    let logger = new_logger::<16>(8);

    let status = rt_log!(logger, Level::Info, "123456789012345");
    assert_eq!(status, Status::Success);

    let status = rt_log!(logger, Level::Info, "1234567890123456");
    assert_eq!(status, Status::MessageTruncated);

    let mut drained = vec![];
    logger.drain(|_, _, text| drained.push(text.to_string()));

    assert_eq!(drained[0], "123456789012345");
    // One byte over: delivered as the capacity-1 prefix
    assert_eq!(drained[1], "123456789012345");
}

#[test]
fn test_overflow_boundary_returns_queue_full() {
    let logger = new_logger::<64>(4);

    for _ in 0..4 {
        assert_eq!(rt_log!(logger, Level::Info, "fits"), Status::Success);
    }

    // Queue exactly full of unconsumed records: next call must not block
    assert_eq!(rt_log!(logger, Level::Info, "dropped"), Status::QueueFull);

    assert_eq!(logger.drain(|_, _, _| {}), 4);
}

#[test]
fn test_dropped_record_leaves_sequence_gap() {
    let logger = new_logger::<64>(2);

    assert_eq!(rt_log!(logger, Level::Info, "a"), Status::Success);
    assert_eq!(rt_log!(logger, Level::Info, "b"), Status::Success);
    // Dropped, but its sequence number is consumed
    assert_eq!(rt_log!(logger, Level::Info, "c"), Status::QueueFull);

    let mut seqs = vec![];
    logger.drain(|_, seq, _| seqs.push(seq));
    assert_eq!(seqs, vec![1, 2]);

    assert_eq!(rt_log!(logger, Level::Info, "d"), Status::Success);
    logger.drain(|_, seq, _| seqs.push(seq));

    // The gap at 3 is the drop marker
    assert_eq!(seqs, vec![1, 2, 4]);
}

#[test]
fn test_payload_travels_with_record() {
    let logger = new_logger::<64>(8);

    let _ = rt_log!(logger, Level::Critical, "engine stall");
    let _ = rt_log!(logger, Level::Warning, "queue depth rising");
    let _ = rt_log!(logger, Level::Debug, "probe");

    let mut levels = vec![];
    logger.drain(|level, _, _| levels.push(*level));
    assert_eq!(levels, vec![Level::Critical, Level::Warning, Level::Debug]);
}

#[test]
fn test_end_to_end_hello() {
    let logger: SpscLogger<Level, 256> =
        SpscLogger::new(100, Arc::new(SequenceCounter::new()));

    for _ in 0..4 {
        let status = rt_log!(logger, Level::Debug, "Hello, {}!", 42);
        assert_eq!(status, Status::Success);
    }

    let mut drained = vec![];
    let n = logger.drain(|level, seq, text| {
        assert_eq!(*level, Level::Debug);
        drained.push((seq, text.to_string()));
    });

    assert_eq!(n, 4);
    assert_eq!(
        drained,
        vec![
            (1, "Hello, 42!".to_string()),
            (2, "Hello, 42!".to_string()),
            (3, "Hello, 42!".to_string()),
            (4, "Hello, 42!".to_string()),
        ]
    );
}
