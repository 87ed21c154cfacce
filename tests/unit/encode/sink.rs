use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(10, 1).unwrap(),
        frame_count: 2,
    }
}

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![v, v, v, 255, v, v, v, 255],
    }
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    assert!(sink.is_finished());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(sink.frames()[1].1, frame(2));
}

#[test]
fn begin_resets_in_memory_sink() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn check_frame_rejects_wrong_size() {
    let bad = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0; 4],
    };
    assert!(matches!(cfg().check_frame(&bad), Err(LoomError::Encode(_))));
    let short = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0; 4],
    };
    assert!(cfg().check_frame(&short).is_err());
    assert!(cfg().check_frame(&frame(0)).is_ok());
}

struct RejectingSink;

impl FrameSink for RejectingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> LoomResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> LoomResult<()> {
        Err(LoomError::encode("disk full"))
    }

    fn end(&mut self) -> LoomResult<()> {
        Ok(())
    }
}

#[test]
fn multi_sink_forwards_and_propagates_errors() {
    let mut ok = MultiSink::new()
        .with(Box::new(InMemorySink::new()))
        .with(Box::new(InMemorySink::new()));
    assert_eq!(ok.len(), 2);
    ok.begin(cfg()).unwrap();
    ok.push_frame(FrameIndex(0), &frame(3)).unwrap();
    ok.end().unwrap();

    let mut failing = MultiSink::new()
        .with(Box::new(InMemorySink::new()))
        .with(Box::new(RejectingSink));
    failing.begin(cfg()).unwrap();
    let err = failing.push_frame(FrameIndex(0), &frame(3)).unwrap_err();
    assert!(err.to_string().contains("disk full"));
    assert!(MultiSink::new().is_empty());
}
