use rloader::{
    AsyncLoadCoordinator, BoxedWork, LoadError, LoadState, LoaderConfig, ProgressSink,
    SimulatedLoad, TaskSpawner, ThreadSpawner,
};
use anyhow::Result;
use std::fs;
use std::env;
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

fn short_config(duration_ms: u64) -> LoaderConfig {
    LoaderConfig {
        duration_ms,
        update_interval_ms: 1,
        ..LoaderConfig::default()
    }
}

/// Polls like a render loop until `cond` holds, failing after five seconds.
fn run_frames_until(loader: &mut AsyncLoadCoordinator, mut cond: impl FnMut(&AsyncLoadCoordinator) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !cond(loader) {
        assert!(Instant::now() < deadline, "timed out after state {:?}", loader.state());
        loader.poll_tick();
        thread::sleep(Duration::from_millis(1));
    }
}

fn reset_once(loader: &mut AsyncLoadCoordinator) {
    assert!(loader.request_reset(), "reset from {:?} did not apply", loader.state());
}

#[test]
fn test_full_load_cycle_with_simulated_job() -> Result<()> {
    let mut loader = AsyncLoadCoordinator::with_config(short_config(60));
    assert_eq!(loader.state(), LoadState::Waiting);
    assert_eq!(loader.progress(), 0);

    loader.request_start()?;
    assert_eq!(loader.state(), LoadState::Loading);

    let mut last_progress = 0;
    run_frames_until(&mut loader, |l| {
        let snap = l.snapshot();
        assert!(snap.progress >= last_progress, "progress went backwards");
        last_progress = snap.progress;
        snap.state == LoadState::Finished
    });

    assert_eq!(loader.progress(), 100);
    assert!(loader.is_loaded());
    assert_eq!(loader.frames_counter(), 0);

    reset_once(&mut loader);
    let snap = loader.snapshot();
    assert_eq!(snap.state, LoadState::Waiting);
    assert_eq!(snap.progress, 0);
    assert!(!loader.is_loaded());

    Ok(())
}

#[test]
fn test_many_cycles() -> Result<()> {
    let mut loader = AsyncLoadCoordinator::with_config(short_config(5));

    for _ in 0..5 {
        loader.handle_confirm()?;
        run_frames_until(&mut loader, |l| l.state() == LoadState::Finished);
        reset_once(&mut loader);
        assert_eq!(loader.state(), LoadState::Waiting);
        assert_eq!(loader.progress(), 0);
    }

    Ok(())
}

#[test]
fn test_zero_duration_load_finishes() -> Result<()> {
    let mut loader = AsyncLoadCoordinator::with_config(short_config(0));
    loader.request_start()?;
    run_frames_until(&mut loader, |l| l.state() == LoadState::Finished);
    assert_eq!(loader.progress(), 100);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Start,
    Tick,
    Reset,
    Snapshot,
}

/// Whether `op` may move the coordinator from `before` to `after`.
fn is_legal_step(op: Op, before: LoadState, after: LoadState) -> bool {
    before == after
        || matches!(
            (op, before, after),
            (Op::Start, LoadState::Waiting, LoadState::Loading)
                | (Op::Tick, LoadState::Loading, LoadState::Finished)
                | (Op::Reset, LoadState::Finished, LoadState::Waiting)
        )
}

#[test]
fn test_state_only_moves_along_cycle_edges() -> Result<()> {
    let mut loader = AsyncLoadCoordinator::with_config(short_config(15));
    let ops = [Op::Start, Op::Tick, Op::Reset, Op::Snapshot];
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut completed_cycles = 0;
    let mut frame = 0usize;

    // Every operation runs every frame, in a rotating order
    while completed_cycles < 3 {
        assert!(Instant::now() < deadline, "cycles did not complete");

        for k in 0..ops.len() {
            let op = ops[(frame + k) % ops.len()];
            let before = loader.state();
            match op {
                Op::Start => loader.request_start()?,
                Op::Tick => loader.poll_tick(),
                Op::Reset => {
                    loader.request_reset();
                }
                Op::Snapshot => {
                    let snap = loader.snapshot();
                    assert_eq!(snap.state, before);
                }
            }
            let after = loader.state();

            assert!(is_legal_step(op, before, after), "illegal {:?}: {:?} -> {:?}", op, before, after);

            if before != LoadState::Waiting && after == LoadState::Waiting {
                assert_eq!(loader.progress(), 0);
                assert!(!loader.is_loaded());
                completed_cycles += 1;
            }
        }

        frame += 1;
        thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}

#[test]
fn test_loading_never_jumps_back_to_waiting() {
    assert!(!is_legal_step(Op::Reset, LoadState::Loading, LoadState::Waiting));
    assert!(!is_legal_step(Op::Tick, LoadState::Waiting, LoadState::Finished));
    assert!(!is_legal_step(Op::Start, LoadState::Finished, LoadState::Loading));
    assert!(is_legal_step(Op::Snapshot, LoadState::Loading, LoadState::Loading));
}

struct RefusingSpawner;

impl TaskSpawner for RefusingSpawner {
    fn spawn(&self, _name: &str, _work: BoxedWork) -> io::Result<JoinHandle<()>> {
        Err(io::Error::new(io::ErrorKind::Other, "thread limit reached"))
    }
}

#[test]
fn test_spawn_failure_is_reported_and_recoverable() {
    let mut loader = AsyncLoadCoordinator::with_parts(
        LoaderConfig::default(),
        RefusingSpawner,
        SimulatedLoad::default(),
    );

    let err = loader.request_start().unwrap_err();
    assert!(matches!(err, LoadError::TaskSpawnFailure { .. }));
    assert_eq!(loader.state(), LoadState::Waiting);

    // Polling and resetting stay harmless after the failure
    loader.poll_tick();
    assert!(!loader.request_reset());
    assert_eq!(loader.state(), LoadState::Waiting);
    assert_eq!(loader.progress(), 0);
}

#[test]
fn test_custom_job_reports_through_sink() -> Result<()> {
    let job = |sink: &ProgressSink| {
        for p in [10, 20, 5, 60] {
            sink.report(p);
        }
        assert_eq!(sink.current(), 60);
        sink.finish();
    };
    let mut loader = AsyncLoadCoordinator::with_parts(LoaderConfig::default(), ThreadSpawner, job);

    loader.request_start()?;
    let deadline = Instant::now() + Duration::from_secs(5);
    while loader.state() != LoadState::Finished {
        assert!(Instant::now() < deadline);
        loader.poll_tick();
        thread::sleep(Duration::from_millis(1));
    }
    assert_eq!(loader.progress(), 100);

    Ok(())
}

#[test]
fn test_loading_thread_uses_configured_name() -> Result<()> {
    let config = LoaderConfig {
        thread_name: "asset-loader".to_string(),
        ..LoaderConfig::default()
    };
    let job = |sink: &ProgressSink| {
        assert_eq!(thread::current().name(), Some("asset-loader"));
        sink.finish();
    };
    let mut loader = AsyncLoadCoordinator::with_parts(config, ThreadSpawner, job);

    loader.request_start()?;
    let deadline = Instant::now() + Duration::from_secs(5);
    while loader.state() != LoadState::Finished {
        assert!(Instant::now() < deadline, "job never finished; thread name mismatch?");
        loader.poll_tick();
        thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}

#[test]
fn test_config_file_drives_coordinator() -> Result<()> {
    let config_file = env::temp_dir().join("rloader_test_config.json");
    let _ = fs::remove_file(&config_file);

    fs::write(&config_file, r#"{ "duration_ms": 10, "update_interval_ms": 1, "blink_period_frames": 4 }"#)?;

    let config = LoaderConfig::from_file(&config_file)?;
    assert_eq!(config.duration_ms, 10);
    assert_eq!(config.blink_period(), 4);
    assert_eq!(config.thread_name, "rloader-load");

    let mut loader = AsyncLoadCoordinator::with_config(config);
    loader.request_start()?;
    run_frames_until(&mut loader, |l| l.state() == LoadState::Finished);

    let _ = fs::remove_file(&config_file);
    Ok(())
}
