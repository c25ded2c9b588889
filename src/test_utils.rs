use std::{
    fmt::Debug,
    io,
    sync::{Arc, Mutex},
};

use proptest::{prelude::*, test_runner::TestCaseResult};
use tracing::Level;

use crate::sink::Sink;

/// Checks that a sink behaves the same through every way of feeding it.
///
/// - `iter_factory` builds a fresh source for every run.
/// - `sink_factory` builds a fresh sink for every run.
/// - `should_break_pred` tells whether the sink must have signaled a stop
///   after being fed the source.
/// - `iter_way` computes the expected output with plain iterator methods.
///
/// It also asserts that `collect()`, `collect_many()` and
/// `collect_then_finish()` leave the source with the same number of items.
pub fn proptest_sink<I, S>(
    mut iter_factory: impl FnMut() -> I,
    mut sink_factory: impl FnMut() -> S,
    should_break_pred: impl FnOnce(I) -> bool,
    iter_way: impl FnOnce(I) -> S::Output,
) -> TestCaseResult
where
    I: Iterator,
    S: Sink<I::Item>,
    S::Output: PartialEq + Debug,
{
    let should_break = should_break_pred(iter_factory());
    let expected = iter_way(iter_factory());

    // `collect()`
    let mut sink = sink_factory();
    let mut iter = iter_factory();
    // Simulate `break_hint()` being checked before looping,
    // which is the intended use.
    let has_stopped = sink.break_hint().is_break()
        || iter.try_for_each(|item| sink.collect(item)).is_break();
    prop_assert_eq!(has_stopped, should_break, "`collect()` didn't break correctly");
    prop_assert_eq!(&sink.finish(), &expected, "`collect()`'s result mismatched");
    let collect_rem = iter.count();

    // `collect_many()`
    // No `break_hint()` here: the method must guard itself.
    let mut sink = sink_factory();
    let mut iter = iter_factory();
    let has_stopped = sink.collect_many(&mut iter).is_break();
    prop_assert_eq!(
        has_stopped,
        should_break,
        "`collect_many()` didn't break correctly"
    );
    prop_assert_eq!(
        &sink.finish(),
        &expected,
        "`collect_many()`'s result mismatched"
    );
    let collect_many_rem = iter.count();

    // `collect_then_finish()`
    let sink = sink_factory();
    let mut iter = iter_factory();
    prop_assert_eq!(
        &sink.collect_then_finish(&mut iter),
        &expected,
        "`collect_then_finish()`'s result mismatched"
    );
    let collect_then_finish_rem = iter.count();

    prop_assert!(
        collect_rem == collect_many_rem && collect_many_rem == collect_then_finish_rem,
        "collect methods consume the source inconsistently: \
         collect = {collect_rem}, collect_many = {collect_many_rem}, \
         collect_then_finish = {collect_then_finish_rem}",
    );

    Ok(())
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a `TRACE`-level subscriber on this thread and returns
/// everything it logged, one line per event.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
