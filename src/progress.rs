// src/progress.rs
/// Lightweight progress reporting for a scrape run. The CLI implements
/// this to narrate; the pipeline stays ignorant of where status lines go.
pub trait Progress {
    /// Called once with the number of candidates entering the run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called on each poll round with resolved/total candidate counts.
    fn tick(&mut self, _resolved: usize, _total: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
