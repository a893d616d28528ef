pub const DEFAULT_GC_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Frames allocated since the last collection before the front-end
    /// triggers another one. Zero turns automatic collection off.
    ///
    /// Collection only runs between top-level forms, so a single long form
    /// or a whole `load` keeps every frame it creates until it returns.
    pub gc_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gc_threshold: DEFAULT_GC_THRESHOLD,
        }
    }
}
