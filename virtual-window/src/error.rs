/// Configuration errors reported by the `try_new`/`validate` entry points.
///
/// The infallible constructors never return these: they clamp the offending value instead and
/// log a warning (with `feature = "tracing"`).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    #[error("invalid geometry: `{field}` = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
    #[error("invalid end-reached threshold {value}: expected a finite value in (0, 1]")]
    InvalidThreshold { value: f64 },
}
