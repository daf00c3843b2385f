/// Builds an [`Error::Other`](crate::Error::Other) from a format string.
#[macro_export]
macro_rules! err {
    ($fmt:expr) => {
        $crate::Error::Other(::anyhow::anyhow!($fmt))
    };
    ($fmt:expr, $($arg:tt)+) => {
        $crate::Error::Other(::anyhow::anyhow!($fmt, $($arg)+))
    };
}
