#[cfg(feature = "tracing")]
macro_rules! dw_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "dynwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dw_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dw_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "dynwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dw_warn {
    ($($tt:tt)*) => {};
}
