#![allow(unused_macros)]

#[cfg(feature = "tracing")]
macro_rules! sitrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_into_view", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sitrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sidebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_into_view", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sidebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! siwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_into_view", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! siwarn {
    ($($tt:tt)*) => {};
}
