//! Logging shims
//!
//! Forward to `defmt` when the feature is enabled. Otherwise the
//! arguments are borrowed and dropped, so host builds need no global
//! logger and log-only bindings still count as used.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_arguments() {
        let round = 3u32;
        let small_blind = 50u32;
        info!("Round {} small blind {}", round, small_blind);
        debug!("Round {}", round,);
        warn!("No arguments");
        assert_eq!(round + small_blind, 53);
    }
}
