// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Time a block and log it at debug level under `what`.
#[macro_export]
macro_rules! timed {
    ($what:expr, $body:expr) => {{
        let __t = ::std::time::Instant::now();
        let __out = $body;
        ::tracing::debug!("{} in {:?}", $what, __t.elapsed());
        __out
    }};
}
