// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// `say!(console, "fmt", args..)` formats a line and hands it to a `Console`.
#[macro_export]
macro_rules! say {
    ($console:expr, $($arg:tt)*) => {
        $crate::console::Console::say(&mut *$console, &::std::format!($($arg)*))
    };
}
