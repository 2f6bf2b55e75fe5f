// src/macros.rs

#[macro_export]
macro_rules! s {
    // String shorthand: s!() → empty, s!(x) → String::from(x)
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
