// src/macros.rs

/// String shorthand: `s!()` → empty, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-ish pieces into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Bulleted block, one `• item` per line, no trailing newline.
#[macro_export]
macro_rules! bullets {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut s = ::std::string::String::from("• ");
        s.push_str($first);
        $(
            s.push_str("\n• ");
            s.push_str($rest);
        )*
        s
    }};
}
