// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! selector {
    // Parse a static CSS selector, mapping failure into ExtractionError.
    ($css:expr) => {
        ::scraper::Selector::parse($css).map_err(|e| {
            $crate::specs::ExtractionError::Selector {
                css: $css,
                reason: format!("{e:?}"),
            }
        })
    };
}
