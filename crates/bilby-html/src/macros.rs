//! The `html!` convenience macro.

/// Build an [`HTML`](crate::HTML) document from alternating literal
/// fragments and parenthesized value expressions.
///
/// Each string literal appends verbatim and advances the context
/// classifier; each `(expression)` renders under the context in effect at
/// that point, exactly as [`HTMLBuilder::value`](crate::HTMLBuilder::value)
/// does.
///
/// ```
/// use bilby_html::html;
///
/// let name = "<world>";
/// let page = html!("<h1>Hello, " (name) "!</h1>");
/// assert_eq!(page.as_str(), "<h1>Hello, &lt;world&gt;!</h1>");
/// ```
#[macro_export]
macro_rules! html {
    () => {
        $crate::HTML::new("")
    };
    ($($piece:tt)+) => {{
        let mut builder = $crate::HTMLBuilder::new();
        $crate::html_pieces!(builder, $($piece)+);
        builder.finish()
    }};
}

/// Implementation detail of [`html!`]: appends one piece at a time.
#[doc(hidden)]
#[macro_export]
macro_rules! html_pieces {
    ($builder:ident,) => {};
    ($builder:ident, $literal:literal $($rest:tt)*) => {
        $builder.literal($literal);
        $crate::html_pieces!($builder, $($rest)*);
    };
    ($builder:ident, ($value:expr) $($rest:tt)*) => {
        $builder.value($value);
        $crate::html_pieces!($builder, $($rest)*);
    };
}
