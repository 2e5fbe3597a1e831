use std::error::Error;

/// Renders an error followed by each of its sources, outermost first.
///
/// reqwest's own `Display` stops at "error sending request", which hides
/// whether the failure was DNS, TLS or the connection itself.
pub(crate) fn render(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }

    rendered
}
