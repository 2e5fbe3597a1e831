/// Default user-facing text for an HTTP status when the body carries no message.
pub fn status_message(status: u16) -> String {
    let message = match status {
        400 => "Invalid request. Please check your input and try again.",
        401 => "Unauthorized. Please log in again.",
        404 => "Resource not found.",
        409 => "Conflict. This account or resource already exists.",
        422 => "Validation error. Please check the entered details.",
        500 => "Server error. Please try again later.",
        502 => "Server is temporarily unavailable (bad gateway). Please try again later.",
        503 => "Service unavailable. Please try again later.",
        _ => return format!("Something went wrong (HTTP {status}). Please try again."),
    };

    message.to_string()
}
