/// Splits a toolkit error message such as
/// `"WEAK_PASSWORD : Password should be at least 6 characters"` into its
/// code and optional detail.
pub(crate) fn split_code(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(':') {
        Some((code, detail)) => {
            let detail = detail.trim();
            (code.trim(), (!detail.is_empty()).then_some(detail))
        }
        None => (raw.trim(), None),
    }
}

/// Renders a toolkit error code as the sentence the mobile SDK reports.
pub(crate) fn describe(code: &str, detail: Option<&str>) -> String {
    let sentence = match code {
        "EMAIL_EXISTS" => "The email address is already in use by another account.",
        "INVALID_PASSWORD" => {
            "The password is invalid or the user does not have a password."
        }
        "INVALID_LOGIN_CREDENTIALS" => {
            "The supplied auth credential is incorrect, malformed or has expired."
        }
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => {
            "There is no user record corresponding to this identifier. The user may have been deleted."
        }
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "MISSING_PASSWORD" => "The password must not be empty.",
        "WEAK_PASSWORD" => {
            return match detail {
                Some(detail) => format!("The given password is too weak. [ {detail} ]"),
                None => "The given password is too weak.".to_string(),
            };
        }
        "USER_DISABLED" => "The user account has been disabled by an administrator.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "We have blocked all requests from this device due to unusual activity. Try again later."
        }
        "OPERATION_NOT_ALLOWED" => "The given sign-in provider is disabled for this project.",
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => {
            "The user's credential is no longer valid. The user must sign in again."
        }
        _ => {
            return match detail {
                Some(detail) => format!("{code}: {detail}"),
                None => code.to_string(),
            };
        }
    };

    sentence.to_string()
}
