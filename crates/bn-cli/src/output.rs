//! Terminal rendering of users and session state.

use bn_core::User;

use std::path::Path;

pub(crate) fn registered(user: &User) -> String {
    format!("Registered {} <{}>", user.display_name, user.email)
}

pub(crate) fn logged_in(user: &User) -> String {
    format!("Logged in as {} <{}>", user.display_name, user.email)
}

pub(crate) fn user_details(user: &User) -> String {
    let mut lines = vec![
        format!("id:    {}", user.id),
        format!("name:  {}", user.display_name),
        format!("email: {}", user.email),
    ];
    if user.is_admin {
        lines.push("role:  admin".to_string());
    }
    lines.join("\n")
}

pub(crate) fn status(user: Option<&User>, store_dir: &Path) -> String {
    let session = match user {
        Some(user) => format!("{} <{}>", user.display_name, user.email),
        None => "none".to_string(),
    };

    format!(
        "session: {session}\nstore:   {}",
        store_dir.display()
    )
}
