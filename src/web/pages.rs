//! Server-rendered HTML pages.
//!
//! The markup is deliberately minimal; pages share a single layout and
//! every piece of dynamic text is escaped before interpolation.

/// Escape text for safe interpolation into HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page layout.
fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let notice = match flash {
        Some(message) => format!("<p class=\"flash\">{}</p>\n", escape_html(message)),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         {notice}{body}\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        notice = notice,
        body = body,
    )
}

/// Landing page.
pub fn home_page(flash: Option<&str>) -> String {
    layout(
        "Welcome",
        flash,
        "<h1>Welcome</h1>\n\
         <p><a href=\"/login\">Log in</a> or <a href=\"/register\">register</a> \
         to access the member area.</p>",
    )
}

/// Registration form.
pub fn register_page(flash: Option<&str>) -> String {
    layout(
        "Register",
        flash,
        "<h1>Register</h1>\n\
         <form method=\"post\" action=\"/register\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Email <input type=\"text\" name=\"email\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a>.</p>",
    )
}

/// Login form.
pub fn login_page(flash: Option<&str>) -> String {
    layout(
        "Log in",
        flash,
        "<h1>Log in</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email <input type=\"text\" name=\"email\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>No account yet? <a href=\"/register\">Register</a>.</p>",
    )
}

/// Guarded member page, greeting the caller by name.
pub fn secrets_page(name: &str, flash: Option<&str>) -> String {
    let body = format!(
        "<h1>Welcome, {}!</h1>\n\
         <p>You have reached the member area.</p>\n\
         <p><a href=\"/download\">Download the cheat sheet</a></p>\n\
         <p><a href=\"/logout\">Log out</a></p>",
        escape_html(name),
    );
    layout("Secrets", flash, &body)
}

/// 404 page.
pub fn not_found_page() -> String {
    layout("Not found", None, "<h1>Not found</h1>")
}

/// Generic 500 page.
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        None,
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>",
    )
}
