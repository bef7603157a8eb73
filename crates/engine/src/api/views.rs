//! Server-rendered pages for the Home controller.

use userlayer_domain::UserIdentity;

const SITE_TITLE: &str = "userlayer";

/// Data shown on the error page.
#[derive(Debug, Clone, Default)]
pub struct ErrorViewModel {
    pub request_id: Option<String>,
}

impl ErrorViewModel {
    pub fn show_request_id(&self) -> bool {
        self.request_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

pub fn index(user: &UserIdentity) -> String {
    let greeting = if user.is_authenticated() {
        format!("Hello, {}.", escape_html(&user.to_string()))
    } else {
        "Hello, anonymous visitor.".to_string()
    };

    layout(
        "Home Page",
        &format!(
            r#"<div class="text-center">
    <h1 class="display-4">Welcome</h1>
    <p>{greeting}</p>
</div>"#
        ),
    )
}

pub fn privacy() -> String {
    layout(
        "Privacy Policy",
        r#"<h1>Privacy Policy</h1>
<p>Use this page to detail your site's privacy policy.</p>"#,
    )
}

pub fn error(model: &ErrorViewModel) -> String {
    let request_id = match (&model.request_id, model.show_request_id()) {
        (Some(id), true) => format!(
            "<p><strong>Request ID:</strong> <code>{}</code></p>\n",
            escape_html(id)
        ),
        _ => String::new(),
    };

    layout(
        "Error",
        &format!(
            r#"<h1 class="text-danger">Error.</h1>
<h2 class="text-danger">An error occurred while processing your request.</h2>
{request_id}"#
        ),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>{title} - {SITE_TITLE}</title>
</head>
<body>
    <nav><a href="/">Home</a> | <a href="/Home/Privacy">Privacy</a></nav>
    <main role="main">
{body}
    </main>
</body>
</html>
"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use userlayer_domain::UserName;

    #[test]
    fn index_greets_named_user_escaped() {
        let user = UserIdentity::authenticated(
            "u-1",
            Some(UserName::new("<script>alert('x')</script>").unwrap()),
        )
        .unwrap();

        let html = index(&user);
        assert!(html.contains("Hello, &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;."));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn index_for_anonymous() {
        let html = index(&UserIdentity::anonymous());
        assert!(html.contains("Hello, anonymous visitor."));
        assert!(html.contains("<title>Home Page - userlayer</title>"));
    }

    #[test]
    fn error_hides_missing_request_id() {
        let html = error(&ErrorViewModel::default());
        assert!(!html.contains("Request ID"));

        let html = error(&ErrorViewModel {
            request_id: Some(String::new()),
        });
        assert!(!html.contains("Request ID"));
    }

    #[test]
    fn error_shows_request_id() {
        let model = ErrorViewModel {
            request_id: Some("abc-123".to_string()),
        };
        assert!(model.show_request_id());
        assert!(error(&model).contains("<code>abc-123</code>"));
    }
}
