use super::{escape_html, layout};

/// Stateless yes/no gate rendered as its own page. Confirming posts to
/// `action`; cancelling is a plain link back, so nothing happens unless the
/// confirm button is pressed.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub danger: bool,
    pub action: String,
    pub cancel_href: String,
}

impl ConfirmPrompt {
    pub fn new(title: &str, message: &str, action: &str, cancel_href: &str) -> Self {
        ConfirmPrompt {
            title: title.to_string(),
            message: message.to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            danger: false,
            action: action.to_string(),
            cancel_href: cancel_href.to_string(),
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn labels(mut self, confirm: &str, cancel: &str) -> Self {
        self.confirm_label = confirm.to_string();
        self.cancel_label = cancel.to_string();
        self
    }
}

pub fn confirm_page(prompt: &ConfirmPrompt) -> String {
    let (icon_class, icon, confirm_class) = if prompt.danger {
        ("confirm-icon confirm-danger", "!", "btn btn-danger")
    } else {
        ("confirm-icon confirm-default", "?", "btn btn-primary")
    };
    let content = format!(
        "<div class=\"confirm-card\">\
<div class=\"{icon_class}\">{icon}</div>\
<h3>{title}</h3>\
<p>{message}</p>\
<div class=\"confirm-actions\">\
<a class=\"btn btn-outline\" href=\"{cancel_href}\">{cancel_label}</a>\
<form method=\"post\" action=\"{action}\">\
<button type=\"submit\" class=\"{confirm_class}\">{confirm_label}</button>\
</form>\
</div></div>",
        title = escape_html(&prompt.title),
        message = escape_html(&prompt.message),
        cancel_href = escape_html(&prompt.cancel_href),
        cancel_label = escape_html(&prompt.cancel_label),
        action = escape_html(&prompt.action),
        confirm_label = escape_html(&prompt.confirm_label),
    );
    layout::bare_page(&prompt.title, None, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_prompt_posts_only_through_the_confirm_button() {
        let prompt = ConfirmPrompt::new(
            "Delete Employee",
            "Are you sure you want to delete Jane Smith? This action cannot be undone.",
            "/dashboard/delete/EMP-0002",
            "/dashboard",
        )
        .danger()
        .labels("Delete", "Cancel");

        let html = confirm_page(&prompt);
        assert!(html.contains("Delete Employee"));
        assert!(html.contains("Are you sure you want to delete Jane Smith?"));
        assert!(html.contains("action=\"/dashboard/delete/EMP-0002\""));
        assert!(html.contains("btn btn-danger"));
        assert!(html.contains(">Delete</button>"));
        assert!(html.contains("href=\"/dashboard\">Cancel</a>"));
        // The cancel path is a link, not a second form.
        assert_eq!(html.matches("<form").count(), 1);
    }
}
