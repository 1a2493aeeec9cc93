//! Success / error notice banner

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// a user-facing outcome message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let class = match notice.kind {
        NoticeKind::Success => "result success",
        NoticeKind::Error => "result error",
    };

    view! {
        <div class=class>
            <div class="result-value">{notice.text}</div>
        </div>
    }
}
