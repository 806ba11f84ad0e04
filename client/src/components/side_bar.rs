//! Fixed left navigation with the product brand and view links.

#[cfg(test)]
#[path = "side_bar_test.rs"]
mod side_bar_test;

use leptos::prelude::*;

/// Product name shown at the top of the sidebar.
pub const BRAND: &str = "Borç Takip Sistemi";

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Mesaj Gönder", href: "/send-message" },
    NavLink { label: "Cevap Görüntüle", href: "/view-responses" },
];

/// Static navigation; no active-route highlighting.
#[component]
pub fn SideBar() -> impl IntoView {
    let links = NAV_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class="side-bar__link">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="side-bar">
            <div class="side-bar__brand">
                <span class="side-bar__brand-name">{BRAND}</span>
            </div>
            <div class="side-bar__links">{links}</div>
        </nav>
    }
}
