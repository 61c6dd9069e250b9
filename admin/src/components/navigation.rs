//! Top navigation bar with the active section highlighted.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/documents", "Documents"),
    ("/chunks", "Chunks"),
    ("/exams", "Exams"),
    ("/query", "Query"),
];

/// Root matches only itself; sections also match their sub-paths.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="admin-nav">
            <span class="admin-nav__brand">"ESLCE Admin"</span>
            <ul class="admin-nav__links">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="admin-nav__link"
                                    class:admin-nav__link--active=move || is_active(&pathname.get(), href)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
