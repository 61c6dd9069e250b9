//! Fixed bottom navigation with the ESLCE popup menu.

#[cfg(test)]
#[path = "bottom_nav_test.rs"]
mod bottom_nav_test;

use curriculum::CoursePreference;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::storage;

pub const SIMULATOR_HREF: &str = "/eslce-simulator";

/// Destinations of the plain links, in display order around the ESLCE button.
pub const LEADING: [(&str, &str, &str); 2] = [("/", "Home", "🏠"), ("/search", "Search", "🔍")];
pub const TRAILING: [(&str, &str, &str); 2] = [("/chat", "Chat", "💬"), ("/profile", "Profile", "👤")];

/// Root matches the catalog pages reached from it; other items match their sub-paths.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname.is_empty()
            || pathname == "/"
            || pathname.starts_with("/unit/")
            || pathname.starts_with("/topic/");
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
fn NavLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;
    let preference = expect_context::<RwSignal<CoursePreference>>();

    // Home starts over at course selection.
    let on_click = move |_| {
        if href == "/" {
            preference.update(CoursePreference::clear);
            storage::save_preference(&preference.get_untracked());
        }
    };

    view! {
        <a
            href=href
            class="bottom-nav__item"
            class:bottom-nav__item--active=move || is_active(&pathname.get(), href)
            on:click=on_click
        >
            <span class="bottom-nav__icon">{icon}</span>
            <span class="bottom-nav__label">{label}</span>
        </a>
    }
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let popup_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    view! {
        <nav class="bottom-nav">
            {LEADING.into_iter().map(|(href, label, icon)| view! { <NavLink href=href label=label icon=icon/> }).collect_view()}
            <div class="bottom-nav__eslce">
                <button
                    class="bottom-nav__item bottom-nav__item--eslce"
                    class:bottom-nav__item--active=move || is_active(&pathname.get(), SIMULATOR_HREF)
                    on:click=move |_| popup_open.update(|open| *open = !*open)
                >
                    <span class="bottom-nav__icon">"📝"</span>
                    <span class="bottom-nav__label">"ESLCE"</span>
                </button>
                <Show when=move || popup_open.get()>
                    <div class="bottom-nav__popup">
                        <a href=SIMULATOR_HREF class="bottom-nav__popup-link" on:click=move |_| popup_open.set(false)>
                            "Full Exam Simulator"
                        </a>
                    </div>
                </Show>
            </div>
            {TRAILING.into_iter().map(|(href, label, icon)| view! { <NavLink href=href label=label icon=icon/> }).collect_view()}
        </nav>
    }
}
