//! Top navigation bar with mobile menu.

use leptos::*;
use leptos_router::use_location;

use crate::config::APP_NAME;
use crate::{link_class, NavbarState, HOME_PATH, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (nav, set_nav) = create_signal(NavbarState::default());

    let close_menu = move |_| set_nav.update(NavbarState::close);
    let toggle_menu = move |_| set_nav.update(NavbarState::toggle);
    let bar_class = move || nav.with(|n| n.toggle_bar_class());

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <a href=HOME_PATH class="navbar__logo" on:click=close_menu>
                        "📷 " {APP_NAME}
                    </a>
                </div>

                <div class=move || nav.with(|n| n.menu_class())>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class=move || pathname.with(|path| link_class(link, path))
                                    on:click=close_menu
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__toggle" on:click=toggle_menu>
                    <span class=bar_class></span>
                    <span class=bar_class></span>
                    <span class=bar_class></span>
                </div>
            </div>
        </nav>
    }
}
