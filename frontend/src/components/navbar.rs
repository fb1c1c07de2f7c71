use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::scroll::navigation::{open_in_new_tab, scroll_to_section, Section, NAV_ITEMS};
use crate::scroll::reveal::{delay_style, stagger_delay};
use crate::scroll::visibility::use_scroll_visibility;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let active_section = use_state(|| Section::Hero);
    let visibility = use_scroll_visibility();

    let go_to = {
        let menu_open = menu_open.clone();
        let active_section = active_section.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            let active_section = active_section.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if scroll_to_section(section) {
                    active_section.set(section);
                }
                menu_open.set(false);  // Close mobile menu after clicking
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let book_call = Callback::from(|_: MouseEvent| open_in_new_tab(config::BOOKING_URL));

    let link_class = |section: Section| {
        classes!("nav-link", (*active_section == section).then(|| "active"))
    };

    html! {
        <header class={classes!("top-nav", visibility.scrolled.then(|| "scrolled"))}>
            <nav class="nav-content">
                <button class="nav-logo" onclick={go_to(Section::Hero)}>
                    <span class="nav-logo-mark">
                        <img src="/assets/logo.jpeg" alt={format!("{} Logo", config::BRAND_NAME)} />
                    </span>
                    <span class="nav-logo-text">{config::BRAND_NAME}</span>
                </button>

                <div class="nav-desktop">
                    if visibility.nav_visible {
                        <div class="nav-links">
                            { for NAV_ITEMS.iter().map(|&section| html! {
                                <button class={link_class(section)} onclick={go_to(section)}>
                                    { section.label() }
                                </button>
                            }) }
                        </div>
                    }
                    <button class="nav-book-call" onclick={book_call.clone()}>
                        {"Book a Call"}
                    </button>
                </div>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().enumerate().map(|(i, &section)| html! {
                        <button
                            class={classes!(link_class(section), "mobile-link")}
                            style={delay_style(stagger_delay(i, 0.1, 0.0))}
                            onclick={go_to(section)}
                        >
                            { section.label() }
                        </button>
                    }) }
                    <button
                        class="nav-book-call mobile-link"
                        style={delay_style(stagger_delay(NAV_ITEMS.len(), 0.1, 0.0))}
                        onclick={book_call}
                    >
                        {"Book a Call"}
                    </button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1.5rem 0;
                        backdrop-filter: blur(4px);
                        background: linear-gradient(135deg, rgba(30, 27, 75, 0.9), rgba(59, 7, 100, 0.9), rgba(80, 7, 36, 0.9));
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: linear-gradient(135deg, rgba(30, 27, 75, 0.95), rgba(59, 7, 100, 0.95), rgba(80, 7, 36, 0.95));
                        box-shadow: 0 4px 6px -1px rgba(112, 26, 117, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #fff;
                    }
                    .nav-logo:hover {
                        opacity: 0.8;
                    }
                    .nav-logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, #facc15, #f97316);
                    }
                    .nav-logo-mark img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .nav-logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        animation: navSlideIn 0.2s ease-out;
                    }
                    @keyframes navSlideIn {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #e5e7eb;
                        font-weight: 600;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        transition: color 0.4s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-link.active {
                        color: #e879f9;
                    }
                    .nav-book-call {
                        background: linear-gradient(90deg, #c026d3, #9333ea);
                        color: #fff;
                        border: none;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .nav-book-call:hover {
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        justify-content: space-between;
                        width: 1.5rem;
                        height: 1.25rem;
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        height: 2px;
                        width: 100%;
                        background: #fff;
                        border-radius: 9999px;
                        transition: transform 0.3s, opacity 0.3s;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(9px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-9px) rotate(-45deg);
                    }
                    .mobile-menu {
                        display: none;
                        flex-direction: column;
                        gap: 1rem;
                        margin: 1rem 1.5rem 0;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, rgba(30, 27, 75, 0.95), rgba(59, 7, 100, 0.95), rgba(80, 7, 36, 0.95));
                        animation: menuDrop 0.3s ease-out;
                    }
                    @keyframes menuDrop {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .mobile-link {
                        text-align: left;
                        font-size: 1.125rem;
                        text-transform: none;
                        opacity: 0;
                        animation: mobileLinkIn 0.3s ease-out forwards;
                    }
                    .mobile-link.active {
                        padding-left: 0.5rem;
                    }
                    .mobile-menu .nav-book-call {
                        margin-top: 1rem;
                        text-align: center;
                    }
                    @keyframes mobileLinkIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-desktop {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
