use yew::prelude::*;
use chrono::Datelike;

use crate::config;
use crate::scroll::navigation::{scroll_to_section, QUICK_LINKS};
use crate::scroll::reveal::{delay_style, stagger_delay, use_in_view, Reveal, RevealOnScroll};

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "Email", href: "mailto:contact@brightify.com" },
];

/// `target` and `rel` for a link. Only web links leave the page.
pub fn link_target(href: &str) -> (&'static str, &'static str) {
    if href.starts_with("http") {
        ("_blank", "noopener noreferrer")
    } else {
        ("_self", "")
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let columns = use_node_ref();
    let columns_in_view = use_in_view(columns.clone(), 0.3, false);
    let year = chrono::Local::now().year();

    let column = |extra: Option<&'static str>| {
        classes!("footer-column", "reveal", Reveal::FadeUp.class(), columns_in_view.then(|| "in-view"), extra)
    };
    let column_delay = |index: usize| delay_style(stagger_delay(index, 0.1, 0.2));

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid" ref={columns}>
                    <div class={column(Some("footer-brand"))} style={column_delay(0)}>
                        <div class="footer-logo">
                            <span class="footer-logo-mark">
                                <img src="/assets/logo.jpeg" alt={format!("{} Logo", config::BRAND_NAME)} />
                            </span>
                            <span>{config::BRAND_NAME}</span>
                        </div>
                        <p>
                            {"On-demand research that reveals what drives your players—from first click to long-term retention. Helping game developers understand their audience better."}
                        </p>
                    </div>

                    <div class={column(None)} style={column_delay(1)}>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for QUICK_LINKS.iter().map(|&section| html! {
                                <li key={section.id()}>
                                    <button onclick={Callback::from(move |_: MouseEvent| { scroll_to_section(section); })}>
                                        { section.label() }
                                    </button>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class={column(None)} style={column_delay(2)}>
                        <h3>{"Connect"}</h3>
                        <ul>
                            { for SOCIAL_LINKS.iter().map(|social| {
                                let (target, rel) = link_target(social.href);
                                html! {
                                    <li key={social.label}>
                                        <a href={social.href} target={target} rel={rel}>{ social.label }</a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                </div>

                <RevealOnScroll variant={Reveal::Fade} amount={0.1} delay={0.5} class="footer-bottom">
                    <div class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}
                    </div>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </RevealOnScroll>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 0;
                        border-top: 1px solid rgba(112, 26, 117, 0.2);
                        background: #06051a;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-column.reveal {
                        transition-duration: 0.5s;
                        transform: translateY(20px);
                    }
                    .footer-column.reveal.in-view {
                        transform: none;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .footer-logo-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, #8b5cf6, #c026d3);
                    }
                    .footer-logo-mark img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .footer-brand p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        max-width: 28rem;
                    }
                    .footer-column h3 {
                        font-size: 1rem;
                        margin: 0 0 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-column button,
                    .footer-column a {
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        text-decoration: none;
                        text-align: left;
                        transition: color 0.2s;
                    }
                    .footer-column button:hover,
                    .footer-column a:hover,
                    .footer-legal a:hover {
                        color: #e879f9;
                    }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid rgba(112, 26, 117, 0.2);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .footer-legal {
                        font-size: 0.75rem;
                    }
                    .footer-legal a {
                        color: #6b7280;
                        text-decoration: none;
                    }
                    .footer-legal span {
                        margin: 0 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_links_open_in_new_tab() {
        assert_eq!(link_target("https://linkedin.com/in/someone"), ("_blank", "noopener noreferrer"));
        assert_eq!(link_target("http://example.com"), ("_blank", "noopener noreferrer"));
    }

    #[test]
    fn test_other_links_stay_on_page() {
        assert_eq!(link_target("#"), ("_self", ""));
        assert_eq!(link_target("mailto:contact@brightify.com"), ("_self", ""));
    }

    #[test]
    fn test_email_link_matches_config() {
        let email = SOCIAL_LINKS.iter().find(|s| s.label == "Email").map(|s| s.href);
        assert_eq!(email, Some(config::contact_mailto().as_str()));
    }
}
