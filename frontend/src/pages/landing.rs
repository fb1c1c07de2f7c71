use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;

use crate::components::contact_modal::ContactModal;
use crate::scroll::navigation::{scroll_to_section, Section};
use crate::scroll::parallax::{parallax_style, use_scroll_progress};
use crate::scroll::reveal::{delay_style, stagger_delay, use_in_view, Reveal, RevealOnScroll, REVEAL_CSS};

pub struct Service {
    pub label: &'static str,
    pub title: &'static [&'static str],
    pub description: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    /// Call to action that jumps to the bottom of the page.
    pub button: Option<&'static str>,
    pub reveal: Reveal,
    pub reversed: bool,
}

pub const SERVICES: [Service; 3] = [
    Service {
        label: "Pre-Production",
        title: &["Define Your Game's", "Identity"],
        description: "Build captivating names, stories, and characters through targeted surveys and psychographic analysis. Create emotional resonance from day one.",
        image: "/assets/dna.png",
        alt: "DNA helix with gaming elements",
        button: Some("Shape Your Game's Foundation"),
        reveal: Reveal::FadeRight,
        reversed: false,
    },
    Service {
        label: "Prototyping & Pre-Launch",
        title: &["Fewer Iterations.", "Stronger Launch."],
        description: "Refine visuals, mechanics, and narratives with real-time player feedback. Identify what stands out—and what falls flat—before it costs you.",
        image: "/assets/tablet.png",
        alt: "Game character on tablet",
        button: None,
        reveal: Reveal::FadeLeft,
        reversed: true,
    },
    Service {
        label: "Post-Launch & Liveops",
        title: &["Win the Live Game"],
        description: "Keep players coming back with competitive analysis and loyalty-driven insights. Fuel retention, revenue, and roadmap confidence.",
        image: "/assets/season-pass.png",
        alt: "Season pass interface",
        button: None,
        reveal: Reveal::FadeRight,
        reversed: false,
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        number: "200K",
        label: "Players Surveyed",
        description: "Deeply understanding what drives gaming audiences.",
    },
    Stat {
        number: "20+",
        label: "Games Enhanced",
        description: "Sharpening all game elements",
    },
    Stat {
        number: "100,000+",
        label: "Insights Uncovered",
        description: "Turning player behaviors into strategies that win",
    },
];

pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep { icon: "📋", title: "Briefing", description: "You share your goals." },
    ProcessStep { icon: "🔬", title: "Research Design", description: "I tailor the method." },
    ProcessStep { icon: "⚡", title: "Execution", description: "I handle data collection." },
    ProcessStep { icon: "📊", title: "Results", description: "Actionable insights delivered." },
];

fn title_lines(lines: &[&'static str]) -> Html {
    html! {
        <>
            { for lines.iter().enumerate().map(|(i, line)| html! {
                <>
                    if i > 0 { <br /> }
                    { *line }
                </>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceBlockProps {
    index: usize,
    on_cta: Callback<MouseEvent>,
}

#[function_component(ServiceBlock)]
fn service_block(props: &ServiceBlockProps) -> Html {
    let service = &SERVICES[props.index];

    html! {
        <div class={classes!("service-row", service.reversed.then(|| "reversed"))}>
            <RevealOnScroll variant={Reveal::ImageScale} class="service-image">
                <img src={service.image} alt={service.alt} loading="lazy" />
                <div class="service-image-tint"></div>
            </RevealOnScroll>
            <RevealOnScroll variant={service.reveal} class="service-content">
                <div class="service-label">{ service.label }</div>
                <h2>{ title_lines(service.title) }</h2>
                <p>{ service.description }</p>
                if let Some(button) = service.button {
                    <button class="gradient-button" onclick={props.on_cta.clone()}>{ button }</button>
                }
            </RevealOnScroll>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let entered = use_state(|| false);
    let contact_open = use_state(|| false);
    let progress = use_scroll_progress();

    let stats_grid = use_node_ref();
    let stats_in_view = use_in_view(stats_grid.clone(), 0.3, false);

    {
        let entered = entered.clone();
        use_mount(move || entered.set(true));
    }

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening contact form");
            contact_open.set(true);
        })
    };

    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| {
            info!("Closing contact form");
            contact_open.set(false);
        })
    };

    let to_cta = Callback::from(|_: MouseEvent| {
        scroll_to_section(Section::Cta);
    });

    let enter = |delay: f64| {
        (
            classes!("hero-enter", (*entered).then(|| "entered")),
            delay_style(delay),
        )
    };
    let (subtitle_class, subtitle_style) = enter(1.1);
    let (cta_class, cta_style) = enter(1.3);
    let (phone_class, phone_style) = enter(0.5);

    html! {
        <>
        <div class="landing-page">
            <style>{REVEAL_CSS}</style>

            // Hero Section
            <section id={Section::Hero.id()} class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <h1>
                            { for [("See Through", 0.5, false), ("Players'", 0.7, true), ("Eyes", 0.9, false)].into_iter().enumerate().map(|(i, (text, delay, accent))| {
                                let (class, style) = enter(delay);
                                html! {
                                    <>
                                        if i > 0 { <br /> }
                                        <span class={classes!(class, accent.then(|| "accent-text"))} style={style}>{ text }</span>
                                    </>
                                }
                            }) }
                        </h1>
                        <p class={subtitle_class} style={subtitle_style}>
                            {"On-demand research that reveals what drives your players—from first click to long-term retention"}
                        </p>
                        <button class={classes!("hero-cta", cta_class)} style={cta_style} onclick={open_contact.clone()}>
                            {"Let's Talk Player Insights"}
                        </button>
                    </div>

                    <div class="hero-visual" style={parallax_style(progress)}>
                        <div class="hero-glow hero-glow-one"></div>
                        <div class="hero-glow hero-glow-two"></div>
                        <div class={classes!("hero-phone", phone_class)} style={phone_style}>
                            <img src="/assets/phone.png" alt="Gaming interface on phone" />
                            <div class="hero-phone-tint"></div>
                        </div>
                    </div>
                </div>
            </section>

            // Services Section
            <section id={Section::Services.id()} class="services">
                <div class="container">
                    { for (0..SERVICES.len()).map(|index| html! {
                        <ServiceBlock index={index} on_cta={to_cta.clone()} />
                    }) }
                </div>
            </section>

            // Stats Section
            <section id={Section::Stats.id()} class="stats band">
                <div class="container">
                    <RevealOnScroll variant={Reveal::FadeUp} amount={0.5} class="section-heading">
                        <h2>{"By the Numbers – Real Impact, Real Players"}</h2>
                    </RevealOnScroll>
                    <div class="stats-grid" ref={stats_grid}>
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div
                                class={classes!("stat-card", "reveal", Reveal::FadeUp.class(), stats_in_view.then(|| "in-view"))}
                                style={delay_style(stagger_delay(i, 0.15, 0.1))}
                            >
                                <div class="stat-number">{ stat.number }</div>
                                <div class="stat-label">{ stat.label }</div>
                                <div class="stat-description">{ stat.description }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // About Section
            <section id={Section::About.id()} class="about">
                <div class="container about-grid">
                    <RevealOnScroll variant={Reveal::Fade} once={true} class="about-portrait">
                        <img src="/assets/maayan.png" alt="Maayan portrait" loading="lazy" />
                    </RevealOnScroll>
                    <RevealOnScroll variant={Reveal::FadeUp} once={true} class="about-copy">
                        <h2>{"About"}</h2>
                        <p>
                            {"Hi, I'm "}<span class="accent">{"Maayan"}</span>
                            {". A behavioral psychologist who understands games—and the people who play them. My research is systematic, objective, and built to move fast without sacrificing rigor."}
                        </p>
                        <p>
                            {"I work with product, UX, and marketing teams to generate clarity, drive successful launches, and fuel confident decisions."}
                        </p>
                        <p>
                            {"My work has shaped games generating over "}<strong class="accent">{"$1B in revenue"}</strong>{"."}
                        </p>
                    </RevealOnScroll>
                </div>
            </section>

            // Process Section
            <section id={Section::Process.id()} class="process band">
                <div class="container">
                    <RevealOnScroll variant={Reveal::FadeUp} class="section-heading">
                        <h2>{"Simple, Transparent Process"}</h2>
                    </RevealOnScroll>
                    <div class="process-grid">
                        { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <RevealOnScroll variant={Reveal::FadeUp} amount={0.2} delay={stagger_delay(i, 0.2, 0.1)} class="process-step">
                                <div class="process-icon">{ step.icon }</div>
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                            </RevealOnScroll>
                        }) }
                    </div>
                </div>
            </section>

            // CTA Section
            <section id={Section::Cta.id()} class="cta">
                <div class="container">
                    <RevealOnScroll variant={Reveal::FadeUp}>
                        <h2>{"Ready to Learn What Drives Your Players?"}</h2>
                    </RevealOnScroll>
                    <RevealOnScroll variant={Reveal::ScaleUp}>
                        <button class="gradient-button cta-button" onclick={open_contact}>{"Let's Talk"}</button>
                    </RevealOnScroll>
                </div>
            </section>
        </div>

        <ContactModal open={*contact_open} on_close={close_contact} />

        <style>
            {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #06051a, #150f35, #291544);
                    overflow-x: hidden;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .band {
                    background: rgba(10, 7, 31, 0.6);
                    backdrop-filter: blur(4px);
                }
                .accent, .accent-text {
                    color: #e879f9;
                    font-weight: 600;
                }
                .accent-text {
                    background: linear-gradient(90deg, #d946ef, #ec4899);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .gradient-button {
                    background: linear-gradient(90deg, #7c3aed, #c026d3);
                    color: #fff;
                    border: none;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 4px 6px -1px rgba(217, 70, 239, 0.2);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .gradient-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 8px 20px -4px rgba(192, 38, 211, 0.3);
                }
                .gradient-button:active {
                    transform: scale(0.98);
                }

                .hero {
                    padding: 8rem 0 4rem;
                    position: relative;
                    overflow: hidden;
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero-copy p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    line-height: 1.6;
                    max-width: 32rem;
                    margin-bottom: 2rem;
                }
                .hero-enter {
                    display: inline-block;
                    opacity: 0;
                }
                .hero-enter.entered {
                    animation: heroEnter 0.8s ease-out forwards;
                }
                @keyframes heroEnter {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-cta {
                    background: #7c3aed;
                    color: #fff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .hero-cta:hover {
                    background: #6d28d9;
                    box-shadow: 0 20px 25px -5px rgba(139, 92, 246, 0.2), 0 10px 10px -5px rgba(139, 92, 246, 0.1);
                }
                .hero-visual {
                    position: relative;
                    will-change: transform;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(24px);
                }
                .hero-glow-one {
                    top: 1rem;
                    right: 1rem;
                    width: 4rem;
                    height: 4rem;
                    background: rgba(139, 92, 246, 0.2);
                }
                .hero-glow-two {
                    bottom: 2rem;
                    left: 1rem;
                    width: 3rem;
                    height: 3rem;
                    background: rgba(6, 182, 212, 0.2);
                }
                .hero-phone {
                    position: relative;
                    display: block;
                    margin: 0 auto;
                    width: 100%;
                    max-width: 434px;
                    height: 673px;
                }
                .hero-phone img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    border-radius: 1.5rem;
                }
                .hero-phone-tint, .service-image-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(45deg, rgba(217, 70, 239, 0.15), rgba(6, 182, 212, 0.15));
                    border-radius: inherit;
                    pointer-events: none;
                }

                .services {
                    padding: 5rem 0;
                }
                .service-row {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .service-row.reversed {
                    flex-direction: row-reverse;
                }
                .service-image, .service-content {
                    flex: 1;
                }
                .service-image {
                    position: relative;
                    height: 16rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .service-image img:hover {
                    transform: scale(1.05);
                }
                .service-label {
                    color: #e879f9;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .service-content h2 {
                    font-size: 2.25rem;
                    margin: 0 0 1.5rem;
                }
                .service-content p {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .stats, .process, .about, .cta {
                    padding: 5rem 0;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 2rem;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .stat-card {
                    text-align: center;
                }
                .stat-card.reveal {
                    transition-duration: 0.5s;
                }
                .stat-number {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                    transform: scale(0.9);
                    transition: transform 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) 0.2s;
                }
                .stat-card.in-view .stat-number {
                    transform: scale(1);
                }
                .stat-label {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #d8b4fe;
                    margin-bottom: 1rem;
                }
                .stat-description {
                    color: #9ca3af;
                    line-height: 1.6;
                    max-width: 20rem;
                    margin: 0 auto;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 72rem;
                }
                .about-portrait {
                    width: 100%;
                    max-width: 28rem;
                    height: 24rem;
                    margin: 0 auto;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .about-portrait.reveal {
                    transition-duration: 0.5s;
                }
                .about-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-copy.reveal {
                    transform: translateY(20px);
                    transition-duration: 0.5s;
                }
                .about-copy.reveal.in-view {
                    transform: none;
                }
                .about-copy h2 {
                    font-size: 2.25rem;
                    margin: 0 0 2rem;
                }
                .about-copy p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .process-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .process-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(135deg, #7c3aed, #c026d3);
                    box-shadow: 0 4px 6px -1px rgba(217, 70, 239, 0.2);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .process-icon:hover {
                    transform: scale(1.1);
                    box-shadow: 0 8px 20px -4px rgba(192, 38, 211, 0.3);
                }
                .process-step h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .process-step p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .cta {
                    text-align: center;
                }
                .cta h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                }
                .cta-button {
                    padding: 1rem 3rem;
                    font-size: 1.25rem;
                }

                @media (max-width: 1024px) {
                    .hero-grid, .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .service-row, .service-row.reversed {
                        flex-direction: column;
                    }
                    .service-image, .service-content {
                        width: 100%;
                    }
                }
                @media (max-width: 768px) {
                    .hero {
                        padding-top: 5rem;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                    .hero-cta, .cta-button {
                        width: 100%;
                    }
                    .hero-phone {
                        max-width: 280px;
                        height: 435px;
                    }
                    .stats-grid {
                        grid-template-columns: 1fr;
                    }
                    .process-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_service_links_to_cta() {
        let with_button: Vec<_> = SERVICES.iter().filter_map(|s| s.button).collect();
        assert_eq!(with_button, ["Shape Your Game's Foundation"]);
    }

    #[test]
    fn test_services_alternate_sides() {
        assert!(!SERVICES[0].reversed);
        assert!(SERVICES[1].reversed);
        assert_eq!(SERVICES[1].reveal, Reveal::FadeLeft);
        assert_eq!(SERVICES[2].reveal, Reveal::FadeRight);
    }

    #[test]
    fn test_process_step_delays() {
        let delays: Vec<_> = (0..PROCESS_STEPS.len())
            .map(|i| delay_style(stagger_delay(i, 0.2, 0.1)))
            .collect();
        assert!(delays[0].contains("0.10s"));
        assert!(delays[1].contains("0.30s"));
        assert!(delays[2].contains("0.50s"));
        assert!(delays[3].contains("0.70s"));
    }
}
