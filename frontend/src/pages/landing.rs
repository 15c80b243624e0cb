use yew::prelude::*;

use crate::components::newsletter_form::NewsletterForm;
use crate::components::notification::Notifier;

/// In-page sections linked from the nav, as (element id, label).
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("work", "Work"),
    ("process", "Process"),
];

const SERVICES: &[(&str, &str)] = &[
    ("Web Development", "Fast, accessible sites and web apps built to last."),
    ("Mobile Apps", "Native feeling iOS and Android apps from one team."),
    ("AI/ML Solutions", "Models that earn their keep in production."),
    ("E-commerce", "Storefronts that convert and scale with your catalogue."),
];

const CASE_STUDIES: &[(&str, &str, &str)] = &[
    ("Fintech", "Loan origination portal", "Cut application time from days to minutes."),
    ("Retail", "Headless storefront", "Doubled mobile conversion in one quarter."),
    ("Health", "Clinic scheduling app", "Forty clinics booking through one calendar."),
];

const PROCESS: &[(&str, &str)] = &[
    ("01", "Consultation: we learn your goals and constraints."),
    ("02", "Proposal: scope, budget and timeline in writing."),
    ("03", "Build: weekly demos, no surprises."),
    ("04", "Launch: we ship, measure and keep improving."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_book: Callback<()>,
    pub on_watch_reel: Callback<()>,
    pub notifier: Notifier,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_book.emit(());
        })
    };

    let watch_reel = {
        let on_watch_reel = props.on_watch_reel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_watch_reel.emit(());
        })
    };

    html! {
        <div class="landing">
            <section class="hero">
                <h1>{"We build software that moves your business"}</h1>
                <p class="hero-subtitle">
                    {"Strategy, design and engineering under one roof. Tell us what you are building and we will tell you how we would ship it."}
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="cta-button" onclick={book.clone()}>
                        {"Book a consultation"}
                    </a>
                    <a href="#reel" class="watch-reel-btn" onclick={watch_reel}>
                        {"▶ Watch reel"}
                    </a>
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"What we do"}</h2>
                <div class="feature-grid">
                    { for SERVICES.iter().map(|(title, blurb)| html! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="work" class="work">
                <h2>{"Selected work"}</h2>
                <div class="feature-grid">
                    { for CASE_STUDIES.iter().map(|(industry, title, outcome)| html! {
                        <div class="card">
                            <span class="case-industry">{*industry}</span>
                            <h3>{*title}</h3>
                            <p>{*outcome}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="process" class="process">
                <h2>{"How we work"}</h2>
                <ol class="process-steps">
                    { for PROCESS.iter().map(|(number, text)| html! {
                        <li><span class="process-number">{*number}</span>{*text}</li>
                    }) }
                </ol>
            </section>

            <section id="contact" class="contact">
                <h2>{"Ready when you are"}</h2>
                <p>{"A 30 minute call, no strings attached."}</p>
                <a href="#contact" class="cta-button" onclick={book}>
                    {"Book a consultation"}
                </a>
            </section>

            <footer class="footer">
                <div class="footer-newsletter">
                    <h3>{"Stay in the loop"}</h3>
                    <p>{"One email a month. Case studies and what we learned."}</p>
                    <NewsletterForm notifier={props.notifier.clone()} />
                </div>
                <p class="footer-copy">{"© agency.io"}</p>
            </footer>

            <style>
                {r#"
                    .landing {
                        color: #fff;
                        background: #1a1a1a;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 6rem 2rem 2rem;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        max-width: 900px;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        max-width: 640px;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.2rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .cta-button {
                        background: #1E90FF;
                        color: #fff;
                        padding: 0.9rem 1.8rem;
                        border-radius: 8px;
                        text-decoration: none;
                    }
                    .watch-reel-btn {
                        color: #7EB2FF;
                        padding: 0.9rem 1.2rem;
                        text-decoration: none;
                    }
                    .services, .work, .process, .contact {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                    }
                    .case-industry {
                        color: #7EB2FF;
                        font-size: 0.85rem;
                        text-transform: uppercase;
                    }
                    .process-number {
                        color: #1E90FF;
                        font-weight: bold;
                        margin-right: 1rem;
                    }
                    .contact { text-align: center; }
                    .footer {
                        border-top: 1px solid #333;
                        padding: 3rem 2rem;
                        text-align: center;
                    }
                    .newsletter-form {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1rem;
                    }
                    .newsletter-input {
                        padding: 0.75rem;
                        border-radius: 8px;
                        border: 1px solid #333;
                        background: #111;
                        color: #fff;
                        min-width: 260px;
                    }
                    .newsletter-submit {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: #1E90FF;
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.2rem; }
                        .hero-actions { flex-direction: column; }
                        .newsletter-form { flex-direction: column; }
                    }
                "#}
            </style>
        </div>
    }
}
