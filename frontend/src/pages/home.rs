use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::page::use_page;
use crate::content::{CASE_STUDIES, SERVICES};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_page("");

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Software that outlives the launch"}</h1>
                    <p class="hero-subtitle">
                        {"We design, build and run web and mobile products for teams who need them to keep working long after the first release."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="cta-button">
                            {"Start a project"}
                        </Link<Route>>
                        <Link<Route> to={Route::CaseStudies} classes="secondary-link">
                            {"See our work"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="feature-block">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="card" key={service.slug}>
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="secondary-link">
                    {"All services →"}
                </Link<Route>>
            </section>

            <section class="feature-block">
                <h2>{"Recent work"}</h2>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().take(2).map(|study| html! {
                        <div class="card" key={study.client}>
                            <span class="card-tag">{study.industry}</span>
                            <h3>{study.client}</h3>
                            <p>{study.outcome}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="feature-block faq">
                <h2>{"Common questions"}</h2>
                <FaqItem question="How do projects usually start?">
                    <p>{"With a short call and a paid discovery week. You get a scoped plan and an estimate you can take anywhere."}</p>
                </FaqItem>
                <FaqItem question="Do you take over existing codebases?">
                    <p>{"Yes. We start with a written review of the code, infrastructure and release process before changing anything."}</p>
                </FaqItem>
                <FaqItem question="Who owns the code?">
                    <p>{"You do, from the first commit. Repositories live in your organisation."}</p>
                </FaqItem>
            </section>

            <section class="footer-cta">
                <h2>{"Have something in mind?"}</h2>
                <p>{"Tell us about it and pick a time that suits you."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Get in touch"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    color: #fff;
                    padding-top: 74px;
                }
                .hero {
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    color: #999;
                    font-size: 1.25rem;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .footer-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }
                .footer-cta p {
                    color: #999;
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
