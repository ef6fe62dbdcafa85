use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::use_page;
use crate::content::{INDUSTRIES, SERVICES};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_page("Services");

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Services"}</h1>
                <p>{"From a first prototype to the tenth release, with the same team."}</p>
            </section>
            <section class="feature-block">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-row" id={service.slug} key={service.slug}>
                        <div>
                            <h2>{service.title}</h2>
                            <p>{service.summary}</p>
                        </div>
                        <ul class="feature-list">
                            { for service.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                        </ul>
                    </div>
                }) }
            </section>
            <section class="footer-cta">
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Discuss your project"}
                </Link<Route>>
            </section>
        </div>
    }
}

#[function_component(Industries)]
pub fn industries() -> Html {
    use_page("Industries");

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Industries"}</h1>
                <p>{"Domains where we already know the regulations, the edge cases and the people."}</p>
            </section>
            <section class="feature-block">
                <div class="card-grid">
                    { for INDUSTRIES.iter().map(|industry| html! {
                        <div class="card" key={industry.name}>
                            <h3>{industry.name}</h3>
                            <p>{industry.summary}</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="footer-cta">
                <Link<Route> to={Route::CaseStudies} classes="secondary-link">
                    {"Read the case studies →"}
                </Link<Route>>
            </section>
        </div>
    }
}
