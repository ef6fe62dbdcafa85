use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::page::use_page;
use crate::content::{service_by_slug, LOCATIONS};

#[derive(Deserialize, Default)]
struct ContactQuery {
    #[serde(default)]
    service: Option<String>,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page("Contact");

    let preselected = use_location()
        .and_then(|location| location.query::<ContactQuery>().ok())
        .and_then(|query| query.service)
        .and_then(|slug| service_by_slug(&slug))
        .map(|service| service.title.to_string());

    html! {
        <div class="content-page contact-page">
            <section class="page-hero">
                <h1>{"Tell us about your project"}</h1>
                <p>{"A few details first, then pick a time for a 30 minute intro call."}</p>
            </section>
            <div class="contact-layout">
                <LeadForm preselected_service={preselected} />
                <aside class="contact-aside">
                    <h3>{"Studios"}</h3>
                    <ul>
                        { for LOCATIONS.iter().map(|l| html! { <li>{format!("{}, {}", l.city, l.region)}</li> }) }
                    </ul>
                    <p>{"We reply to every message within one working day."}</p>
                </aside>
            </div>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .lead-form .form-row {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.25rem;
                }
                .lead-form label {
                    color: #7EB2FF;
                    margin-bottom: 0.4rem;
                }
                .lead-form input, .lead-form select, .lead-form textarea {
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 8px;
                    padding: 0.75rem;
                    color: #fff;
                    font-size: 1rem;
                }
                .error-message {
                    background: rgba(255, 68, 68, 0.1);
                    border: 1px solid rgba(255, 68, 68, 0.3);
                    color: #ff8080;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                }
                .contact-aside {
                    color: #999;
                }
                @media (max-width: 768px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
