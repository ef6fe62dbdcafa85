use chrono::Datelike;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod content;
mod integrations;
mod components;
mod pages {
    pub mod book;
    pub mod case_studies;
    pub mod contact;
    pub mod home;
    pub mod locations;
    pub mod not_found;
    pub mod privacy;
    pub mod services;
}

use components::page::SITE_NAME;
use integrations::session::SessionRecorder;
use pages::{
    book::Book,
    case_studies::CaseStudies,
    contact::Contact,
    home::Home,
    locations::Locations,
    not_found::NotFound,
    privacy::PrivacyPolicy,
    services::{Industries, Services},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/industries")]
    Industries,
    #[at("/locations")]
    Locations,
    #[at("/case-studies")]
    CaseStudies,
    #[at("/contact")]
    Contact,
    #[at("/book")]
    Book,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <Industries /> }
        }
        Route::Locations => {
            info!("Rendering Locations page");
            html! { <Locations /> }
        }
        Route::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Book => {
            info!("Rendering Book page");
            html! { <Book /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Services, "Services"),
    (Route::Industries, "Industries"),
    (Route::CaseStudies, "Work"),
    (Route::Locations, "Locations"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 80.0);
                    })
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <span>{format!("© {} {}", year, SITE_NAME)}</span>
            <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
            <Link<Route> to={Route::Book} classes="footer-link">{"Book a call"}</Link<Route>>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SessionRecorder />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #1a1a1a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.95);
                    backdrop-filter: blur(10px);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .nav-logo, .nav-link, .footer-link {
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-login-button, .cta-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    text-decoration: none;
                    cursor: pointer;
                }
                .secondary-link {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                }
                .content-page {
                    min-height: 100vh;
                    color: #fff;
                    padding-top: 74px;
                }
                .page-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .page-hero p {
                    color: #999;
                    font-size: 1.15rem;
                }
                .feature-block {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    color: #fff;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .card, .service-row {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    margin-bottom: 1.5rem;
                }
                .card p, .service-row p, .feature-list li {
                    color: #999;
                    line-height: 1.6;
                }
                .card-tag {
                    color: #7EB2FF;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.1rem;
                    padding: 1rem 0;
                    cursor: pointer;
                }
                .faq-answer p {
                    color: #999;
                }
                .site-footer {
                    display: flex;
                    gap: 2rem;
                    justify-content: center;
                    padding: 2rem;
                    color: #666;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        background: rgba(26, 26, 26, 0.98);
                        padding: 1.5rem;
                    }
                    .service-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if config::is_development() { Level::Debug } else { Level::Info };
    let _ = console_log::init_with_level(level);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
