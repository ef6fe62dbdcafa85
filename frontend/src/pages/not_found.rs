use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::use_page;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page("Not found");

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Go to the home page"}
                </Link<Route>>
            </section>
        </div>
    }
}
