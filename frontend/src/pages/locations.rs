use yew::prelude::*;

use crate::components::page::use_page;
use crate::content::LOCATIONS;

#[function_component(Locations)]
pub fn locations() -> Html {
    use_page("Locations");

    html! {
        <div class="content-page">
            <section class="page-hero">
                <h1>{"Where we are"}</h1>
                <p>{"Three studios, one team. Most of our clients we meet remotely; all of them are welcome to visit."}</p>
            </section>
            <section class="feature-block">
                <div class="card-grid">
                    { for LOCATIONS.iter().map(|location| html! {
                        <div class="card" key={location.city}>
                            <span class="card-tag">{location.region}</span>
                            <h3>{location.city}</h3>
                            <p>{location.blurb}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
