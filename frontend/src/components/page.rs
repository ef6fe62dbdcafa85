use yew::prelude::*;
use yew_hooks::prelude::use_title;

pub const SITE_NAME: &str = "Harbor Studio";

pub fn page_title(title: &str) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", title, SITE_NAME)
    }
}

/// Sets the document title and scrolls to the top when a page mounts.
#[hook]
pub fn use_page(title: &'static str) {
    use_title(page_title(title));

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
