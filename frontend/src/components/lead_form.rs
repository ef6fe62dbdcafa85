use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::BookingPrefill;
use crate::config;
use crate::content::SERVICES;
use crate::Route;

const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl LeadRequest {
    /// Trims every field and returns the first problem found.
    pub fn validate(self) -> Result<Self, String> {
        let lead = LeadRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            service: self.service.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if lead.name.is_empty() {
            return Err("Please tell us your name".to_string());
        }
        if !looks_like_email(&lead.email) {
            return Err("Please enter a valid email address".to_string());
        }
        if lead.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(format!("Please keep the message under {} characters", MAX_MESSAGE_LEN));
        }
        Ok(lead)
    }

    pub fn prefill(&self) -> BookingPrefill {
        let note = match (self.service.is_empty(), self.message.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.service.clone()),
            (true, false) => Some(self.message.clone()),
            (false, false) => Some(format!("{}: {}", self.service, self.message)),
        };
        BookingPrefill {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            note,
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

async fn submit_lead(url: String, lead: LeadRequest) {
    let request = match Request::post(&url).json(&lead) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to encode lead: {}", e);
            return;
        }
    };
    match request.send().await {
        Ok(response) if response.ok() => info!("Lead submitted"),
        Ok(response) => warn!("Lead intake returned status {}", response.status()),
        Err(e) => warn!("Lead intake request failed: {}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    #[prop_or_default]
    pub preselected_service: Option<String>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let navigator = use_navigator();
    let lead = use_state(|| LeadRequest {
        service: props.preselected_service.clone().unwrap_or_default(),
        ..Default::default()
    });
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let update = |apply: fn(&mut LeadRequest, String)| {
        let lead = lead.clone();
        move |value: String| {
            let mut next = (*lead).clone();
            apply(&mut next, value);
            lead.set(next);
        }
    };

    let on_name = {
        let set = update(|l, v| l.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|l, v| l.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_company = {
        let set = update(|l, v| l.company = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_service = {
        let set = update(|l, v| l.service = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|l, v| l.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let lead = lead.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let validated = match (*lead).clone().validate() {
                Ok(validated) => validated,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            is_submitting.set(true);

            let prefill = validated.prefill();
            let navigator = navigator.clone();
            let is_submitting = is_submitting.clone();
            let intake_url = config::lead_intake_url();
            spawn_local(async move {
                // The booking step does not wait on intake succeeding.
                if let Some(url) = intake_url {
                    submit_lead(url, validated).await;
                }
                is_submitting.set(false);
                if let Some(navigator) = navigator {
                    if navigator.push_with_query(&Route::Book, &prefill).is_err() {
                        navigator.push(&Route::Book);
                    }
                }
            });
        })
    };

    html! {
        <form class="lead-form" {onsubmit}>
            if let Some(message) = (*error).as_ref() {
                <div class="error-message">{message.clone()}</div>
            }
            <div class="form-row">
                <label for="lead-name">{"Name"}</label>
                <input id="lead-name" type="text" value={lead.name.clone()} oninput={on_name} />
            </div>
            <div class="form-row">
                <label for="lead-email">{"Work email"}</label>
                <input id="lead-email" type="email" value={lead.email.clone()} oninput={on_email} />
            </div>
            <div class="form-row">
                <label for="lead-company">{"Company"}</label>
                <input id="lead-company" type="text" value={lead.company.clone()} oninput={on_company} />
            </div>
            <div class="form-row">
                <label for="lead-service">{"What do you need?"}</label>
                <select id="lead-service" onchange={on_service}>
                    <option value="" selected={lead.service.is_empty()}>{"Not sure yet"}</option>
                    { for SERVICES.iter().map(|service| html! {
                        <option value={service.title} selected={lead.service == service.title}>
                            {service.title}
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-row">
                <label for="lead-message">{"Tell us about the project"}</label>
                <textarea id="lead-message" rows="5" value={lead.message.clone()} oninput={on_message} />
            </div>
            <button type="submit" class="cta-button" disabled={*is_submitting}>
                { if *is_submitting { "Sending..." } else { "Continue to booking" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str) -> LeadRequest {
        LeadRequest {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_lead_is_trimmed() {
        let validated = LeadRequest {
            message: "  Need an app  ".into(),
            ..lead("  Ada ", " ada@example.com ")
        }
        .validate()
        .unwrap();
        assert_eq!(validated.name, "Ada");
        assert_eq!(validated.email, "ada@example.com");
        assert_eq!(validated.message, "Need an app");
    }

    #[test]
    fn test_missing_name_rejected() {
        assert!(lead("   ", "ada@example.com").validate().is_err());
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com", "ada@.com", "ada@example."] {
            assert!(lead("Ada", bad).validate().is_err(), "{:?} should be rejected", bad);
        }
        for good in ["ada@example.com", "ada+site@sub.example.co.uk"] {
            assert!(lead("Ada", good).validate().is_ok(), "{:?} should be accepted", good);
        }
    }

    #[test]
    fn test_overlong_message_rejected() {
        let request = LeadRequest {
            message: "x".repeat(MAX_MESSAGE_LEN + 1),
            ..lead("Ada", "ada@example.com")
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_prefill_combines_service_and_message() {
        let mut request = lead("Ada", "ada@example.com");
        assert_eq!(request.prefill().note, None);

        request.service = "Mobile Apps".into();
        assert_eq!(request.prefill().note.as_deref(), Some("Mobile Apps"));

        request.message = "Offline sync".into();
        let prefill = request.prefill();
        assert_eq!(prefill.note.as_deref(), Some("Mobile Apps: Offline sync"));
        assert_eq!(prefill.name.as_deref(), Some("Ada"));
        assert_eq!(prefill.email.as_deref(), Some("ada@example.com"));
    }
}
