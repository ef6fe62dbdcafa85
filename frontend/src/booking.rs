use serde::{Deserialize, Serialize};

/// Details carried from the contact form to the booking page as query
/// parameters, then into the scheduling widget as prefill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPrefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Builds the iframe URL for the scheduling widget.
///
/// `embed_domain` is the host the widget will post messages back to.
pub fn embed_url(base: &str, prefill: &BookingPrefill, embed_domain: Option<&str>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(domain) = embed_domain.filter(|d| !d.is_empty()) {
        params.push(("embed_domain", domain));
        params.push(("embed_type", "Inline"));
    }
    if let Some(name) = prefill.name.as_deref().filter(|v| !v.is_empty()) {
        params.push(("name", name));
    }
    if let Some(email) = prefill.email.as_deref().filter(|v| !v.is_empty()) {
        params.push(("email", email));
    }
    if let Some(note) = prefill.note.as_deref().filter(|v| !v.is_empty()) {
        params.push(("a1", note));
    }

    if params.is_empty() {
        return base.to_string();
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://calendly.com/agency/intro-call";

    #[test]
    fn test_no_params_returns_base() {
        assert_eq!(embed_url(BASE, &BookingPrefill::default(), None), BASE);
    }

    #[test]
    fn test_prefill_is_encoded() {
        let prefill = BookingPrefill {
            name: Some("Ada Lovelace".into()),
            email: Some("ada+site@example.com".into()),
            note: Some("Mobile app & API".into()),
        };
        let url = embed_url(BASE, &prefill, Some("agency.example"));
        assert_eq!(
            url,
            "https://calendly.com/agency/intro-call?embed_domain=agency.example&embed_type=Inline\
             &name=Ada%20Lovelace&email=ada%2Bsite%40example.com&a1=Mobile%20app%20%26%20API"
        );
    }

    #[test]
    fn test_existing_query_is_extended() {
        let prefill = BookingPrefill {
            name: Some("Bo".into()),
            ..Default::default()
        };
        let url = embed_url("https://calendly.com/agency/call?hide_gdpr_banner=1", &prefill, None);
        assert_eq!(url, "https://calendly.com/agency/call?hide_gdpr_banner=1&name=Bo");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let prefill = BookingPrefill {
            name: Some(String::new()),
            email: None,
            note: Some(String::new()),
        };
        assert_eq!(embed_url(BASE, &prefill, Some("")), BASE);
    }

    #[test]
    fn test_prefill_serialization_skips_empty_fields() {
        let prefill = BookingPrefill {
            email: Some("a@b.co".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&prefill).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.co"}));
    }
}
