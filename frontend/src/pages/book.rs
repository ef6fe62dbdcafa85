use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use log::info;
use serde_json::{json, Value};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::{embed_url, BookingPrefill};
use crate::components::page::use_page;
use crate::config;
use crate::integrations::scheduling::{use_scheduling_bridge, BridgeCallbacks};
use crate::integrations::session::notify_tracker;

const CONFIRMATION_MS: u32 = 8_000;

#[derive(Clone, Copy, PartialEq)]
enum BookingStep {
    Choosing,
    TimeSelected,
    Scheduled,
}

/// Stores `next` in `slot`. The previous value is dropped, which cancels a
/// pending `Timeout`.
fn rearm<T>(slot: &RefCell<Option<T>>, next: T) {
    let previous = slot.borrow_mut().replace(next);
    drop(previous);
}

fn embed_domain() -> Option<String> {
    web_sys::window().and_then(|w| w.location().host().ok())
}

#[function_component(Book)]
pub fn book() -> Html {
    use_page("Book a call");

    let step = use_state(|| BookingStep::Choosing);
    let show_confirmation = use_state(|| false);
    let hide_confirmation = use_mut_ref(|| None::<Timeout>);

    let prefill = use_location()
        .and_then(|location| location.query::<BookingPrefill>().ok())
        .unwrap_or_default();
    let src = use_memo(
        |prefill| embed_url(&config::scheduling_url(), prefill, embed_domain().as_deref()),
        prefill,
    );

    let on_date_and_time_selected = {
        let step = step.clone();
        Callback::from(move |_| step.set(BookingStep::TimeSelected))
    };

    let on_event_scheduled = {
        let step = step.clone();
        let show_confirmation = show_confirmation.clone();
        let hide_confirmation = hide_confirmation.clone();
        Callback::from(move |payload: Value| {
            info!("Intro call scheduled");
            step.set(BookingStep::Scheduled);
            show_confirmation.set(true);
            notify_tracker(&json!({ "type": "booking_completed", "payload": payload }));

            let show_confirmation = show_confirmation.clone();
            let hide = Timeout::new(CONFIRMATION_MS, move || show_confirmation.set(false));
            rearm(&hide_confirmation, hide);
        })
    };

    use_scheduling_bridge(
        config::scheduling_origin(),
        BridgeCallbacks {
            on_date_and_time_selected: Some(on_date_and_time_selected),
            on_event_scheduled: Some(on_event_scheduled),
        },
    );

    let status = match *step {
        BookingStep::Choosing => "Pick a time that works for you.",
        BookingStep::TimeSelected => "Almost there, just confirm your details.",
        BookingStep::Scheduled => "You're booked. A calendar invite is on its way.",
    };

    html! {
        <div class="content-page book-page">
            <section class="page-hero">
                <h1>{"Book an intro call"}</h1>
                <p class={classes!("booking-status", (*step == BookingStep::Scheduled).then(|| "done"))}>
                    {status}
                </p>
            </section>
            if *show_confirmation {
                <div class="booking-toast">
                    {"Thanks! We'll read your notes before the call."}
                </div>
            }
            <div class="scheduling-embed">
                <iframe src={(*src).clone()} title="Schedule an intro call" loading="lazy" />
            </div>
            <style>
                {r#"
                .scheduling-embed {
                    max-width: 1000px;
                    margin: 0 auto 4rem;
                    padding: 0 1rem;
                }
                .scheduling-embed iframe {
                    width: 100%;
                    min-height: 700px;
                    border: none;
                    border-radius: 16px;
                    background: #fff;
                }
                .booking-status {
                    color: #999;
                }
                .booking-status.done {
                    color: #7EB2FF;
                }
                .booking-toast {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    background: rgba(30, 144, 255, 0.9);
                    color: #fff;
                    padding: 1rem 1.5rem;
                    border-radius: 12px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    z-index: 20;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Pending {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Pending {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_rearm_cancels_previous_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let slot = RefCell::new(None);

        rearm(&slot, Pending { id: 1, cancelled: cancelled.clone() });
        assert!(cancelled.borrow().is_empty());

        rearm(&slot, Pending { id: 2, cancelled: cancelled.clone() });
        assert_eq!(*cancelled.borrow(), vec![1]);
        assert_eq!(slot.borrow().as_ref().map(|p| p.id), Some(2));

        drop(slot);
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
    }
}
