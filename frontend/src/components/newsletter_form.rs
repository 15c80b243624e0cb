use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::FirestoreStore;
use crate::booking::pipeline::FormEffects;
use crate::components::notification::{NotificationKind, Notifier};
use crate::config;
use crate::dom;
use crate::newsletter;

struct FooterEffects {
    loading: UseStateHandle<bool>,
    notifier: Notifier,
}

impl FormEffects for FooterEffects {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.show(message, kind, config::NEWSLETTER_NOTIFICATION_MS);
    }

    fn focus_field(&self, name: &str) {
        dom::focus_element(name);
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub notifier: Notifier,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let email = use_state(String::new);
    let loading = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let loading = loading.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let input = (*email).clone();
            let email = email.clone();
            let effects = FooterEffects {
                loading: loading.clone(),
                notifier: notifier.clone(),
            };
            spawn_local(async move {
                let store = FirestoreStore::from_config();
                if newsletter::subscribe(&store, &effects, &input).await.is_ok() {
                    email.set(String::new());
                }
            });
        })
    };

    html! {
        <form class="newsletter-form" novalidate=true {onsubmit}>
            <input
                id="newsletter-email"
                class="newsletter-input"
                type="email"
                placeholder="you@company.com"
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" class="newsletter-submit" disabled={*loading}>
                { if *loading { "Subscribing..." } else { "Subscribe" } }
            </button>
        </form>
    }
}
