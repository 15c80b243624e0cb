use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::HttpBookingApi;
use crate::booking::form::{min_booking_date, FieldKind, FieldSpec};
use crate::booking::pipeline::{
    self, surface_validation_error, BookingEffects, DetachedTask, FormEffects,
};
use crate::booking::session::BookingSession;
use crate::components::notification::{NotificationKind, Notifier};
use crate::config;
use crate::dom;

pub enum SessionAction {
    Open,
    Close,
    FinishClose,
    SetField(String, String),
    ShowStep(usize),
    Retreat,
}

impl Reducible for BookingSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Open => next.open(),
            SessionAction::Close => next.close(),
            SessionAction::FinishClose => next.finish_close(),
            SessionAction::SetField(name, value) => next.set_field(&name, value),
            SessionAction::ShowStep(step) => next.show_step(step),
            SessionAction::Retreat => next.retreat(),
        }
        Rc::new(next)
    }
}

struct ModalEffects {
    loading: UseStateHandle<bool>,
    notifier: Notifier,
    on_close: Callback<()>,
}

impl FormEffects for ModalEffects {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.show(message, kind, config::BOOKING_NOTIFICATION_MS);
    }

    fn focus_field(&self, name: &str) {
        dom::focus_element(name);
    }
}

impl BookingEffects for ModalEffects {
    fn close_modal(&self) {
        self.on_close.emit(());
    }

    fn spawn_detached(&self, task: DetachedTask) {
        spawn_local(task);
    }
}

/// Value a `<select>` should display for `value`: the value itself when it
/// is one of the choices, otherwise the empty placeholder option.
fn displayed_choice<'a>(value: &'a str, choices: &[(&str, &str)]) -> &'a str {
    if choices.iter().any(|(choice, _)| *choice == value) {
        value
    } else {
        ""
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    name: String,
    value: String,
    choices: &'static [(&'static str, &'static str)],
    on_change: Callback<String>,
}

// Option `selected` attributes stop applying once the user has picked an
// option, so the element value is written directly whenever the record changes.
#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let select_ref = use_node_ref();

    {
        let select_ref = select_ref.clone();
        let choices = props.choices;
        use_effect_with_deps(
            move |value| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(displayed_choice(value, choices));
                }
                || ()
            },
            props.value.clone(),
        );
    }

    let onchange = props.on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });

    html! {
        <select ref={select_ref} id={props.name.clone()} name={props.name.clone()} {onchange}>
            <option value="" disabled=true>{"Select..."}</option>
            { for props.choices.iter().map(|(v, label)| html! {
                <option value={*v}>{*label}</option>
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub notifier: Notifier,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let session = use_reducer(BookingSession::default);
    let loading = use_state(|| false);

    // Sync the session with the visibility prop
    {
        let dispatcher = session.dispatcher();
        use_effect_with_deps(
            move |open| {
                let mut finish = None;
                if *open {
                    dispatcher.dispatch(SessionAction::Open);
                    dom::set_scroll_locked(true);
                } else {
                    dispatcher.dispatch(SessionAction::Close);
                    dom::set_scroll_locked(false);
                    finish = Some(Timeout::new(config::MODAL_TRANSITION_MS, move || {
                        dispatcher.dispatch(SessionAction::FinishClose)
                    }));
                }
                move || drop(finish)
            },
            props.open,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    let next_step = {
        let session = session.clone();
        let notifier = props.notifier.clone();
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut advanced = (*session).clone();
            match advanced.advance() {
                Ok(()) => session.dispatch(SessionAction::ShowStep(
                    advanced.wizard().current_step(),
                )),
                Err(err) => {
                    let effects = ModalEffects {
                        loading: loading.clone(),
                        notifier: notifier.clone(),
                        on_close: on_close.clone(),
                    };
                    surface_validation_error(&effects, &err);
                }
            }
        })
    };

    let prev_step = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Retreat))
    };

    let onsubmit = {
        let session = session.clone();
        let notifier = props.notifier.clone();
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let snapshot = (*session).clone();
            let effects = ModalEffects {
                loading: loading.clone(),
                notifier: notifier.clone(),
                on_close: on_close.clone(),
            };
            spawn_local(async move {
                let api = Rc::new(HttpBookingApi::from_config());
                if let Err(err) = pipeline::submit(api, &effects, &snapshot).await {
                    gloo_console::log!(format!("Booking not completed: {}", err));
                }
            });
        })
    };

    let wizard = *session.wizard();
    let record = session.record().clone();

    let render_field = |field: &FieldSpec| -> Html {
        let name = field.name.to_string();
        let value = record.value(field.name).to_string();
        let on_value = {
            let session = session.clone();
            let name = name.clone();
            Callback::from(move |value: String| {
                session.dispatch(SessionAction::SetField(name.clone(), value))
            })
        };

        let control = match field.kind {
            FieldKind::Select(choices) => {
                html! {
                    <SelectField name={name.clone()} {value} {choices} on_change={on_value} />
                }
            }
            FieldKind::TextArea => {
                let oninput = on_value.reform(|e: InputEvent| {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                });
                html! {
                    <textarea id={name.clone()} name={name.clone()} rows="4" {value} {oninput} />
                }
            }
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    FieldKind::Date => "date",
                    FieldKind::Time => "time",
                    _ => "text",
                };
                let min = (kind == FieldKind::Date).then(min_booking_date);
                let oninput = on_value.reform(|e: InputEvent| {
                    e.target_unchecked_into::<HtmlInputElement>().value()
                });
                html! {
                    <input
                        type={input_type}
                        id={name.clone()}
                        name={name.clone()}
                        placeholder={field.placeholder}
                        {min}
                        {value}
                        {oninput}
                    />
                }
            }
        };

        html! {
            <div class="form-group">
                <label for={name.clone()}>
                    {field.label}
                    if field.required { <span class="required">{" *"}</span> }
                </label>
                {control}
            </div>
        }
    };

    let form = session.form().clone();

    html! {
        <div
            id="booking-modal"
            class={classes!("booking-modal", session.is_open().then(|| "show"))}
            onclick={backdrop_click}
        >
            <style>
                {r#"
                    .booking-modal {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(6px);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                        z-index: 1000;
                    }
                    .booking-modal.show {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .modal-content {
                        position: relative;
                        width: 100%;
                        max-width: 560px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #1a1a1a;
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        color: #fff;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #999;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .progress-bar {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 2rem;
                    }
                    .progress-step {
                        flex: 1;
                        text-align: center;
                        padding: 0.5rem;
                        border-bottom: 3px solid #333;
                        color: #777;
                    }
                    .progress-step.active {
                        border-color: #1E90FF;
                        color: #fff;
                    }
                    .progress-step.completed {
                        border-color: #4CAF50;
                    }
                    .form-step { display: none; }
                    .form-step.active { display: block; }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .form-group label {
                        margin-bottom: 0.4rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .form-group input, .form-group select, .form-group textarea {
                        padding: 0.75rem;
                        border-radius: 8px;
                        border: 1px solid #333;
                        background: #111;
                        color: #fff;
                    }
                    .required { color: #ff6b6b; }
                    .form-nav {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .form-nav button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        border: none;
                        cursor: pointer;
                    }
                    .next-step, .submit-btn {
                        background: #1E90FF;
                        color: #fff;
                        margin-left: auto;
                    }
                    .submit-btn:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                "#}
            </style>
            <div class="modal-content">
                <button type="button" class="modal-close" onclick={close}>{"×"}</button>
                <h2>{"Book a consultation"}</h2>
                <div class="progress-bar">
                    { for wizard.progress_markers().into_iter().zip(form.steps()).map(|(marker, step)| html! {
                        <div class={classes!(
                            "progress-step",
                            marker.active.then(|| "active"),
                            marker.completed.then(|| "completed")
                        )}>
                            {step.title}
                        </div>
                    }) }
                </div>
                <form id="consultation-form" novalidate=true {onsubmit}>
                    { for form.steps().iter().enumerate().map(|(idx, step)| {
                        let number = idx + 1;
                        html! {
                            <div
                                class={classes!("form-step", wizard.is_step_active(number).then(|| "active"))}
                                data-step={number.to_string()}
                            >
                                { for step.fields.iter().map(&render_field) }
                            </div>
                        }
                    }) }
                    <div class="form-nav">
                        if !wizard.is_first() {
                            <button type="button" class="prev-step" onclick={prev_step}>{"Back"}</button>
                        }
                        if wizard.is_last() {
                            <button type="submit" class="submit-btn" disabled={*loading}>
                                if *loading {
                                    <span class="btn-loading">{"Booking..."}</span>
                                } else {
                                    <span class="btn-text">{"Book consultation"}</span>
                                }
                            </button>
                        } else {
                            <button type="button" class="next-step" onclick={next_step}>{"Next"}</button>
                        }
                    </div>
                </form>
            </div>
        </div>
    }
}
