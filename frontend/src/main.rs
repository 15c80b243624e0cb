use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod dom;
mod newsletter;
mod booking {
    pub mod form;
    pub mod pipeline;
    pub mod session;
    pub mod validation;
    pub mod wizard;
}
mod components {
    pub mod booking_modal;
    pub mod newsletter_form;
    pub mod notification;
    pub mod video_modal;
}
mod pages {
    pub mod landing;
}

use components::booking_modal::BookingModal;
use components::notification::{NotificationSlot, Notifier, Toast};
use components::video_modal::VideoModal;
use pages::landing::{Landing, NAV_SECTIONS};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

// Nav turns opaque once the page has scrolled this far
const SCROLLED_THRESHOLD: i32 = 100;

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > SCROLLED_THRESHOLD);
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
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
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let book = {
        let menu_open = menu_open.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_book.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 900;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.8);
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
                    .nav-logo { color: #fff; font-weight: bold; text-decoration: none; }
                    .nav-links { display: flex; gap: 1.5rem; align-items: center; }
                    .nav-link { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
                    .nav-cta {
                        background: #1E90FF;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        text-decoration: none;
                    }
                    .mobile-menu-btn {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .mobile-menu-btn span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .mobile-menu-btn { display: flex; }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(26, 26, 26, 0.95);
                            padding: 1.5rem;
                        }
                        .nav-links.active { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"agency.io"}
                </Link<Route>>

                <button
                    class={classes!("mobile-menu-btn", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={book}>{"Book a consultation"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let notifications = use_reducer(NotificationSlot::default);
    let booking_open = use_state(|| false);
    let video_open = use_state(|| false);

    let notifier = {
        let notifications = notifications.clone();
        Notifier::new(Callback::from(move |action| notifications.dispatch(action)))
    };
    let toast_dispatch = {
        let notifications = notifications.clone();
        Callback::from(move |action| notifications.dispatch(action))
    };

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| {
            info!("Opening booking modal");
            booking_open.set(true);
        })
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };
    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(true))
    };
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(false))
    };

    let switch = {
        let open_booking = open_booking.clone();
        let notifier = notifier.clone();
        move |route: Route| match route {
            Route::Home => html! {
                <Landing
                    on_book={open_booking.clone()}
                    on_watch_reel={open_video.clone()}
                    notifier={notifier.clone()}
                />
            },
            Route::NotFound => html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
                </div>
            },
        }
    };

    html! {
        <BrowserRouter>
            <Nav on_book={open_booking} />
            <Switch<Route> render={switch} />
            <BookingModal open={*booking_open} on_close={close_booking} {notifier} />
            <VideoModal open={*video_open} on_close={close_video} />
            <Toast current={notifications.current().cloned()} dispatch={toast_dispatch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
