use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::dom;

const REEL_EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1";

const VIDEO_MODAL_STYLES: &str = r#"
.video-modal {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.85);
    opacity: 0;
    transition: opacity 0.3s ease;
    z-index: 1500;
}
.video-modal.show { opacity: 1; }
.video-modal-content {
    position: relative;
    width: 90%;
    max-width: 960px;
    aspect-ratio: 16 / 9;
}
.video-close {
    position: absolute;
    top: -2.5rem;
    right: 0;
    background: none;
    border: none;
    color: #fff;
    font-size: 2rem;
    cursor: pointer;
}
"#;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Embedded reel player. The iframe stays mounted through the fade-out and is
/// dropped afterwards so playback stops.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let mounted = use_state(|| false);
    let visible = use_state(|| false);

    {
        let mounted = mounted.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |open| {
                let timeout = if *open {
                    mounted.set(true);
                    dom::set_scroll_locked(true);
                    Timeout::new(10, move || visible.set(true))
                } else {
                    visible.set(false);
                    dom::set_scroll_locked(false);
                    Timeout::new(config::MODAL_TRANSITION_MS, move || mounted.set(false))
                };
                move || drop(timeout)
            },
            props.open,
        );
    }

    if !*mounted {
        return html! {};
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

    html! {
        <div class={classes!("video-modal", (*visible).then(|| "show"))} onclick={backdrop_click}>
            <style>{VIDEO_MODAL_STYLES}</style>
            <div class="video-modal-content">
                <button type="button" class="video-close" onclick={close}>{"×"}</button>
                <iframe
                    width="100%"
                    height="100%"
                    src={REEL_EMBED_URL}
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_carries_its_own_styles() {
        for class in [".video-modal.show", ".video-modal-content", ".video-close"] {
            assert!(VIDEO_MODAL_STYLES.contains(class), "missing {class}");
        }
    }
}
