use yew::prelude::*;

use crate::celebration::ConfettiKey;

#[derive(Properties, PartialEq)]
pub struct CelebrationOverlayProps {
    pub confetti_key: ConfettiKey,
}

/// Empty full-screen layer. Keyed by `confetti_key` so every completed
/// celebration mounts a fresh element and replays its fade-in.
#[function_component(CelebrationOverlay)]
pub fn celebration_overlay(props: &CelebrationOverlayProps) -> Html {
    if !props.confetti_key.overlay_visible() {
        return html! {};
    }
    let cycle = props.confetti_key.0.to_string();
    html! {
        <div key={cycle.clone()} class="celebration-overlay fade-in" data-cycle={cycle}></div>
    }
}
