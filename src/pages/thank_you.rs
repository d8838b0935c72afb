use yew::prelude::*;
use yew_icons::Icon;

use crate::celebration::{Celebration, CelebrationConfig, CelebrationRegistry, ConfettiAction, ConfettiKey};
use crate::components::{CelebrateButton, CelebrationOverlay, ThankYouCard};
use crate::content::{CARDS, CLOSING_MESSAGE, HEADING, SUBTITLE};

#[function_component(ThankYouPage)]
pub fn thank_you_page() -> Html {
    let confetti_key = use_reducer(ConfettiKey::default);
    let celebrations = use_mut_ref(CelebrationRegistry::default);

    // Stop any bursts still running when the page goes away.
    {
        let celebrations = celebrations.clone();
        use_effect_with((), move |_| {
            move || {
                celebrations.borrow_mut().cancel_all();
            }
        });
    }

    let on_celebrate = {
        let confetti_key = confetti_key.clone();
        let celebrations = celebrations.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = confetti_key.dispatcher();
            let on_complete = Callback::from(move |_: ()| dispatcher.dispatch(ConfettiAction::Bump));
            let celebration = Celebration::start(CelebrationConfig::default(), on_complete);
            celebrations.borrow_mut().launch(celebration);
        })
    };

    let cards = CARDS.iter().map(|card| {
        let icon = html! {
            <span class={classes!("card-icon", card.accent)}>
                <Icon icon_id={card.icon} width={"32"} height={"32"} />
            </span>
        };
        html! {
            <ThankYouCard key={card.title} {icon} title={card.title} content={card.text} />
        }
    });

    html! {
        <div class="thank-you-page">
            <div class="hero rise-in">
                <h1 class="hero-title pulse">{ HEADING }</h1>
                <p class="hero-subtitle fade-in delay-500">{ SUBTITLE }</p>
            </div>

            <div class="card-grid fade-in delay-1000">
                { for cards }
            </div>

            <CelebrateButton onclick={on_celebrate} />

            <p class="closing-message fade-in-dim delay-1500">{ CLOSING_MESSAGE }</p>

            <CelebrationOverlay confetti_key={*confetti_key} />
        </div>
    }
}
