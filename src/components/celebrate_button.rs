use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::content::CELEBRATE_LABEL;

#[derive(Properties, PartialEq)]
pub struct CelebrateButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CelebrateButton)]
pub fn celebrate_button(props: &CelebrateButtonProps) -> Html {
    html! {
        <div class="celebrate-wrapper">
            <button class="celebrate-btn" type="button" onclick={props.onclick.clone()}>
                { CELEBRATE_LABEL }
                <span class="celebrate-icon"><Icon icon_id={IconId::HeroiconsOutlineSparkles} width={"20"} height={"20"} /></span>
            </button>
        </div>
    }
}
