use yew::prelude::*;
use crate::pages::thank_you::ThankYouPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="container">
            <ThankYouPage />
        </main>
    }
}
