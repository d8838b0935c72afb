use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThankYouCardProps {
    /// Rendered before the title, e.g. an `<Icon>`.
    pub icon: Html,
    pub title: AttrValue,
    pub content: AttrValue,
}

#[function_component(ThankYouCard)]
pub fn thank_you_card(props: &ThankYouCardProps) -> Html {
    html! {
        <div class="card-hover">
            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">
                        { props.icon.clone() }
                        <span class="card-title-text">{ props.title.clone() }</span>
                    </h3>
                </div>
                <div class="card-content">
                    <p class="card-text">{ props.content.clone() }</p>
                </div>
            </div>
        </div>
    }
}
