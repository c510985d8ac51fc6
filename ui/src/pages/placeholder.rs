use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub title: AttrValue,
}

#[function_component]
pub fn ComingSoon(props: &ComingSoonProps) -> Html {
    html! {
        <div class="glassmorphism rounded-2xl p-8 text-center">
            <h1 class="text-4xl font-bold">{props.title.clone()}</h1>
            <p class="text-white/70 mt-2">{"Coming soon..."}</p>
        </div>
    }
}

#[function_component]
pub fn CommunityPage() -> Html {
    html! { <ComingSoon title="Community Page" /> }
}

#[function_component]
pub fn ProfilePage() -> Html {
    html! { <ComingSoon title="Profile Page" /> }
}
