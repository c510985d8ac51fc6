use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="glassmorphism p-4 rounded-2xl text-center transform \
                    hover:-translate-y-1 transition-transform duration-300">
            <span class="text-4xl">{props.icon.clone()}</span>
            <div class="text-3xl font-bold mt-2 text-white">{props.value.clone()}</div>
            <div class="text-sm text-white/70">{props.label.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component]
pub fn FeatureCard(props: &FeatureCardProps) -> Html {
    html! {
        <div class="glassmorphism p-6 rounded-2xl text-center transform \
                    hover:-translate-y-1 hover:shadow-xl transition-all duration-300">
            <span class="text-4xl">{props.icon.clone()}</span>
            <h3 class="text-xl font-bold mt-4 text-white">{props.title.clone()}</h3>
            <p class="text-sm text-white/70 mt-2">{props.description.clone()}</p>
        </div>
    }
}
