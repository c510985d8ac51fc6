use payloads::responses::MessageAuthor;
use yew::prelude::*;

/// Renders a circular avatar with the upper-cased first character of the
/// author's name.
pub fn render_author_avatar(author: &MessageAuthor) -> Html {
    html! {
        <div
            class="w-8 h-8 avatar-gradient rounded-full flex items-center \
                   justify-center font-bold text-sm flex-shrink-0"
            title={author.name.clone()}
        >
            {author.initial()}
        </div>
    }
}
