use yew::prelude::*;

/// Smoothly scrolls `anchor` into view every time `key` changes.
///
/// Put the anchor after the last item of a list and key it on whatever
/// identifies the list contents.
#[hook]
pub fn use_scroll_to_latest<K>(anchor: NodeRef, key: K)
where
    K: PartialEq + 'static,
{
    use_effect_with(key, move |_| {
        if let Some(element) = anchor.cast::<web_sys::Element>() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}
