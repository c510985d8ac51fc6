use yew::prelude::*;

/// Sets the document title to `"<page> · <app name>"` whenever either part
/// changes.
#[hook]
pub fn use_title(page: &str, app_name: &str) {
    let title = format!("{page} · {app_name}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
