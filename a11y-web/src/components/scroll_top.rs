use crate::dom::ScrollListener;
use a11y_core::ScrollTopVisibility;
use yew::prelude::*;

/// Track scroll-to-top visibility from the window's scroll events.
///
/// Starts hidden; the listener is attached after mount and removed on
/// unmount.
#[hook]
pub fn use_scroll_top_visibility() -> ScrollTopVisibility {
    let visibility = use_state(ScrollTopVisibility::default);
    {
        let visibility = visibility.clone();
        use_effect_with((), move |()| {
            let listener = ScrollListener::attach(move |next| visibility.set(next));
            move || drop(listener)
        });
    }
    *visibility
}

/// Floating button that smooth-scrolls back to the top of the page.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visibility = use_scroll_top_visibility();
    let style = format!("display: {}", visibility.css_display());
    let onclick = Callback::from(|_: MouseEvent| crate::dom::scroll_to_top());
    html! {
      <button id="back-to-top" type="button" title="Back to top" aria-label="Back to top" {style} {onclick}>{ "↑" }</button>
    }
}
