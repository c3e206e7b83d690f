use crate::controller::{ControlsHandle, PreferenceControls, same_handle};
use a11y_core::{ContrastLabel, Preferences};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub controls: ControlsHandle,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        same_handle(&self.controls, &other.controls)
    }
}

fn action(
    controls: &ControlsHandle,
    prefs: &UseStateHandle<Preferences>,
    run: fn(&dyn PreferenceControls) -> Preferences,
) -> Callback<MouseEvent> {
    let controls = controls.clone();
    let prefs = prefs.clone();
    Callback::from(move |_| prefs.set(run(&*controls)))
}

/// Font size and contrast buttons, rendered into `#accessibility-controls`.
#[function_component(AccessibilityControls)]
pub fn accessibility_controls(p: &Props) -> Html {
    let prefs = {
        let controls = p.controls.clone();
        use_state(move || controls.preferences())
    };

    let on_decrease = action(&p.controls, &prefs, |c| c.decrease_font_size());
    let on_reset = action(&p.controls, &prefs, |c| c.reset_font_size());
    let on_increase = action(&p.controls, &prefs, |c| c.increase_font_size());
    let on_contrast = action(&p.controls, &prefs, |c| c.toggle_high_contrast());

    let label = ContrastLabel::for_state(prefs.high_contrast_enabled);
    let weight = format!("font-weight: {}", label.font_weight());
    let pressed = if label.bold { "true" } else { "false" };

    html! {
      <>
        <button type="button" class="font-decrease" aria-label="Decrease font size" onclick={on_decrease}>{ "A-" }</button>
        <button type="button" class="font-reset" aria-label="Reset font size" onclick={on_reset}>{ "A" }</button>
        <button type="button" class="font-increase" aria-label="Increase font size" onclick={on_increase}>{ "A+" }</button>
        <button type="button" class="contrast-btn" aria-pressed={pressed} style={weight} onclick={on_contrast}>{ label.text }</button>
      </>
    }
}
