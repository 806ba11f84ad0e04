//! Two-step progress header: upload the Excel file, then send messages.

#[cfg(test)]
#[path = "step_indicator_test.rs"]
mod step_indicator_test;

use leptos::prelude::*;

use crate::state::upload::Step;

/// CSS modifier for the (upload, send) badges at a given step.
///
/// Upload is active until a file arrives and then reads as done; send stays
/// pending until then.
pub fn step_classes(step: Step) -> (&'static str, &'static str) {
    match step {
        Step::Upload => ("step step--active", "step step--pending"),
        Step::Send => ("step step--done", "step step--active"),
    }
}

#[component]
pub fn StepIndicator(#[prop(into)] step: Signal<Step>) -> impl IntoView {
    let classes = move || step_classes(step.get());

    view! {
        <div class="step-indicator">
            <div class=move || classes().0>
                <span class="step__number">"1"</span>
                <span class="step__label">"Excel Yükle"</span>
            </div>
            <div class="step-indicator__divider"></div>
            <div class=move || classes().1>
                <span class="step__number">"2"</span>
                <span class="step__label">"Mesaj Gönder"</span>
            </div>
        </div>
    }
}
