//! Text Area Field Component
//!
//! Labelled multi-line input with an inline validation error line.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>
                {label}
                {required.then_some("*")}
            </label>
            <textarea
                rows=6
                placeholder=placeholder
                class=move || if error.get().is_some() { "error" } else { "" }
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    on_input.run(area.value());
                }
            ></textarea>
            {move || error.get().map(|message| view! {
                <span class="error-message">{message}</span>
            })}
        </div>
    }
}
