//! Ingredient Rows Component
//!
//! Editable list of name/measure pairs for the meal form. Rows only
//! re-render when one is added or removed; keystrokes write straight into
//! the draft without rebuilding the inputs (which would drop focus).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Ingredient;
use crate::validate::MealDraft;

#[component]
pub fn IngredientRows(
    draft: RwSignal<MealDraft>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let row_count = RwSignal::new(draft.with_untracked(|d| d.ingredients.len()));

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    view! {
        <div class="form-group ingredients-group">
            <label>"Ingredients*"</label>

            {move || {
                let count = row_count.get();
                (0..count)
                    .map(|index| {
                        let row = draft.with_untracked(|d| {
                            d.ingredients.get(index).cloned().unwrap_or_default()
                        });
                        view! {
                            <div class="ingredient-row">
                                <input
                                    type="text"
                                    placeholder="Ingredient"
                                    value=row.name.clone()
                                    on:input=move |ev| {
                                        let value = input_value(&ev);
                                        draft.update(|d| d.ingredients[index].name = value);
                                    }
                                />
                                <input
                                    type="text"
                                    placeholder="Measure"
                                    value=row.measure.clone()
                                    on:input=move |ev| {
                                        let value = input_value(&ev);
                                        draft.update(|d| d.ingredients[index].measure = value);
                                    }
                                />
                                <button
                                    type="button"
                                    class="remove-row-btn"
                                    disabled=count == 1
                                    on:click=move |_| {
                                        draft.update(|d| {
                                            if d.ingredients.len() > 1 {
                                                d.ingredients.remove(index);
                                            }
                                        });
                                        row_count.set(draft.with_untracked(|d| d.ingredients.len()));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <button
                type="button"
                class="add-row-btn"
                on:click=move |_| {
                    draft.update(|d| d.ingredients.push(Ingredient::default()));
                    row_count.set(draft.with_untracked(|d| d.ingredients.len()));
                }
            >
                "+ Add ingredient"
            </button>

            {move || error.get().map(|message| view! {
                <span class="error-message">{message}</span>
            })}
        </div>
    }
}
