//! Meal Form Component
//!
//! Create and edit form. Validation runs on submit; a clean draft is
//! written to the local store (new items get a timestamped `user-` id,
//! edits of remote items become overrides) and the app navigates to the
//! item's detail view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Screen};
use crate::models::{CatalogItem, Ingredient};
use crate::reconcile;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate::{validate, FieldErrors, MealDraft};

use super::{IngredientRows, InputField, TextAreaField};

#[component]
pub fn MealForm(#[prop(optional, into)] initial: Option<CatalogItem>) -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(match &initial {
        Some(item) => MealDraft::from_item(item),
        None => MealDraft {
            ingredients: vec![Ingredient::default()],
            ..Default::default()
        },
    });
    let errors = RwSignal::new(FieldErrors::new());
    let editing = StoredValue::new(initial);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.with(|all| all.get(key).cloned()))
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let found = validate(&current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());

        match editing.get_value() {
            Some(item) => {
                let updated = current.into_item(item.id.clone(), item.nutrition.clone());
                ctx.local.update(|local| local.record_edit(updated));
                ctx.go_to(Screen::Detail(item.id));
            }
            None => {
                let item = current.into_item(String::new(), None);
                let now_ms = js_sys::Date::now() as u64;
                let mut created_id = String::new();
                ctx.local.update(|local| {
                    created_id = local.create_user_item(item, now_ms).id;
                });
                ctx.go_to(Screen::Detail(created_id));
            }
        }
    };

    let heading = if editing.with_value(Option::is_some) {
        "Edit meal"
    } else {
        "Add a meal"
    };

    view! {
        <form class="meal-form" on:submit=submit>
            <div class="form-header">
                <button type="button" class="back-link" on:click=move |_| ctx.show_list()>
                    "← Back to all meals"
                </button>
                <h2>{heading}</h2>
            </div>

            <InputField
                label="Name"
                placeholder="Spaghetti Carbonara"
                required=true
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.name = value))
                error=field_error("name")
            />
            <InputField
                label="Category"
                placeholder="Pasta"
                required=true
                value=Signal::derive(move || draft.with(|d| d.category.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.category = value))
                error=field_error("category")
            />
            <InputField
                label="Cuisine"
                placeholder="Italian"
                required=true
                value=Signal::derive(move || draft.with(|d| d.area.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.area = value))
                error=field_error("area")
            />

            <TextAreaField
                label="Instructions"
                placeholder="Step by step..."
                required=true
                value=Signal::derive(move || draft.with(|d| d.instructions.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.instructions = value))
                error=field_error("instructions")
            />

            <IngredientRows draft=draft error=field_error("ingredients")/>

            <InputField
                label="Tags"
                placeholder="Comfort,Weeknight"
                value=Signal::derive(move || draft.with(|d| d.tags.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.tags = value))
                error=field_error("tags")
            />
            <InputField
                label="Video URL"
                placeholder="https://youtube.com/..."
                value=Signal::derive(move || draft.with(|d| d.youtube.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.youtube = value))
                error=field_error("youtube")
            />
            <InputField
                label="Image URL"
                placeholder="https://..."
                value=Signal::derive(move || draft.with(|d| d.thumb.clone()))
                on_input=Callback::new(move |value| draft.update(|d| d.thumb = value))
                error=field_error("thumb")
            />

            <div class="form-actions">
                <button type="submit" class="submit-btn">"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.show_list()>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

/// Edit screen wrapper: resolves the id through the usual chain (override,
/// user item, cached fetch) and falls back to a single-item fetch before
/// showing the form.
#[component]
pub fn EditMeal(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = StoredValue::new(id);

    let resolved = Memo::new(move |_| {
        let remote = store.remote_items().read();
        ctx.local.with(|local| {
            reconcile::lookup(
                &id.get_value(),
                local.overrides(),
                local.user_items(),
                &remote,
            )
        })
    });

    let (fetched, set_fetched) = signal(None::<CatalogItem>);
    let (missing, set_missing) = signal(false);

    Effect::new(move |_| {
        if resolved.get().is_some() || fetched.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            match api::fetch_by_id(&id.get_value()).await {
                Ok(Some(item)) => set_fetched.set(Some(item)),
                Ok(None) => set_missing.set(true),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[EDIT] lookup failed: {err}").into(),
                    );
                    set_missing.set(true);
                }
            }
        });
    });

    view! {
        {move || match resolved.get().or_else(|| fetched.get()) {
            Some(item) => view! { <MealForm initial=item/> }.into_any(),
            None if missing.get() => view! {
                <p class="not-found">"Meal not found"</p>
            }
            .into_any(),
            None => view! { <p class="loading">"Loading meal..."</p> }.into_any(),
        }}
    }
}
