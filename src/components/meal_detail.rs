//! Meal Detail Component
//!
//! Full view of one item. Resolution order: override record, user-created
//! item, the cached bulk fetch, and finally a direct single-item fetch so
//! deep links work without re-fetching the whole list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Screen};
use crate::models::CatalogItem;
use crate::reconcile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MealDetail(id: String) -> impl IntoView {
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
                        &format!("[DETAIL] lookup failed: {err}").into(),
                    );
                    set_missing.set(true);
                }
            }
        });
    });

    let meal = Memo::new(move |_| resolved.get().or_else(|| fetched.get()));

    view! {
        {move || match meal.get() {
            Some(item) => detail_card(item).into_any(),
            None if missing.get() => view! {
                <div class="not-found">
                    <h2>"Meal not found"</h2>
                    <button class="back-link" on:click=move |_| ctx.show_list()>
                        "← Back to all meals"
                    </button>
                </div>
            }
            .into_any(),
            None => view! { <p class="loading">"Loading meal details..."</p> }.into_any(),
        }}
    }
}

fn detail_card(item: CatalogItem) -> impl IntoView {
    let ctx = use_app_context();
    let edit_id = item.id.clone();
    let thumb = item
        .thumb
        .clone()
        .unwrap_or_else(|| "/default-meal.jpg".to_string());
    let paragraphs: Vec<String> = item
        .instructions
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    view! {
        <div class="detail-card">
            <div class="detail-header">
                <button class="back-link" on:click=move |_| ctx.show_list()>
                    "← Back to all meals"
                </button>
                <button
                    class="edit-link"
                    on:click=move |_| ctx.go_to(Screen::Edit(edit_id.clone()))
                >
                    "Edit"
                </button>
            </div>

            <div class="detail-body">
                <img class="detail-image" src=thumb alt=item.name.clone()/>

                <div class="detail-info">
                    <h1>{item.name.clone()}</h1>
                    <div class="detail-meta">
                        <span class="category">{item.category.clone()}</span>
                        <span class="area">{item.area.clone()}</span>
                        {item.tags.clone().map(|tags| view! {
                            <span class="tags">{tags}</span>
                        })}
                    </div>

                    {(!item.ingredients.is_empty()).then(|| view! {
                        <div class="detail-section">
                            <h3>"Ingredients"</h3>
                            <ul class="ingredients-list">
                                {item.ingredients.iter().map(|row| view! {
                                    <li>
                                        <span class="ingredient-name">{row.name.clone()}</span>
                                        <span class="ingredient-measure">{row.measure.clone()}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    })}

                    <div class="detail-section">
                        <h3>"Instructions"</h3>
                        {if paragraphs.is_empty() {
                            view! { <p>"No instructions available"</p> }.into_any()
                        } else {
                            paragraphs
                                .into_iter()
                                .map(|line| view! { <p>{line}</p> })
                                .collect_view()
                                .into_any()
                        }}
                    </div>

                    {item.nutrition.clone().map(|nutrition| view! {
                        <div class="detail-section">
                            <h3>"Nutrition (per 100g)"</h3>
                            <ul class="nutrition-list">
                                <li>{format!("Calories: {}", nutrition.calories)}</li>
                                <li>{format!("Carbohydrates: {}g", nutrition.carbohydrates)}</li>
                                <li>{format!("Protein: {}g", nutrition.protein)}</li>
                                <li>{format!("Fat: {}g", nutrition.fat)}</li>
                                <li>{format!("Sugar: {}g", nutrition.sugar)}</li>
                            </ul>
                        </div>
                    })}

                    {item.youtube.clone().map(|url| view! {
                        <div class="detail-section">
                            <h3>"Video Recipe"</h3>
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "Watch on YouTube"
                            </a>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
