//! Meal Card Component
//!
//! One tile in the list grid: thumbnail, name, category/area, like and
//! remove controls, and a badge for locally created items.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::models::CatalogItem;

use super::DeleteConfirmButton;

#[component]
pub fn MealCard(item: CatalogItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(item.id.clone());

    let liked = Memo::new(move |_| ctx.local.with(|local| local.is_liked(&id.get_value())));

    let open_detail = move |_| ctx.go_to(Screen::Detail(id.get_value()));
    let is_user_created = item.is_user_created();
    let thumb = item
        .thumb
        .clone()
        .unwrap_or_else(|| "/default-meal.jpg".to_string());

    view! {
        <div class="meal-card">
            <div class="card-image" on:click=open_detail>
                <img src=thumb alt=item.name.clone()/>
                {is_user_created.then(|| view! {
                    <span class="badge user-badge">"My meal"</span>
                })}
            </div>

            <div class="card-body">
                <h3 class="card-name" on:click=open_detail>{item.name.clone()}</h3>
                <div class="card-meta">
                    <span class="category">{item.category.clone()}</span>
                    <span class="area">{item.area.clone()}</span>
                </div>
            </div>

            <div class="card-actions">
                <button
                    class=move || if liked.get() { "like-btn active" } else { "like-btn" }
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.local.update(|local| local.toggle_like(&id.get_value()));
                    }
                >
                    "♥"
                </button>
                <button
                    class="edit-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.go_to(Screen::Edit(id.get_value()));
                    }
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| {
                        ctx.local.update(|local| local.remove(&id.get_value()));
                    })
                />
            </div>
        </div>
    }
}
