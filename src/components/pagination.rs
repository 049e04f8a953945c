//! Pagination Component
//!
//! Previous/next plus a window of numbered page buttons with ellipsis gaps.

use leptos::prelude::*;

use crate::filter::Page;

const MAX_VISIBLE_PAGES: usize = 5;

/// Page buttons to show for `current` of `total` pages; `None` is an
/// ellipsis gap.
pub fn page_numbers(current: usize, total: usize) -> Vec<Option<usize>> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Some).collect();
    }

    let half = MAX_VISIBLE_PAGES / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = current + half;
    if start == 1 {
        end = MAX_VISIBLE_PAGES;
    }
    if end > total {
        end = total;
        start = total - MAX_VISIBLE_PAGES + 1;
    }

    let mut pages = Vec::new();
    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }
    for number in start..=end {
        pages.push(Some(number));
    }
    if end < total {
        if end < total - 1 {
            pages.push(None);
        }
        pages.push(Some(total));
    }
    pages
}

#[component]
pub fn Pagination(page: RwSignal<usize>, page_data: Memo<Page>) -> impl IntoView {
    view! {
        <Show when=move || { page_data.get().total_pages > 1 }>
            <div class="pagination">
                <button
                    class="nav-button"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|current| *current -= 1)
                >
                    "Previous"
                </button>

                {move || {
                    let data = page_data.get();
                    page_numbers(data.current, data.total_pages)
                        .into_iter()
                        .map(|entry| match entry {
                            Some(number) => {
                                let class = if number == data.current {
                                    "page-button active"
                                } else {
                                    "page-button"
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| page.set(number)
                                    >
                                        {number}
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! {
                                <button class="page-button" disabled=true>"..."</button>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class="nav-button"
                    disabled=move || page.get() >= page_data.get().total_pages
                    on:click=move |_| page.update(|current| *current += 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_pages_show_all_numbers() {
        assert_eq!(
            page_numbers(2, 3),
            vec![Some(1), Some(2), Some(3)]
        );
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_window_at_start_has_trailing_ellipsis() {
        assert_eq!(
            page_numbers(1, 9),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(9)]
        );
    }

    #[test]
    fn test_window_in_middle_has_both_ellipses() {
        assert_eq!(
            page_numbers(5, 9),
            vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(9)]
        );
    }

    #[test]
    fn test_window_at_end_has_leading_ellipsis() {
        assert_eq!(
            page_numbers(9, 9),
            vec![Some(1), None, Some(5), Some(6), Some(7), Some(8), Some(9)]
        );
    }
}
