use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::section::Section;

pub const OWNER_NAME: &str = "Ahmed Mamdouh";
pub const OWNER_SURNAME: &str = "Sadek";

/// Smoothly scrolls the element with `section_id` into view. Missing targets are ignored.
pub fn scroll_to_section(section_id: &str) {
    let el = if let Some(el) = document().get_element_by_id(section_id) {
        el
    } else {
        log::debug!("no scroll target with id {section_id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-white/90 backdrop-blur-sm z-40 border-b border-gray-100">
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <button
                        class="text-xl font-bold text-gray-900"
                        on:click=move |_| {
                            window().scroll_to_with_x_and_y(0.0, 0.0);
                        }
                    >
                        {OWNER_NAME}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-gray-600 hover:text-blue-600 transition-colors"
                                        on:click=move |_| scroll_to_section(section.id())
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
