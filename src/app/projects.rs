use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::carousel::{ModalMsg, ModalState};
use crate::content::{Catalog, ProjectRecord};
use crate::gallery::{cards, CardSummary};

#[component]
pub fn ProjectGallery(catalog: &'static Catalog, on_msg: Callback<ModalMsg>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
            {cards(catalog.projects())
                .into_iter()
                .map(|card| view! { <ProjectCard card on_msg /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(card: CardSummary<'static>, on_msg: Callback<ModalMsg>) -> impl IntoView {
    let id = card.id;
    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1">
            <div class="relative">
                <img src=card.cover_image alt=card.title class="w-full h-48 object-cover" />
                <div class="absolute top-4 right-4 bg-white/90 backdrop-blur-sm px-2 py-1 rounded-full text-xs font-medium text-gray-700">
                    {format!("Project {}", card.position)}
                </div>
                {card
                    .image_overflow
                    .map(|badge| {
                        view! {
                            <div class="absolute bottom-4 left-4 bg-black/50 text-white px-2 py-1 rounded text-xs">
                                {badge}
                            </div>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 mb-3">{card.title}</h3>
                <p class="text-gray-600 mb-4 line-clamp-3">{card.short_description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {card
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-blue-100 text-blue-800 px-2 py-1 rounded text-sm font-medium">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {card
                        .tech_overflow
                        .map(|badge| {
                            view! {
                                <span class="bg-gray-100 text-gray-600 px-2 py-1 rounded text-sm">
                                    {badge}
                                </span>
                            }
                        })}
                </div>
                <div class="flex items-center justify-between">
                    <div class="flex items-center text-sm text-gray-500">
                        <span class="mr-1">"📈"</span>
                        <span>{card.headline_metric}</span>
                    </div>
                    <button
                        class="bg-blue-600 text-white px-4 py-2 rounded-lg text-sm font-semibold hover:bg-blue-700 transition-colors flex items-center"
                        on:click=move |_| on_msg.run(ModalMsg::Open(id.to_string()))
                    >
                        "View Details"
                        <span class="ml-1">"→"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Mounts the modal for whichever project `state` has open. The modal is only
/// rebuilt when the open project changes, not on every image change.
#[component]
pub fn ProjectModalHost(
    catalog: &'static Catalog,
    #[prop(into)] state: Signal<ModalState>,
    on_msg: Callback<ModalMsg>,
) -> impl IntoView {
    let open_id = Memo::new(move |_| state.with(|s| s.project_id().map(str::to_string)));
    let index = Signal::derive(move || state.with(|s| s.index().unwrap_or_default()));

    view! {
        {move || {
            open_id
                .get()
                .and_then(|id| catalog.find(&id))
                .map(|project| view! { <ProjectModal project index on_msg /> })
        }}
    }
}

#[component]
fn ProjectModal(
    project: &'static ProjectRecord,
    index: Signal<usize>,
    on_msg: Callback<ModalMsg>,
) -> impl IntoView {
    let count = project.images.len();

    let _ = use_event_listener(use_document(), ev::keydown, move |evt| {
        match evt.key().as_str() {
            "Escape" => on_msg.run(ModalMsg::Close),
            "ArrowRight" => on_msg.run(ModalMsg::Next),
            "ArrowLeft" => on_msg.run(ModalMsg::Prev),
            _ => {}
        }
    });

    let image = move || {
        project
            .images
            .get(index.get())
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div
            class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4"
            role="dialog"
            aria-modal="true"
            aria-label=project.title.as_str()
        >
            <div class="bg-white rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto">
                <div class="relative group">
                    <img
                        src=image
                        alt=project.title.as_str()
                        class="w-full h-96 md:h-[500px] object-contain bg-gray-100 rounded-t-2xl"
                    />
                    {(count > 1)
                        .then(|| {
                            view! {
                                <button
                                    class="absolute left-4 top-1/2 transform -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white w-10 h-10 rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity"
                                    aria-label="Previous image"
                                    on:click=move |_| on_msg.run(ModalMsg::Prev)
                                >
                                    "←"
                                </button>
                                <button
                                    class="absolute right-4 top-1/2 transform -translate-y-1/2 bg-black/50 hover:bg-black/70 text-white w-10 h-10 rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity"
                                    aria-label="Next image"
                                    on:click=move |_| on_msg.run(ModalMsg::Next)
                                >
                                    "→"
                                </button>
                                <div class="absolute bottom-4 left-1/2 transform -translate-x-1/2 flex space-x-2">
                                    {(0..count)
                                        .map(|i| {
                                            let label = format!("Show image {}", i + 1);
                                            view! {
                                                <button
                                                    class=move || {
                                                        if index.get() == i {
                                                            "w-2 h-2 rounded-full transition-colors bg-white"
                                                        } else {
                                                            "w-2 h-2 rounded-full transition-colors bg-white/50"
                                                        }
                                                    }
                                                    aria-label=label
                                                    on:click=move |_| on_msg.run(ModalMsg::Select(i))
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="absolute top-4 left-4 bg-black/50 text-white px-2 py-1 rounded text-sm">
                                    {move || format!("{} / {}", index.get() + 1, count)}
                                </div>
                            }
                        })}
                    <button
                        class="absolute top-4 right-4 bg-white/90 hover:bg-white text-gray-800 w-8 h-8 rounded-full flex items-center justify-center transition-colors"
                        aria-label="Close"
                        on:click=move |_| on_msg.run(ModalMsg::Close)
                    >
                        "×"
                    </button>
                </div>

                <div class="p-8">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">{project.title.as_str()}</h2>
                    <div
                        class="prose text-gray-600 mb-6 leading-relaxed"
                        inner_html=project.full_description.clone()
                    ></div>

                    <div class="grid md:grid-cols-2 gap-8 mb-8">
                        <div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Key Features"</h3>
                            <ul class="space-y-2">
                                {project
                                    .features
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <li class="flex items-start">
                                                <span class="w-2 h-2 bg-blue-600 rounded-full mt-2 mr-3 flex-shrink-0"></span>
                                                <span class="text-gray-600">{feature.as_str()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Project Metrics"</h3>
                            <div class="space-y-3">
                                {project
                                    .metrics
                                    .iter()
                                    .map(|metric| {
                                        view! {
                                            <div class="flex justify-between items-center">
                                                <span class="text-gray-600">{metric.display_label()}</span>
                                                <span class="font-semibold text-blue-600">
                                                    {metric.value.as_str()}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="mb-6">
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">"Technologies Used"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm font-medium">
                                            {tech.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex gap-4">
                        <a
                            href=project.demo_url.as_str()
                            class="bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors flex items-center"
                        >
                            <span class="mr-2">"↗"</span>
                            "View Demo"
                        </a>
                        <a
                            href=project.code_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-gray-800 text-white px-6 py-3 rounded-lg font-semibold hover:bg-gray-900 transition-colors flex items-center"
                        >
                            <i class="devicon-github-plain mr-2"></i>
                            "View Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
