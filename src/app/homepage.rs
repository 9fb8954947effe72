use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};

use crate::carousel::{ModalMsg, ModalState};
use crate::content::{catalog, ContentError};
use crate::section::Section;

use super::contact::{Contact, Footer};
use super::expertise::{Services, Skills};
use super::header::{scroll_to_section, Header, OWNER_NAME, OWNER_SURNAME};
use super::projects::{ProjectGallery, ProjectModalHost};

/// Renders the whole single-page portfolio. Owns the modal state and hands
/// children a read-only view of it plus one update callback.
#[component]
pub fn HomePage() -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());

    let (gallery, modal_host) = match catalog() {
        Ok(catalog) => {
            let on_msg = Callback::new(move |msg: ModalMsg| {
                modal.update(|state| state.apply(msg, catalog));
            });
            (
                Either::Left(view! { <ProjectGallery catalog on_msg /> }),
                Some(view! { <ProjectModalHost catalog state=modal on_msg /> }),
            )
        }
        Err(err) => {
            log::error!("project content unavailable: {err}");
            (Either::Right(view! { <ContentUnavailable err /> }), None)
        }
    };

    view! {
        <Title text="Data Scientist | Machine Learning & AI Developer" />
        <Meta
            name="description"
            content="Data scientist building machine learning models, recommendation systems and databases."
        />
        <div class="min-h-screen bg-white">
            <Header />
            <Hero />
            <About />
            <Education />
            <Skills />
            <Experience />
            <Services />
            <section id=Section::Projects.id() class="py-20 bg-gray-50">
                <div class="max-w-6xl mx-auto px-6">
                    <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">
                        "Featured Projects"
                    </h2>
                    {gallery}
                    <div class="text-center">
                        <p class="text-gray-600 mb-4">
                            "Interested in seeing more projects or discussing a collaboration?"
                        </p>
                        <button
                            class="bg-gray-800 text-white px-6 py-3 rounded-lg font-semibold hover:bg-gray-900 transition-colors"
                            on:click=move |_| scroll_to_section(Section::Contact.id())
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>
            </section>
            <Achievements />
            <Contact />
            <Footer />
            {modal_host}
        </div>
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-8 shadow-lg text-center text-gray-600 mb-12">
            <p class="font-semibold text-gray-900 mb-2">"Projects are unavailable right now."</p>
            <p class="text-sm">{err.to_string()}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-blue-50 via-white to-blue-50">
            <div class="absolute inset-0">
                <div class="absolute top-20 left-10 w-32 h-32 bg-blue-400/20 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-10 w-40 h-40 bg-teal-400/20 rounded-full blur-3xl"></div>
            </div>
            <div class="relative z-10 text-center max-w-4xl mx-auto px-6">
                <h1 class="text-5xl md:text-7xl font-bold text-gray-900 mb-6">
                    {OWNER_NAME}
                    " "
                    <span class="text-blue-600">{OWNER_SURNAME}</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-8">
                    "Data Scientist | Machine Learning & AI Developer"
                </p>
                <button
                    class="bg-blue-600 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:bg-blue-700 shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-200"
                    on:click=move |_| scroll_to_section(Section::Contact.id())
                >
                    "Hire Me"
                </button>
            </div>
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-gray-400 text-2xl">
                "⌄"
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let facts = [
        "Computer Engineering Student",
        "Freelance Data Scientist",
        "AI & ML Specialist",
        "Database Design Expert",
    ];
    view! {
        <section id=Section::About.id() class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-4xl font-bold text-gray-900 mb-6">"About Me"</h2>
                        <p class="text-gray-600 mb-6 leading-relaxed">
                            "Hi, I'm Ahmed Mamdouh, a Data Scientist with a Computer Engineering background from Helwan University. "
                            "I specialize in turning raw data into actionable insights and building AI models that solve real-world problems. "
                            "With experience in database design, data preprocessing, and deploying machine learning models, I act as the "
                            "bridge between raw data and practical solutions."
                        </p>
                        <p class="text-gray-600 leading-relaxed">
                            "I'm passionate about creating impactful projects, from recommendation systems to predictive analytics, "
                            "always with the goal of helping businesses and individuals make smarter decisions."
                        </p>
                    </div>
                    <div class="bg-gradient-to-br from-blue-50 to-teal-50 p-8 rounded-2xl">
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-3">"👤"</span>
                            <h3 class="text-xl font-semibold text-gray-900">"Quick Facts"</h3>
                        </div>
                        <ul class="space-y-3 text-gray-600">
                            {facts
                                .into_iter()
                                .map(|fact| {
                                    view! {
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 bg-blue-600 rounded-full mr-3"></span>
                                            {fact}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    let courses = [
        "Data Science",
        "Machine Learning",
        "Artificial Intelligence",
        "Electronic Measurements & Sensors",
    ];
    view! {
        <section class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">"Education"</h2>
                <div class="bg-white rounded-2xl p-8 shadow-lg">
                    <div class="flex items-start">
                        <div class="bg-blue-100 p-3 rounded-lg mr-6 text-3xl">"🎓"</div>
                        <div class="flex-1">
                            <h3 class="text-2xl font-bold text-gray-900 mb-2">
                                "B.Sc. in Computer Engineering"
                            </h3>
                            <p class="text-blue-600 font-semibold mb-2">
                                "Faculty of Engineering, Helwan University"
                            </p>
                            <p class="text-gray-600 mb-4">
                                "Computer and Systems Department (Ongoing)"
                            </p>
                            <div class="bg-gray-50 p-4 rounded-lg">
                                <h4 class="font-semibold text-gray-900 mb-2">"Relevant Courses:"</h4>
                                <div class="flex flex-wrap gap-2">
                                    {courses
                                        .into_iter()
                                        .map(|course| {
                                            view! {
                                                <span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm">
                                                    {course}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">"Work Experience"</h2>
                <div class="bg-white rounded-2xl p-8 shadow-lg">
                    <div class="flex items-start">
                        <div class="bg-green-100 p-3 rounded-lg mr-6 text-3xl">"💼"</div>
                        <div class="flex-1">
                            <h3 class="text-2xl font-bold text-gray-900 mb-2">
                                "Freelance Data Scientist"
                            </h3>
                            <p class="text-green-600 font-semibold mb-4">"Upwork & Khamsat"</p>
                            <p class="text-gray-600 leading-relaxed">
                                "Helping startups and data-driven companies build predictive and analytical models, "
                                "from data preprocessing to deployment. Successfully delivered multiple projects "
                                "involving machine learning model development, database optimization, and AI-powered solutions."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Achievements() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">"Achievements"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="bg-gradient-to-br from-yellow-50 to-yellow-100 p-6 rounded-2xl">
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-3">"⭐"</span>
                            <h3 class="text-xl font-semibold text-gray-900">"Project Excellence"</h3>
                        </div>
                        <p class="text-gray-600">
                            "Delivered multiple academic and freelance projects successfully with high client satisfaction ratings."
                        </p>
                    </div>
                    <div class="bg-gradient-to-br from-blue-50 to-blue-100 p-6 rounded-2xl">
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-3">"🏅"</span>
                            <h3 class="text-xl font-semibold text-gray-900">"Academic Recognition"</h3>
                        </div>
                        <p class="text-gray-600">
                            "Recognized by instructors for excellence in Machine Learning course projects and innovative solutions."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
