use leptos::prelude::*;

use crate::section::Section;

struct SkillGroup {
    icon: &'static str,
    title: &'static str,
    card_class: &'static str,
    items: &'static [&'static str],
}

static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        icon: "💻",
        title: "Programming",
        card_class: "from-blue-50 to-blue-100",
        items: &["Python", "SQL", "HTML/CSS", "React", "FastAPI"],
    },
    SkillGroup {
        icon: "🧠",
        title: "Machine Learning",
        card_class: "from-teal-50 to-teal-100",
        items: &[
            "Data Cleaning",
            "Preprocessing",
            "Feature Engineering",
            "KNN Algorithm",
            "Recommendation Systems",
        ],
    },
    SkillGroup {
        icon: "⚙️",
        title: "Tools & Libraries",
        card_class: "from-purple-50 to-purple-100",
        items: &["Pandas", "NumPy", "Scikit-learn", "Flask", "Matplotlib"],
    },
    SkillGroup {
        icon: "🗄️",
        title: "Other Skills",
        card_class: "from-green-50 to-green-100",
        items: &[
            "Database Design",
            "Data Visualization",
            "Model Deployment",
            "API Development",
            "Web Applications",
        ],
    },
];

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    card_class: &'static str,
    icon_class: &'static str,
}

static SERVICES: [Service; 6] = [
    Service {
        icon: "⚙️",
        title: "Data Cleaning & Preprocessing",
        blurb: "Transform raw, messy data into clean, structured datasets ready for analysis and modeling.",
        card_class: "from-blue-50 to-blue-100",
        icon_class: "bg-blue-600",
    },
    Service {
        icon: "🧠",
        title: "ML Model Development",
        blurb: "Build custom machine learning models tailored to your specific business needs and objectives.",
        card_class: "from-teal-50 to-teal-100",
        icon_class: "bg-teal-600",
    },
    Service {
        icon: "🎯",
        title: "AI-Powered Recommendations",
        blurb: "Develop intelligent recommendation systems that personalize user experiences and drive engagement.",
        card_class: "from-purple-50 to-purple-100",
        icon_class: "bg-purple-600",
    },
    Service {
        icon: "🏆",
        title: "Predictive Analytics",
        blurb: "Forecast trends and outcomes using advanced statistical models and machine learning techniques.",
        card_class: "from-green-50 to-green-100",
        icon_class: "bg-green-600",
    },
    Service {
        icon: "🚀",
        title: "Model Deployment",
        blurb: "Deploy machine learning models as web APIs and applications for real-world use.",
        card_class: "from-orange-50 to-orange-100",
        icon_class: "bg-orange-600",
    },
    Service {
        icon: "🗄️",
        title: "Database Design & Optimization",
        blurb: "Design efficient database schemas and optimize queries for better performance.",
        card_class: "from-red-50 to-red-100",
        icon_class: "bg-red-600",
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">
                    "Skills & Expertise"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            let card_class = format!(
                                "bg-gradient-to-br {} p-6 rounded-2xl",
                                group.card_class,
                            );
                            view! {
                                <div class=card_class>
                                    <div class="text-3xl mb-4">{group.icon}</div>
                                    <h3 class="text-xl font-bold text-gray-900 mb-3">
                                        {group.title}
                                    </h3>
                                    <ul class="text-gray-600 space-y-1">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| view! { <li>{*item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl font-bold text-gray-900 mb-12 text-center">
                    "Services Offered"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            let card_class = format!(
                                "bg-gradient-to-br {} p-6 rounded-2xl hover:shadow-lg transition-shadow",
                                service.card_class,
                            );
                            let icon_class = format!(
                                "{} w-12 h-12 rounded-lg flex items-center justify-center mb-4 text-2xl",
                                service.icon_class,
                            );
                            view! {
                                <div class=card_class>
                                    <div class=icon_class>{service.icon}</div>
                                    <h3 class="text-xl font-bold text-gray-900 mb-3">
                                        {service.title}
                                    </h3>
                                    <p class="text-gray-600">{service.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
