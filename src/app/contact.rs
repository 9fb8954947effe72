use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::section::Section;

use super::header::{OWNER_NAME, OWNER_SURNAME};

const CONTACT_EMAIL: &str = "ahmedmamdouhelnajjar@hotmail.com";
const GITHUB_URL: &str = "https://github.com/AhmedELNajjar-dev";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ahmed-el-najjar";

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <section id=Section::Contact.id() class="py-20 bg-blue-600">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <h2 class="text-4xl font-bold text-white mb-6">
                    "Let's Build Something Intelligent Together"
                </h2>
                <p class="text-xl text-blue-100 mb-8">
                    "Reach out to me for collaborations or freelance projects. I'm always excited to work on challenging data science problems."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-8">
                    <a
                        href=mailto
                        class="bg-white text-blue-600 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors flex items-center"
                    >
                        <span class="mr-2">"📧"</span>
                        {CONTACT_EMAIL}
                    </a>
                    <div class="flex gap-4">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-blue-700 text-white p-3 rounded-lg hover:bg-blue-800 transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-blue-700 text-white p-3 rounded-lg hover:bg-blue-800 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </div>
                <p class="text-blue-100">
                    "Available for freelance projects and full-time opportunities"
                </p>
            </div>
        </section>
    }
}

/// Year the site was built, taken from the `BUILD_TIME` stamp written by build.rs.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2024)
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <p>{format!("© {} {OWNER_NAME} {OWNER_SURNAME}. All rights reserved.", copyright_year())}</p>
            </div>
        </footer>
    }
}
