use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::content::{Section, EDUCATION, INTERESTS, LANGUAGES, PROFILE, QUALITIES};

const CARD: &str = "p-8 rounded-2xl bg-white/5 backdrop-blur-lg border border-white/10";
const LOCATION: &[&str] = &[PROFILE.location];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="relative py-32 px-6">
            <div class="max-w-7xl mx-auto z-10">
                <SectionTitle text="À Propos" />
                <div class="grid md:grid-cols-2 gap-12">
                    <ProfileCard />
                    <div class="space-y-6">
                        <Education />
                        <div class=CARD>
                            <h3 class="text-2xl font-bold mb-6 text-blue-400">"Qualités"</h3>
                            <div class="flex flex-wrap gap-3">
                                {QUALITIES
                                    .iter()
                                    .map(|quality| view! {
                                        <span class="px-4 py-2 bg-gradient-to-r from-blue-600/30 to-cyan-600/30 rounded-full border border-blue-500/50">
                                            {*quality}
                                        </span>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class=CARD>
                            <h3 class="text-2xl font-bold mb-6 text-blue-400">"Langues"</h3>
                            <div class="space-y-2 text-gray-300">
                                {LANGUAGES
                                    .iter()
                                    .map(|language| view! {
                                        <p>{format!("{} {}: {}", language.flag, language.name, language.proficiency)}</p>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
                <Interests />
            </div>
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div class=CARD>
            <h3 class="text-2xl font-bold mb-6 text-blue-400">"Profil"</h3>
            <div class="space-y-4 text-gray-300">
                <ProfileLine icon="📍" title="Localisation" lines=LOCATION />
                <ProfileLine icon="📞" title="Téléphone" lines=PROFILE.phones />
                <ProfileLine icon="✉️" title="Email" lines=PROFILE.emails />
                <div class="pt-4 border-t border-white/10">
                    <p><span class="text-blue-400">"Âge: "</span>{PROFILE.age}</p>
                    <p><span class="text-blue-400">"Nationalité: "</span>{PROFILE.nationality}</p>
                    <p><span class="text-blue-400">"Situation: "</span>{PROFILE.situation}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileLine(
    icon: &'static str,
    title: &'static str,
    lines: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3">
            <span class="text-blue-400 mt-1 flex-shrink-0">{icon}</span>
            <div>
                <p class="font-semibold">{title}</p>
                {lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <div class=CARD>
            <h3 class="text-2xl font-bold mb-6 text-blue-400">"Éducation"</h3>
            <div class="space-y-4">
                {EDUCATION
                    .iter()
                    .map(|entry| view! {
                        <div class="border-l-2 border-blue-500 pl-4">
                            <p class="text-blue-400 font-semibold">{entry.years}</p>
                            <p class="font-bold">{entry.title}</p>
                            <p class="text-sm text-gray-400">{entry.institution}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Interests() -> impl IntoView {
    view! {
        <div class="mt-12">
            <h3 class="text-3xl font-bold mb-8 text-center">
                <span class="bg-gradient-to-r from-blue-400 to-cyan-500 bg-clip-text text-transparent">
                    "Centres d'Intérêt"
                </span>
            </h3>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                {INTERESTS
                    .iter()
                    .map(|interest| view! {
                        <div class="p-6 rounded-xl bg-white/5 backdrop-blur-lg border border-white/10 hover:border-blue-500/50 transition-all duration-300 hover:scale-105 text-center">
                            <div class="text-4xl mb-3">{interest.icon}</div>
                            <p class="font-bold mb-1">{interest.name}</p>
                            <p class="text-xs text-gray-400">{interest.detail}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
