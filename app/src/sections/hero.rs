use leptos::prelude::*;

use crate::components::navigate;
use crate::content::{Section, PROFILE, SOCIAL_LINKS};
use crate::state::{Cursor, NavState, Typewriter};

#[component]
pub fn Hero(
    nav: RwSignal<NavState>,
    typewriter: Option<RwSignal<Typewriter>>,
    cursor: RwSignal<Cursor>,
) -> impl IntoView {
    let typed = move || typewriter.map(|typewriter| typewriter.with(Typewriter::text)).unwrap_or_default();
    let caret_class = move || {
        if cursor.with(Cursor::is_visible) {
            "ml-1 opacity-100"
        } else {
            "ml-1 opacity-0"
        }
    };

    view! {
        <section id=Section::Home.id() class="relative min-h-screen flex items-center justify-center px-6 pt-20">
            <div class="max-w-7xl mx-auto text-center z-10">
                <div class="mb-8 animate-fade-in">
                    <h1 class="text-5xl md:text-8xl font-bold mb-4">
                        "Hi, I'm "
                        <span class="bg-gradient-to-r from-blue-400 via-cyan-500 to-sky-500 bg-clip-text text-transparent animate-pulse">
                            {PROFILE.short_name}
                        </span>
                    </h1>
                    <div class="text-3xl md:text-5xl font-bold text-blue-400 mb-6 h-20 flex items-center justify-center">
                        <span>{typed}</span>
                        <span class=caret_class>"|"</span>
                    </div>
                    <p class="text-xl text-gray-300 mb-4">{PROFILE.headline}</p>
                    <p class="text-lg text-gray-400 mb-8">{PROFILE.tagline}</p>
                </div>

                <button
                    class="group relative px-8 py-4 bg-gradient-to-r from-blue-600 to-cyan-600 rounded-full text-lg font-semibold hover:shadow-2xl hover:shadow-blue-500/50 transition-all duration-300 hover:scale-105"
                    on:click=move |_| navigate(nav, Section::Projects.id())
                >
                    "VIEW MY PROJECTS"
                    <span class="absolute inset-0 rounded-full bg-white/20 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></span>
                </button>

                <div class="flex justify-center space-x-6 mt-12">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                title=link.label
                                target=link.external.then_some("_blank")
                                rel=link.external.then_some("noopener noreferrer")
                                class="p-3 border border-white/20 rounded-lg hover:border-blue-500 hover:bg-blue-500/10 transition-all duration-300 hover:scale-110 text-2xl"
                            >
                                {link.icon}
                            </a>
                        })
                        .collect_view()}
                </div>

                <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-3xl text-blue-500">
                    {"\u{2304}"}
                </div>
            </div>
        </section>
    }
}
