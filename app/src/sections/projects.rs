use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::content::{Project, Section, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative py-32 px-6">
            <div class="max-w-7xl mx-auto z-10">
                <SectionTitle text="Projets & Expérience" />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <a
            href=project.link
            class="group relative block rounded-2xl overflow-hidden bg-white/5 backdrop-blur-lg border border-white/10 hover:border-blue-500/50 transition-all duration-500 hover:scale-105"
        >
            <div class=format!("h-64 {} relative overflow-hidden", project.gradient)>
                <div class="absolute inset-0 bg-black/50 group-hover:bg-black/30 transition-all duration-300"></div>
                <div class="absolute top-4 right-4 px-3 py-1 bg-white/10 backdrop-blur-lg rounded-full text-sm font-bold">
                    {project.year}
                </div>
                <div class="absolute top-4 left-4 p-2 bg-white/10 backdrop-blur-lg rounded-lg opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    {"\u{2197}"}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-2xl font-bold mb-3 group-hover:text-blue-400 transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <span class="px-3 py-1 text-sm rounded-full bg-white/10 border border-white/20">
                                {*tag}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </a>
    }
}
