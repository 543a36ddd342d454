use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::content::{Section, Skill, SKILLS, TOOLS};
use crate::state::VisibilityTracker;

#[component]
pub fn Skills(visibility: RwSignal<VisibilityTracker>) -> impl IntoView {
    let section_visible = move || visibility.with(|tracker| tracker.is_visible(Section::Skills.id()));

    view! {
        <section id=Section::Skills.id() class="relative py-32 px-6">
            <div class="max-w-7xl mx-auto z-10">
                <SectionTitle text="Compétences" />
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <SkillBar skill=skill visible=Signal::derive(section_visible) /> })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <h3 class="text-3xl font-bold mb-8">
                        <span class="bg-gradient-to-r from-blue-400 to-cyan-500 bg-clip-text text-transparent">
                            "Outils & Technologies"
                        </span>
                    </h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {TOOLS
                            .iter()
                            .map(|tool| view! {
                                <span class="px-6 py-3 bg-white/5 backdrop-blur-lg border border-white/10 rounded-xl hover:border-blue-500/50 hover:scale-110 transition-all duration-300">
                                    {*tool}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white/5 backdrop-blur-lg border border-white/10 hover:border-blue-500/30 transition-all duration-300">
            <div class="flex items-center justify-between mb-3">
                <div class="flex items-center space-x-3">
                    <span class="text-3xl">{skill.icon}</span>
                    <div>
                        <span class="font-semibold text-lg">{skill.name}</span>
                        <p class="text-xs text-gray-400">{skill.description}</p>
                    </div>
                </div>
                <span class="text-blue-400 font-bold text-xl">{skill.level_label()}</span>
            </div>
            <div class="w-full bg-white/10 rounded-full h-3 overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-blue-500 to-cyan-500 rounded-full transition-all duration-1000"
                    style:width=move || format!("{}%", skill.bar_width(visible.get()))
                ></div>
            </div>
        </div>
    }
}
