use leptos::prelude::*;

use crate::content::{Section, PROFILE};
use crate::host::PageScroller;
use crate::state::{GlowPosition, NavState};

/// Scrolls to `id` and closes the mobile menu.
pub fn navigate(nav: RwSignal<NavState>, id: &str) {
    nav.update(|nav| {
        nav.navigate(id, &PageScroller::default());
    });
}

#[component]
pub fn NavBar(nav: RwSignal<NavState>) -> impl IntoView {
    let menu_open = move || nav.with(|nav| nav.menu_open);

    view! {
        <nav class="fixed top-0 w-full z-50 backdrop-blur-lg bg-black/50 border-b border-white/10">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-cyan-500 bg-clip-text text-transparent">
                        {PROFILE.brand}
                    </div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! {
                                <NavItem
                                    nav=nav
                                    section=section
                                    classes="nav-item text-sm hover:text-blue-400 transition-colors duration-300 relative group"
                                />
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-2xl"
                        aria-label="Menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <div class="md:hidden absolute top-full left-0 w-full bg-black/95 backdrop-blur-lg border-b border-white/10">
                    <div class="flex flex-col p-6 space-y-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! {
                                <NavItem
                                    nav=nav
                                    section=section
                                    classes="nav-item text-left hover:text-blue-400 transition-colors"
                                />
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavItem(
    nav: RwSignal<NavState>,
    section: Section,
    #[prop(into)] classes: String,
) -> impl IntoView {
    let is_active = move || nav.with(|nav| nav.is_active(section));

    view! {
        <button
            class=classes
            class:active=is_active
            aria-current=move || is_active().then_some("location")
            on:click=move |_| navigate(nav, section.id())
        >
            {section.label()}
        </button>
    }
}

/// The gradient backdrop, and the glow that follows the pointer.
#[component]
pub fn Backdrop(glow: RwSignal<GlowPosition>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-900/20 via-black to-cyan-900/20"></div>
            <div
                class="glow absolute w-96 h-96 bg-blue-500/30 rounded-full blur-3xl animate-pulse"
                style:top=move || format!("{}px", glow.with(|glow| glow.top))
                style:left=move || format!("{}px", glow.with(|glow| glow.left))
            ></div>
            <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-cyan-500/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
            <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-sky-500/20 rounded-full blur-3xl animate-pulse delay-2000"></div>
        </div>
    }
}

#[component]
pub fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <h2 class="text-5xl font-bold text-center mb-16">
            <span class="bg-gradient-to-r from-blue-400 to-cyan-500 bg-clip-text text-transparent">
                {text}
            </span>
        </h2>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative py-12 px-6 border-t border-white/10">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-gray-400 mb-2">
                    <a href="#home">"\u{2191} \u{a9} 2024 " {PROFILE.full_name} " \u{2191}"</a>
                </p>
                <p class="text-sm text-gray-500">"Crafted with 💙 and ☕ | Dev & Design"</p>
            </div>
        </footer>
    }
}
