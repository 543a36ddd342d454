use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Backdrop, Footer, NavBar};
use crate::content::TYPEWRITER_PHRASES;
use crate::effects;
use crate::sections::{about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills};
use crate::state::{ContactForm, Cursor, GlowPosition, NavState, Typewriter, VisibilityTracker};

/// The whole portfolio: it owns the page state and hands it to the sections.
#[component]
pub fn Index() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let glow = RwSignal::new(GlowPosition::default());
    let cursor = RwSignal::new(Cursor::default());
    let visibility = RwSignal::new(VisibilityTracker::default());
    let form = RwSignal::new(ContactForm::default());
    let typewriter = match Typewriter::new(TYPEWRITER_PHRASES) {
        Ok(typewriter) => Some(RwSignal::new(typewriter)),
        Err(error) => {
            log::warn!("{error}");
            None
        }
    };

    effects::track_pointer(glow);
    if let Some(typewriter) = typewriter {
        effects::run_typewriter(typewriter);
    }
    effects::blink_cursor(cursor);
    effects::observe_sections(visibility);

    view! {
        <Title text="Portfolio" />
        <div class="bg-black text-white min-h-screen overflow-x-hidden">
            <Backdrop glow=glow />
            <NavBar nav=nav />
            <main class="relative">
                <Hero nav=nav typewriter=typewriter cursor=cursor />
                <About />
                <Projects />
                <Skills visibility=visibility />
                <Contact form=form />
            </main>
            <Footer />
        </div>
    }
}
