use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::content::{Section, EMAIL_LINK, WHATSAPP_LINK};
use crate::host::PageNotifier;
use crate::state::{ContactForm, Field};

const INPUT: &str = "w-full px-6 py-4 rounded-xl bg-white/5 border border-white/10 focus:border-blue-500 outline-none transition-colors";

#[component]
pub fn Contact(form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move |field: Field| move || form.with(|form| form.get(field).to_owned());
    let set = move |field: Field| {
        move |event: leptos::ev::Event| form.update(|form| form.set(field, event_target_value(&event)))
    };
    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        form.update(|form| {
            form.submit(&PageNotifier::default());
        });
    };

    view! {
        <section id=Section::Contact.id() class="relative py-32 px-6">
            <div class="max-w-3xl mx-auto z-10">
                <SectionTitle text="Contactez-moi" />
                <form
                    class="p-8 rounded-2xl bg-white/5 backdrop-blur-lg border border-white/10 space-y-6"
                    on:submit=on_submit
                >
                    <input
                        type="text"
                        placeholder="Votre nom"
                        class=INPUT
                        prop:value=value(Field::Name)
                        on:input=set(Field::Name)
                    />
                    <input
                        type="email"
                        placeholder="Votre email"
                        class=INPUT
                        prop:value=value(Field::Email)
                        on:input=set(Field::Email)
                    />
                    <textarea
                        rows="5"
                        placeholder="Votre message"
                        class=format!("{INPUT} resize-none")
                        prop:value=value(Field::Message)
                        on:input=set(Field::Message)
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full py-4 bg-gradient-to-r from-blue-600 to-cyan-600 rounded-xl font-semibold hover:shadow-2xl hover:shadow-blue-500/50 transition-all duration-300 hover:scale-105 flex items-center justify-center space-x-2"
                    >
                        <span>"Envoyer"</span>
                        <span>{"\u{27a4}"}</span>
                    </button>
                </form>
                <div class="mt-8 text-center text-gray-400">
                    <p class="mb-2">"Ou contactez-moi directement :"</p>
                    <div class="flex flex-col md:flex-row justify-center gap-4 text-sm">
                        <a href=EMAIL_LINK.href class="hover:text-blue-400 transition-colors">
                            {format!("📧 {}", EMAIL_LINK.text)}
                        </a>
                        <a href=WHATSAPP_LINK.href class="hover:text-green-400 transition-colors">
                            {format!("📱 {}", WHATSAPP_LINK.text)}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
