use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::{
    hero::{EMAIL, PHONE_DISPLAY, PHONE_LINK},
    SectionHeading,
};
use crate::contact::{ContactForm, EmailJsProvider, EmailProvider, SubmissionStatus};

const INPUT_CLASS: &str = "w-full rounded-md border px-3 py-2 bg-black/20 border-purple-500/30 text-white placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = Memo::new(move |_| form.with(|f| f.status));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = match form.try_update(|f| f.begin()) {
            Some(Ok(fields)) => fields,
            Some(Err(e)) => {
                log::debug!("submit ignored: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let provider = EmailJsProvider::from_env();
            let outcome = provider.send(&fields).await;
            form.update(|f| {
                f.settle(outcome);
            });
        });
    };

    view! {
        <div class="container mx-auto px-6">
            <div class="text-center mb-16 section-content">
                <SectionHeading text="Get In Touch" />
                <div class="max-w-2xl mx-auto">
                    <div class="bg-black/40 border border-purple-500/30 rounded-xl backdrop-blur-md">
                        <div class="p-8">
                            <form on:submit=on_submit class="space-y-6">
                                <div class="grid md:grid-cols-2 gap-4">
                                    <input
                                        name="name"
                                        placeholder="Your Name"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.fields.name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.fields.name = event_target_value(&ev))
                                        }
                                    />
                                    <input
                                        name="email"
                                        type="email"
                                        placeholder="Your Email"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.fields.email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.fields.email = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <input
                                    name="title"
                                    placeholder="Subject"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.fields.subject.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.fields.subject = event_target_value(&ev))
                                    }
                                />
                                <textarea
                                    name="message"
                                    placeholder="Your Message"
                                    rows="5"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.fields.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.fields.message = event_target_value(&ev))
                                    }
                                ></textarea>
                                <button
                                    type="submit"
                                    disabled=move || status.get().is_sending()
                                    class="w-full rounded-md px-4 py-2 font-medium bg-gradient-to-r from-cyan-500 to-purple-500 hover:from-cyan-600 hover:to-purple-600 disabled:opacity-50"
                                >
                                    <span class="mr-2">"➤"</span>
                                    {move || status.get().button_label()}
                                </button>
                            </form>

                            {move || {
                                let status = status.get();
                                let class = match status {
                                    SubmissionStatus::Success => "text-green-400 mt-4 text-center",
                                    _ => "text-red-400 mt-4 text-center",
                                };
                                status.notice().map(|msg| view! { <p class=class>{msg}</p> })
                            }}

                            <div class="mt-8 pt-8 border-t border-purple-500/30">
                                <p class="text-gray-400 mb-4">"Or reach out directly:"</p>
                                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                                    <a
                                        href=format!("mailto:{EMAIL}")
                                        class="flex items-center gap-2 text-cyan-400 hover:text-cyan-300 transition-colors truncate"
                                    >
                                        <i class="extra-email"></i>
                                        {EMAIL}
                                    </a>
                                    <a
                                        href=format!("tel:{PHONE_LINK}")
                                        class="flex items-center gap-2 text-purple-400 hover:text-purple-300 transition-colors"
                                    >
                                        <i class="extra-phone"></i>
                                        {PHONE_DISPLAY}
                                    </a>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
