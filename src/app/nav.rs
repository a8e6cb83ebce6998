use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::sections::{ActiveSection, Section, SectionBounds};

const LINK_CLASS: &str = "relative transition-all duration-300 hover:text-cyan-400 font-medium group fade-down";

/// Tracks which section is in view, re-evaluated on every window scroll.
///
/// The listener is removed together with the owning component.
pub fn use_active_section() -> ReadSignal<ActiveSection> {
    let (active, set_active) = signal(ActiveSection::default());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        set_active.maybe_update(|a| a.observe(scroll_y, section_bounds));
    });
    active
}

fn section_bounds(section: Section) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        el.offset_top() as f64,
        el.offset_height() as f64,
    ))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let active = use_active_section();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-black/30 backdrop-blur-xl border-b border-purple-500/30 transition-all duration-300">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-3 sm:py-4">
                <div class="flex justify-between items-center">
                    <a
                        href=Section::Hero.href()
                        class="text-xl sm:text-2xl lg:text-3xl font-bold bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent cursor-pointer fade-right hover:scale-105 transition-transform"
                    >
                        "<Phani/>"
                    </a>
                    <div class="hidden md:flex space-x-6 lg:space-x-10 text-sm lg:text-base">
                        {Section::NAV
                            .into_iter()
                            .enumerate()
                            .map(|(i, section)| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || {
                                            let color = if active.get().is_active(section) {
                                                "text-cyan-400"
                                            } else {
                                                "text-gray-300"
                                            };
                                            format!("{LINK_CLASS} {color}")
                                        }
                                        style=format!("animation-delay: {}ms", i * 100)
                                    >
                                        {section.label()}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-cyan-400 to-purple-400 transition-all duration-300 group-hover:w-full" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
