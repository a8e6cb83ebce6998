mod about;
mod badge;
mod contact;
mod experience;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::sections::Section;

use about::AboutSection;
use badge::use_badge_sweeper;
use contact::ContactSection;
use experience::ExperienceSection;
use hero::HeroSection;
use nav::NavBar;
use projects::ProjectsSection;
use skills::SkillsSection;

const SITE_TITLE: &str = "🙏 phani-back-end developer";
const SITE_DESCRIPTION: &str = "Phanidhar Reddy - Backend Developer & Systems Engineer Portfolio";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700;800;900&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    use_badge_sweeper();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 text-white overflow-x-hidden">
            <div class="fixed inset-0 opacity-20 pointer-events-none parallax-bg"></div>
            <NavBar />
            <section id=Section::Hero.id() class="min-h-screen flex items-center justify-center relative pt-20 overflow-hidden">
                <HeroSection />
            </section>
            <section id=Section::About.id() class="py-16 sm:py-24 lg:py-32 relative">
                <AboutSection />
            </section>
            <section id=Section::Experience.id() class="py-16 sm:py-24 lg:py-32 relative">
                <ExperienceSection />
            </section>
            <section id=Section::Projects.id() class="py-16 sm:py-24 lg:py-32 relative">
                <ProjectsSection />
            </section>
            <section id=Section::Skills.id() class="py-16 sm:py-24 lg:py-32 relative">
                <SkillsSection />
            </section>
            <section id=Section::Contact.id() class="py-16 sm:py-24 lg:py-32 relative">
                <ContactSection />
            </section>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-purple-500/30 text-center text-sm text-gray-400">
            {format!("© {} Phanidhar Reddy Guttikonda", env!("BUILD_YEAR"))}
        </footer>
    }
}

/// Heading shared by every content section.
#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-8 sm:mb-12 bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent animate-gradientShift">
            {text}
        </h2>
    }
}
