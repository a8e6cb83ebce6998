use leptos::prelude::*;

pub const EMAIL: &str = "phanidharguttikonda0@gmail.com";
pub const PHONE_DISPLAY: &str = "+91 88858 58760";
pub const PHONE_LINK: &str = "+918885858760";

struct SocialLink {
    icon: &'static str,
    href: &'static str,
    label: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        icon: "devicon-github-original",
        href: "https://github.com/phanidharguttikonda0",
        label: "GitHub",
    },
    SocialLink {
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/phanidhar-reddy-guttikonda-321817233/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "devicon-twitter-original",
        href: "https://x.com/phanidharreddy_",
        label: "X (Twitter)",
    },
    SocialLink {
        icon: "devicon-medium-original",
        href: "https://medium.com/@guttikondaphanidharreddy",
        label: "Medium",
    },
    SocialLink {
        icon: "extra-leetcode",
        href: "https://leetcode.com/u/phanidharguttikonda/",
        label: "LeetCode",
    },
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl text-center">
            <div class="mb-4 sm:mb-8 fade-up">
                <div class="w-40 sm:w-48 md:w-56 lg:w-64 h-40 sm:h-48 md:h-56 lg:h-64 mx-auto mb-8 sm:mb-12 relative spin-in">
                    <div class="absolute inset-0 rounded-full bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 p-1 animate-gradientShift">
                        <div class="w-full h-full rounded-full bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 p-1">
                            <img
                                src="/profile.png"
                                alt="Phanidhar Reddy"
                                class="w-full h-full rounded-full object-cover object-center transition-transform duration-500 hover:scale-105"
                            />
                        </div>
                    </div>
                    <div class="absolute inset-0 rounded-full bg-gradient-to-r from-cyan-400/30 to-purple-400/30 blur-2xl animate-pulse"></div>
                </div>

                <h1 class="text-4xl sm:text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-black mb-6 sm:mb-8 bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent tracking-tight animate-gradientShift fade-up delay-400">
                    "<Phanidhar/>"
                </h1>

                <p class="text-lg sm:text-xl md:text-2xl lg:text-3xl text-gray-300 mb-8 sm:mb-10 px-4 max-w-3xl mx-auto fade-in delay-600">
                    <span class="text-cyan-400 font-semibold">"const"</span>
                    " "
                    <span class="text-purple-400 font-semibold">"role"</span>
                    " = "
                    <span class="text-green-400 font-medium">
                        "\"Backend Developer & Systems Engineer\""
                    </span>
                    <span class="text-cyan-400">";"</span>
                </p>

                <div class="flex flex-col sm:flex-row flex-wrap justify-center gap-4 sm:gap-6 lg:gap-8 mb-8 sm:mb-10 text-sm sm:text-base fade-up delay-800">
                    <div class="flex items-center gap-2 text-gray-300 justify-center hover:text-cyan-400 transition-colors duration-300">
                        <i class="extra-location"></i>
                        <span class="font-medium">"Ongole, AP, India"</span>
                    </div>
                    <div class="flex items-center gap-2 text-gray-300 justify-center hover:text-purple-400 transition-colors duration-300">
                        <i class="extra-phone"></i>
                        <span class="font-medium">{PHONE_DISPLAY}</span>
                    </div>
                    <div class="flex items-center gap-2 text-gray-300 justify-center hover:text-pink-400 transition-colors duration-300">
                        <i class="extra-email"></i>
                        <span class="truncate font-medium">{EMAIL}</span>
                    </div>
                </div>

                <div class="flex justify-center flex-wrap gap-4 sm:gap-6 mb-8 fade-up delay-1000">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="p-3 sm:p-4 rounded-full bg-gradient-to-r from-cyan-500/20 to-purple-500/20 hover:from-cyan-500/50 hover:to-purple-500/50 transition-all duration-300 border border-cyan-500/40 hover:border-purple-400 hover:shadow-lg hover:shadow-cyan-500/50 hover:scale-110 hover:rotate-6 text-xl sm:text-2xl"
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
