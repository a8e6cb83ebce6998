use leptos::prelude::*;

use super::SectionHeading;

static SKILLS: [(&str, &[&str]); 5] = [
    ("Languages", &["Rust", "JavaScript (Node.js)", "Java"]),
    ("Frameworks and Libraries", &["Axum", "Express.js", "React"]),
    ("Databases", &["PostgreSQL", "Redis", "MongoDB", "DynamoDB"]),
    (
        "Cloud and DevOps",
        &["AWS (EC2, Lambda, SQS, SNS, RDS, ECR)", "Docker", "GitHub Actions"],
    ),
    (
        "Other Technologies",
        &["gRPC (Microservices)", "WebRTC", "Razorpay API"],
    ),
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl">
            <div class="text-center section-content">
                <SectionHeading text="Technical Skills" />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5 gap-5 sm:gap-6 lg:gap-7">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, (category, items))| {
                            view! {
                                <div
                                    class="fade-up bg-black/40 border border-purple-500/30 rounded-xl backdrop-blur-xl hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/20 hover:scale-105 group h-full overflow-hidden"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    <div class="p-5 sm:p-6">
                                        <h3 class="text-base sm:text-lg md:text-xl font-semibold text-cyan-400 group-hover:text-cyan-300 transition-colors break-words">
                                            {*category}
                                        </h3>
                                    </div>
                                    <div class="p-5 sm:p-6 pt-0 overflow-hidden">
                                        <div class="flex flex-wrap gap-2 w-full">
                                            {items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <span class="rounded-md border border-purple-500/40 px-2.5 py-0.5 text-purple-300 text-xs hover:bg-purple-500/10 transition-colors whitespace-normal break-words max-w-full">
                                                            {*item}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
