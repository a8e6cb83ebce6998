use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl">
            <div class="text-center mb-12 sm:mb-16 section-content">
                <SectionHeading text="Professional Summary" />
                <div class="max-w-5xl mx-auto">
                    <div class="bg-black/40 border border-purple-500/30 rounded-xl backdrop-blur-xl hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-purple-500/20 group">
                        <div class="p-6 sm:p-8 md:p-10 lg:p-12">
                            <p class="text-base sm:text-lg md:text-xl leading-relaxed text-gray-200 group-hover:text-gray-100 transition-colors duration-300">
                                <span class="text-cyan-400 font-semibold">"Backend Developer"</span>
                                " with hands-on experience in building scalable microservices, real-time communication systems, and cloud-native applications using "
                                <span class="text-purple-400 font-semibold">"Rust (Axum)"</span>
                                " and "
                                <span class="text-purple-400 font-semibold">"Node.js"</span>
                                ". Proficient in "
                                <span class="text-cyan-400 font-semibold">"AWS services"</span>
                                " including EC2, Lambda, SQS, SNS, DynamoDB, and RDS, with strong experience in "
                                <span class="text-purple-400 font-semibold">"CI/CD automation"</span>
                                " using GitHub Actions and Docker-based deployments. Solid understanding of "
                                <span class="text-cyan-400 font-semibold">
                                    "asynchronous programming, concurrency, API design (REST and gRPC)"
                                </span>
                                ", and performance-oriented backend architecture. Recognized for strong "
                                <span class="text-purple-400 font-semibold">
                                    "problem-solving skills, ownership mindset, and effective team collaboration"
                                </span>
                                "."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
