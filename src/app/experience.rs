use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl">
            <div class="text-center mb-12 sm:mb-16 section-content">
                <SectionHeading text="Professional Experience" />
                <div class="max-w-5xl mx-auto space-y-6 sm:space-y-8 text-left">
                    <Position
                        title="Software Engineer – Part Time"
                        company="Tiny Pal"
                        dates="07/2025 – 11/2025"
                    >
                        <Bullet icon="text-cyan-400">
                            "Developing cloud-hosted backend services using "
                            <strong>"Node.js, deployed on AWS EC2 and RDS"</strong>
                            " with Docker-based containerization."
                        </Bullet>
                        <Bullet icon="text-purple-400">
                            "Designed and implemented automated "
                            <strong>"CI/CD pipelines using GitHub Actions"</strong>
                            ", improving deployment reliability and reducing manual operational effort."
                        </Bullet>
                        <Bullet icon="text-cyan-400">
                            "Integrated subscription billing and payment automation using "
                            <strong>"Razorpay APIs"</strong>
                            ", ensuring secure and reliable transaction handling."
                        </Bullet>
                        <Bullet icon="text-purple-400">
                            "Designed scalable " <strong>"REST APIs"</strong>
                            " and optimized relational data models to improve performance, maintainability, and scalability."
                        </Bullet>
                    </Position>
                    <Position
                        title="Software Engineer – Intern"
                        company="TeCell"
                        dates="06/2025 – 07/2025"
                    >
                        <Bullet icon="text-cyan-400">
                            "Built serverless, event-driven backend workflows using "
                            <strong>"AWS Lambda, SQS, SNS, and DynamoDB"</strong>
                            "."
                        </Bullet>
                        <Bullet icon="text-purple-400">
                            "Implemented " <strong>"DynamoDB Streams triggers"</strong>
                            " to enable real-time workflow automation and near real-time data synchronization."
                        </Bullet>
                        <Bullet icon="text-cyan-400">
                            "Designed " <strong>"DynamoDB table schemas and indexing strategies"</strong>
                            " optimized for high-throughput and low-latency access patterns."
                        </Bullet>
                        <Bullet icon="text-purple-400">
                            "Containerized backend services using " <strong>"Docker"</strong>
                            " and integrated " <strong>"AWS CloudWatch"</strong>
                            " for centralized logging, monitoring, and observability."
                        </Bullet>
                    </Position>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Position(
    title: &'static str,
    company: &'static str,
    dates: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-black/40 border border-purple-500/30 rounded-xl backdrop-blur-xl hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/20 hover:scale-[1.02] group">
            <div class="p-5 sm:p-7">
                <div class="flex flex-col sm:flex-row justify-between items-start gap-3">
                    <div>
                        <h3 class="text-xl sm:text-2xl md:text-3xl font-semibold text-cyan-400 group-hover:text-cyan-300 transition-colors">
                            {title}
                        </h3>
                        <p class="text-lg sm:text-xl text-purple-400 font-medium group-hover:text-purple-300 transition-colors">
                            {company}
                        </p>
                    </div>
                    <span class="rounded-md border border-cyan-500 px-2.5 py-0.5 text-cyan-400 text-sm sm:text-base whitespace-nowrap font-semibold">
                        {dates}
                    </span>
                </div>
            </div>
            <div class="p-5 sm:p-7 pt-0">
                <ul class="space-y-3 sm:space-y-4 text-sm sm:text-base md:text-lg text-gray-200 group-hover:text-gray-100 transition-colors">
                    {children()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn Bullet(icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <li class="flex items-start gap-3">
            <span class=format!("mt-0.5 flex-shrink-0 {icon}")>"⚡"</span>
            <span>{children()}</span>
        </li>
    }
}
