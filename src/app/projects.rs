use leptos::prelude::*;

use super::SectionHeading;

const LIVE: &str = "Live";

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    features: &'static [&'static str],
    link: &'static str,
    github: &'static str,
    status: &'static str,
}

impl Project {
    fn status_class(&self) -> &'static str {
        if self.status == LIVE {
            "bg-green-500/20 text-green-400 border-green-500/40"
        } else {
            "bg-yellow-500/20 text-yellow-400 border-yellow-500/40"
        }
    }
}

static PROJECTS: [Project; 2] = [
    Project {
        title: "IPL Auction Replica App",
        description: "Real-time IPL auction platform with live bidding, concurrent participants, and full-room auctions",
        tech: &["React (Axum)", "PostgreSQL", "Redis", "WebSockets", "WebRTC"],
        features: &[
            "Designed and developed a production-grade real-time IPL auction platform supporting private bidding rooms, concurrent live participants, and full-room auctions using Rust (Axum), WebSockets, and React",
            "Implemented Axum WebSocket-based bid synchronization and authorization server-side logic, enabling real-time broadcasting, ensuring consistent auction state, real-time updates, and seamless client reconnects under network disruptions",
            "Engineered a timer-driven auction engine using Redis key expiry events to automate bid closure, Right-To-Match (RTM) workflows, skip handling, and player transitions without blocking application threads",
            "Architected Redis-backed distributed auction state management for participants, current players, bids, timers, and skip states, enabling crash recovery and race-condition-resistant coordination across concurrent bidders",
            "Developed financial-grade bidding logic with strict-mode enforcement, per-segment budget buffers, foreign player limits, RTM validation, and deadlock prevention to guarantee auction fairness and correctness",
            "Built race-resistant bid placement using atomic Redis operations and TTL-based coordination to prevent double bids, overspending, invalid RTM execution, and inconsistent state after high concurrency",
            "Integrated WebRTC-based audio communication and implemented channel-based inter-task messaging by spawning background worker tasks to safely handle asynchronous and CPU/IO-intensive operations without impacting real-time bid processing",
            "Designed asynchronous, event-style persistence using background task executors to decouple real-time auction flow from PostgreSQL writes for sold/unsold players, balance updates, and room state transitions",
            "Implemented a stateless backend architecture with Redis as the coordination backbone, enabling horizontal scalability and reliable multi-instance deployment of auction backend services",
        ],
        link: "https://ipl-auction.phani.services",
        github: "https://github.com/phanidharguttikonda0/ipl_auction",
        status: LIVE,
    },
    Project {
        title: "SnipSight – Secure File & URL Management Platform",
        description: "Designed and built a secure file sharing and URL management platform with role-based access control and analytics",
        tech: &["Rust", "Axum", "gRPC", "AWS", "Docker", "DynamoDB"],
        features: &[
            "Designed and built a secure file sharing and URL management platform with role-based access control and analytics using Rust, gRPC, REST APIs, and MongoDB",
            "Implemented gRPC-based inter-service communication to enable low-latency, efficient service-to-service operations within a microservices architecture",
            "Built event-driven backend workflows using AWS SQS and Lambda for analytics ingestion, background processing, and automated email notifications",
            "Containerized backend services using Docker and deployed via AWS ECR and EC2 with automated CI/CD pipelines using GitHub Actions",
        ],
        link: "https://web.snipsight.phani.services/",
        github: "https://github.com/phanidharguttikonda0/SnipSight",
        status: LIVE,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl">
            <div class="text-center mb-12 sm:mb-16 section-content">
                <SectionHeading text="Key Projects" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 sm:gap-8 lg:gap-10 max-w-7xl mx-auto text-left">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project delay={i * 200} /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay: usize) -> impl IntoView {
    view! {
        <div
            class="fade-up bg-black/40 border border-purple-500/30 rounded-xl backdrop-blur-xl hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/20 hover:scale-[1.01] group flex flex-col h-full"
            style=format!("animation-delay: {delay}ms")
        >
            <div class="p-5 sm:p-6 lg:p-7">
                <div class="flex flex-col sm:flex-row justify-between items-start gap-3 mb-3">
                    <h3 class="text-xl sm:text-2xl lg:text-3xl font-semibold text-cyan-400 group-hover:text-cyan-300 transition-colors leading-tight">
                        {project.title}
                    </h3>
                    <span class=format!(
                        "rounded-md border px-2.5 py-0.5 text-xs sm:text-sm font-semibold whitespace-nowrap {}",
                        project.status_class(),
                    )>{project.status}</span>
                </div>
                <p class="text-sm sm:text-base md:text-lg text-gray-200 group-hover:text-gray-100 transition-colors leading-relaxed">
                    {project.description}
                </p>
            </div>
            <div class="p-5 sm:p-6 lg:p-7 pt-0 flex-1 flex flex-col">
                <div class="space-y-5 sm:space-y-6 flex-1">
                    <div>
                        <p class="text-sm sm:text-base font-semibold text-gray-300 mb-3">"Technologies:"</p>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md border border-cyan-500/40 px-2.5 py-0.5 text-cyan-300 text-xs sm:text-sm hover:bg-cyan-500/10 transition-colors">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex-1 flex flex-col">
                        <p class="text-sm sm:text-base font-semibold text-gray-300 mb-3">"Key Features:"</p>
                        <ul class="space-y-2 sm:space-y-2.5 max-h-[400px] overflow-y-auto pr-2 scrollbar-thin">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="text-xs sm:text-sm md:text-base text-gray-200 group-hover:text-gray-100 flex items-start gap-2.5 leading-relaxed transition-colors">
                                            <div class="w-1.5 h-1.5 bg-purple-400 rounded-full mt-2 flex-shrink-0 group-hover:bg-cyan-400 transition-colors"></div>
                                            <span>{*feature}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="flex flex-col sm:flex-row gap-3 pt-6 mt-auto">
                        <a
                            href=project.link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-full sm:flex-1 text-center rounded-md px-4 py-2 bg-gradient-to-r from-cyan-500 to-cyan-600 hover:from-cyan-600 hover:to-cyan-700 text-black font-semibold text-sm sm:text-base shadow-lg shadow-cyan-500/30"
                        >
                            <i class="extra-link mr-2"></i>
                            "Live"
                        </a>
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-full sm:flex-1 text-center rounded-md px-4 py-2 border border-purple-500 text-purple-400 hover:bg-purple-500/20 hover:border-purple-400 text-sm sm:text-base font-semibold shadow-lg shadow-purple-500/20"
                        >
                            <i class="devicon-github-original mr-2"></i>
                            "GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
