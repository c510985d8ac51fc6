use yew::prelude::*;

use crate::components::{FeatureCard, StatCard};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub is_authenticated: bool,
}

/// Landing page. Logged-in visitors get a dashboard call to action instead
/// of the sign-up pitch.
#[function_component]
pub fn HomePage(props: &HomePageProps) -> Html {
    let cta = if props.is_authenticated {
        "Go to Dashboard"
    } else {
        "Get Started for Free"
    };

    html! {
        <div class="text-center flex flex-col items-center space-y-20 md:space-y-28">
            <section class="mt-12 md:mt-16 max-w-4xl">
                <h1 class="text-5xl md:text-7xl font-bold gradient-text">
                    {"Empowering Student Tutors"}
                </h1>
                <p class="mt-4 text-lg text-white/70 max-w-2xl mx-auto">
                    {"Connecting high school volunteers with middle schoolers and \
                      peers worldwide via Schoolhouse.world."}
                </p>
                <div class="mt-8 flex justify-center items-center gap-4">
                    <button class="cta-gradient px-8 py-3 rounded-2xl font-bold text-white \
                                   shadow-lg hover:scale-105 transition-transform">
                        {cta}
                    </button>
                    if !props.is_authenticated {
                        <button class="glassmorphism px-8 py-3 rounded-2xl font-bold \
                                       text-white/90 hover:bg-white/20 transition-colors">
                            {"Learn More"}
                        </button>
                    }
                </div>
            </section>

            <section class="w-full max-w-5xl">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 md:gap-6">
                    <StatCard icon="🧑‍🏫" value="500+" label="Active Tutors" />
                    <StatCard icon="🎓" value="1000+" label="Students Helped" />
                    <StatCard icon="🌍" value="50+" label="Countries" />
                    <StatCard icon="⏰" value="10k+" label="Hours Volunteered" />
                </div>
            </section>

            <section class="w-full max-w-5xl">
                <h2 class="text-4xl font-bold mb-8 text-white">{"Why TutorDeck?"}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4 md:gap-6">
                    <FeatureCard
                        icon="🌐"
                        title="Global Connection"
                        description="Connect with students and tutors from around the world."
                    />
                    <FeatureCard
                        icon="🤝"
                        title="Peer-to-Peer Learning"
                        description="Learn from peers who understand your curriculum."
                    />
                    <FeatureCard
                        icon="❤️"
                        title="Volunteer Hours"
                        description="Earn certified volunteer hours for your tutoring."
                    />
                    <FeatureCard
                        icon="💬"
                        title="Real-time Chat"
                        description="Instant help through our secure, real-time chat."
                    />
                </div>
            </section>
        </div>
    }
}
