use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"Everything between commit and orbit."</h2>
                    <p class="section-description">
                        "One platform for builds, previews and delivery. "
                        "No YAML archaeology, no pager at 3am."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="Instant Previews"
                        description="Every pull request gets its own URL within seconds, torn down when it merges."
                        tag=Some("preview")
                    />
                    <FeatureCard
                        icon="[2]"
                        title="Edge Delivery"
                        description="Static assets and server responses cached in 40+ regions, purged atomically on deploy."
                        tag=Some("cdn")
                    />
                    <FeatureCard
                        icon="[3]"
                        title="Rollbacks in One Click"
                        description="Immutable deployments mean any previous build is one promotion away."
                        tag=None
                    />
                    <FeatureCard
                        icon="[4]"
                        title="Built-in Observability"
                        description="Request logs, traces and Web Vitals without installing an agent."
                        tag=Some("observe")
                    />
                    <FeatureCard
                        icon="[5]"
                        title="Secrets That Stay Secret"
                        description="Encrypted per environment, injected at build and runtime, never printed to logs."
                        tag=None
                    />
                    <FeatureCard
                        icon="[6]"
                        title="Team Workflows"
                        description="Protected branches, required checks and deploy approvals that mirror how you already work."
                        tag=Some("teams")
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tag: Option<&'static str>,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            {tag.map(|t| view! { <span class="feature-tag">{t}</span> })}
        </article>
    }
}
