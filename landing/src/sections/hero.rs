use leptos::html;
use leptos::prelude::*;

use super::TAGLINE;
use crate::binding::{HeroRuntime, hero_config};

/// Planet decorations: (element id, css class, depth coefficient).
const PLANETS: &[(&str, &str, &str)] = &[
    ("planet-ringed", "planet planet-ringed", "0.6"),
    ("planet-ember", "planet planet-ember", "1.2"),
    ("planet-moon", "planet planet-moon", "0.3"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let container_ref = NodeRef::<html::Section>::new();
    let runtime = StoredValue::new_local(None::<HeroRuntime>);

    // Mount once both nodes exist
    Effect::new(move || {
        let (Some(canvas), Some(container)) = (canvas_ref.get(), container_ref.get()) else {
            return;
        };
        if runtime.with_value(|rt| rt.is_some()) {
            return;
        }
        match HeroRuntime::mount(canvas, container.into(), hero_config()) {
            Ok(rt) => runtime.set_value(Some(rt)),
            Err(e) => tracing::warn!("hero animation disabled: {:?}", e),
        }
    });

    // Dropping the runtime cancels the frame loop and detaches listeners
    on_cleanup(move || {
        runtime.update_value(|rt| {
            rt.take();
        });
    });

    view! {
        <section class="hero" node_ref=container_ref>
            <canvas class="hero-canvas" node_ref=canvas_ref aria-hidden="true"></canvas>
            <div class="hero-planets" aria-hidden="true">
                {PLANETS
                    .iter()
                    .map(|(id, class, depth)| {
                        view! { <div id=*id class=*class data-depth=*depth></div> }
                    })
                    .collect_view()}
            </div>
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {TAGLINE}
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"Launch faster"</span>
                        <br />
                        "than light travels."
                    </h1>
                    <p class="hero-description">
                        "Stellar ships your product from first commit to orbit. "
                        "Deploy previews, edge caching and zero-config observability in one place."
                    </p>
                    <div class="hero-actions">
                        <a href="#features" class="btn btn-primary">
                            "Start building"
                        </a>
                        <a href="#pricing" class="btn btn-secondary">
                            "See pricing →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
