// Stellar Landing Page - Leptos 0.8 Edition
// Animated starfield hero with pointer parallax planets

mod binding;
mod logging;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
        </main>
        <Footer />
    }
}
