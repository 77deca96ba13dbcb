use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo" aria-hidden="true">"✦"</span>
                    <span class="footer-title">"stellar"</span>
                </div>
                <div class="footer-links">
                    <a href="#features" class="footer-link">"Features"</a>
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                    <a href="#docs" class="footer-link">"Docs"</a>
                    <a href="#status" class="footer-link">"Status"</a>
                </div>
                <p class="footer-copyright">"© 2025 Stellar. Made among the stars."</p>
            </div>
        </footer>
    }
}
