use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#docs", "Docs"),
    ("#changelog", "Changelog"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    let links = move || {
        LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <a href=*href class="nav-link" on:click=move |_| set_drawer_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo" aria-hidden="true">"✦"</span>
                    <span class="nav-title">"stellar"</span>
                </a>
                <div class="nav-links">{links}</div>
                <a href="#features" class="nav-cta">"Get started"</a>
                <button
                    class=move || if drawer_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation"
                    aria-expanded=move || drawer_open.get().to_string()
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">{links}</div>
                </div>
            </Show>
        </nav>
    }
}
