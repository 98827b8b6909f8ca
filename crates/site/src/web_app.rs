use desktop_runtime::{load_builtin_desktop, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A desktop-style portfolio with draggable windows." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    match load_builtin_desktop() {
        Ok(seed) => view! {
            <DesktopProvider seed=seed>
                <DesktopShell />
            </DesktopProvider>
        }
        .into_view(),
        Err(err) => {
            logging::error!("desktop catalog rejected: {err}");
            view! {
                <section class="boot-failure" role="alert">
                    <h1>"The desktop could not start."</h1>
                    <p>{err.to_string()}</p>
                </section>
            }
            .into_view()
        }
    }
}
