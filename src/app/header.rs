use leptos::prelude::*;
use leptos_router::components::*;

use crate::site::LOGO_PATH;

use super::{
    icons::{CloseIcon, MenuIcon},
    nav::Nav,
    BUTTON_CLASS,
};

#[component]
pub fn Header(on_view_resume: Callback<()>) -> impl IntoView {
    view! {
        <header class="p-4 bg-white shadow-gray-900 shadow-sm fixed left-0 right-0 z-50">
            <div class="lg:container mx-auto">
                <div class="flex items-center justify-between">
                    <div class="flex shrink-0">
                        <A href="/" attr:title="Go Home" attr:class="flex">
                            <img class="w-auto h-8" src=LOGO_PATH alt="logo" />
                        </A>
                    </div>

                    <div class="flex md:hidden items-center justify-center">
                        <MobileMenu on_view_resume />
                    </div>

                    <div class="hidden md:flex">
                        <Nav />
                    </div>

                    <div class="hidden md:flex">
                        <button on:click=move |_| on_view_resume.run(()) class=BUTTON_CLASS>
                            "VIEW RESUME"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

const BACKDROP_CLASS: &str = "fixed inset-0 bg-black/50 top-[64px] transition duration-300 ease-out";
const PANEL_CLASS: &str = "flex flex-col justify-between absolute transition duration-300 ease-in-out left-0 h-[calc(100vh-64px)] top-[64px] bg-white w-4/5 min-[425px]:w-1/2 p-4";

#[component]
fn MobileMenu(on_view_resume: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close = Callback::new(move |_| set_menu_open(false));

    view! {
        <div class="group" data-open=move || menu_open().then_some("")>
            <button
                class="focus:outline-none text-gray-900 text-2xl"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <CloseIcon class="hidden group-data-[open]:block" />
                <MenuIcon class="group-data-[open]:hidden" />
            </button>
            <div
                class=move || {
                    if menu_open() { BACKDROP_CLASS.to_string() } else { format!("{BACKDROP_CLASS} opacity-0 pointer-events-none") }
                }
                on:click=move |_| close.run(())
            ></div>
            <div class=move || {
                if menu_open() { PANEL_CLASS.to_string() } else { format!("{PANEL_CLASS} -translate-x-[100%]") }
            }>
                <Nav close />
                <div class="flex">
                    <button
                        on:click=move |_| {
                            close.run(());
                            on_view_resume.run(());
                        }
                        class=BUTTON_CLASS
                    >
                        "VIEW RESUME"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_has_icons() {
        let html = Owner::new().with(|| {
            let on_view_resume = Callback::new(|_| {});
            view! { <MobileMenu on_view_resume /> }.to_html()
        });
        let start = html
            .find("aria-label=\"Toggle menu\"")
            .expect("toggle should render");
        let end = start + html[start..].find("</button>").expect("toggle should close");
        let toggle = &html[start..end];
        assert_eq!(toggle.matches("<svg").count(), 2, "{toggle}");
        assert!(toggle.contains("group-data-[open]:hidden"));
        // closed by default
        assert!(!html.contains("data-open"), "{html}");
    }
}
