//! Inline SVG icons. They inherit size from the font size and colour from `currentColor`.

use leptos::prelude::*;

const GITHUB: &str = "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12";
const LINKEDIN: &str = "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z";
const WHATSAPP_BUBBLE: &str = "M3.5 20.5l1.3-4.3A8.9 8.9 0 1 1 8 19.3z";
const WHATSAPP_HANDSET: &str = "M9 8.2c.2-.4.5-.4.8-.4h.5c.2 0 .4.1.5.4l.7 1.6c.1.2 0 .5-.1.7l-.5.6c-.1.1-.1.3 0 .5.6 1 1.4 1.8 2.5 2.4.2.1.4.1.5-.1l.6-.7c.2-.2.4-.2.6-.1l1.6.8c.2.1.4.3.3.6 0 .8-.7 1.6-1.6 1.7-1 .1-2.4-.3-4.1-1.8-1.6-1.4-2.4-3-2.5-4-.1-.9.3-1.7.6-2z";
const MENU: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE: &str = "M6 6l12 12M18 6L6 18";
const PREVIOUS: &str = "M19 12H5M11 6l-6 6 6 6";
const NEXT: &str = "M5 12h14M13 6l6 6-6 6";

#[component]
fn Solid(paths: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="currentColor"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[component]
fn Stroked(paths: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[component]
pub fn GithubIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Solid paths=&[GITHUB] class /> }
}

#[component]
pub fn LinkedinIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Solid paths=&[LINKEDIN] class /> }
}

#[component]
pub fn WhatsappIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" width="1em" height="1em" aria-hidden="true">
            <path
                d=WHATSAPP_BUBBLE
                fill="none"
                stroke="currentColor"
                stroke-width="1.8"
                stroke-linejoin="round"
            />
            <path d=WHATSAPP_HANDSET fill="currentColor" />
        </svg>
    }
}

#[component]
pub fn MenuIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Stroked paths=&[MENU] class /> }
}

#[component]
pub fn CloseIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Stroked paths=&[CLOSE] class /> }
}

#[component]
pub fn PreviousIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Stroked paths=&[PREVIOUS] class /> }
}

#[component]
pub fn NextIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Stroked paths=&[NEXT] class /> }
}

#[component]
pub fn SpinnerIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="none"
            stroke="currentColor"
            stroke-width="3"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="10" opacity="0.25" />
            <path d="M22 12a10 10 0 0 0-10-10" stroke-linecap="round" />
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(f: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_icons_render_visible_svg() {
        let icons = [
            render(|| view! { <GithubIcon /> }.into_any()),
            render(|| view! { <LinkedinIcon /> }.into_any()),
            render(|| view! { <WhatsappIcon /> }.into_any()),
            render(|| view! { <MenuIcon /> }.into_any()),
            render(|| view! { <CloseIcon /> }.into_any()),
            render(|| view! { <PreviousIcon /> }.into_any()),
            render(|| view! { <NextIcon /> }.into_any()),
            render(|| view! { <SpinnerIcon /> }.into_any()),
        ];
        for html in icons {
            assert!(html.starts_with("<svg"), "{html}");
            assert!(html.contains("currentColor"), "{html}");
            assert!(html.contains("<path d=\""), "{html}");
        }
    }

    #[test]
    fn test_icon_class_passthrough() {
        let html = render(|| view! { <SpinnerIcon class="animate-spin" /> }.into_any());
        assert!(html.contains("class=\"animate-spin\""), "{html}");
    }
}
