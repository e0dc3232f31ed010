use leptos::prelude::*;

use crate::site::NAV_LINKS;

/// Section links. The mobile popover passes `close` so a tap also dismisses it.
#[component]
pub fn Nav(#[prop(optional)] close: Option<Callback<()>>) -> impl IntoView {
    view! {
        <nav>
            <ul class="flex flex-col md:flex-row gap-6 md:gap-10 md:items-center">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    title=link.label
                                    class="text-base font-medium text-gray-900 transition-all duration-200 rounded focus:outline-none hover:text-opacity-50"
                                    on:click=move |_| {
                                        if let Some(close) = close {
                                            close.run(());
                                        }
                                    }
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
