use leptos::prelude::*;

use crate::site::copyright_year;

const INPUT_CLASS: &str = "block w-full p-4 text-black placeholder-gray-500 transition-all duration-200 bg-white border border-gray-200 rounded-md focus:outline-none focus:border-blue-600 caret-blue-600";

/// Footer with the (unwired) collaboration form.
#[component]
pub fn ContactFooter() -> impl IntoView {
    view! {
        <footer class="py-[112px] pb-12 bg-gray-900 text-white" id="contact">
            <div class="px-4 mx-auto sm:px-6 lg:px-8 max-w-7xl">
                <div class="grid grid-cols-1 sm:grid-cols-4 gap-y-16 gap-x-12">
                    <div class="sm:col-span-2">
                        <form action="#" class="mt-6">
                            <p>"Shoot me a message for collaboration"</p>
                            <div class="mt-3">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    name="email"
                                    id="email"
                                    placeholder="Enter your email"
                                    class=INPUT_CLASS
                                />
                            </div>

                            <div class="mt-3">
                                <label for="message">"Enter your message"</label>
                                <textarea
                                    name="message"
                                    id="message"
                                    rows="5"
                                    placeholder=" Enter your message"
                                    class=INPUT_CLASS
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="inline-flex items-center justify-center px-6 py-4 mt-3 font-semibold text-white transition-all duration-200 bg-blue-600 rounded-md hover:bg-blue-700 focus:bg-blue-700"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>

                <hr class="mt-16 mb-10 border-gray-200" />

                <p class="text-sm text-center text-gray-600">
                    {format!("© Copyright {}, All Rights Reserved", copyright_year())}
                </p>
            </div>
        </footer>
    }
}
