use leptos::prelude::*;

#[component]
pub fn LoadingWave(
    #[prop(default = "Processing\u{2026}")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-6">
            <span class="loading-spinner text-5xl text-indigo-400">"\u{25CC}"</span>

            <div class="text-center space-y-2">
                <p class="text-white font-medium">{message}</p>
                <div class="flex space-x-1 justify-center">
                    {(0..5)
                        .map(|i| {
                            view! {
                                <div
                                    class="w-2 h-8 bg-indigo-400 rounded-full animate-pulse"
                                    style:animation-delay=format!("{}ms", i * 200)
                                ></div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
