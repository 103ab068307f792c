use leptos::prelude::*;

#[component]
pub fn SoundWaves() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-1 h-12 my-4">
            {(0..10)
                .map(|i| {
                    view! {
                        <div
                            class="sound-wave-bar w-1 bg-indigo-400 rounded-full"
                            style:animation-delay=format!("{}ms", i * 100)
                        ></div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
