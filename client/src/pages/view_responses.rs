//! Placeholder view for message responses.

use leptos::prelude::*;

#[component]
pub fn ViewResponsesPage() -> impl IntoView {
    view! {
        <div class="view-responses">
            <h1 class="page-title">"Cevap Görüntüle"</h1>
            <p class="page-placeholder">"Gönderilen mesajlara gelen cevaplar burada listelenecek."</p>
        </div>
    }
}
