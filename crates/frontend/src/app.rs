use crate::usecases::u101_process_pdf::ui::ProcessPdfPage;
use leptos::prelude::*;

/// Application root. The workflow has a single page, so it is mounted
/// directly without a router.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ProcessPdfPage />
    }
}
