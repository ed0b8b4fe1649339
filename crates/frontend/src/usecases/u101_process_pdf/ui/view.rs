use super::view_model::ProcessPdfViewModel;
use contracts::usecases::u101_process_pdf::ArtifactKind;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Страница обработки PDF: выбор файла, загрузка, получение артефактов
#[component]
pub fn ProcessPdfPage() -> impl IntoView {
    let vm = ProcessPdfViewModel::new();

    // Обработка выбора файла
    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        vm.select_file(file);
    };

    view! {
        <div class="process-pdf">
            <div class="process-pdf__card">
                <h1 class="process-pdf__title">"PDF Processor"</h1>

                <div class="process-pdf__filebar">
                    <label class="button button--primary process-pdf__file-btn" for="pdf-file-input">
                        "Select PDF file"
                    </label>
                    <input
                        id="pdf-file-input"
                        type="file"
                        accept=".pdf"
                        on:change=handle_file_select
                        class="hidden"
                    />
                    {move || match vm.selected_file_name.get() {
                        Some(name) => view! {
                            <span class="process-pdf__fileinfo">
                                <strong>{name}</strong>
                            </span>
                        }.into_any(),
                        None => view! {
                            <span class="process-pdf__filehint">"Only PDF files are accepted."</span>
                        }.into_any(),
                    }}
                </div>

                {move || vm.error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error process-pdf__error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}

                <div class="process-pdf__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.upload()
                        disabled=Signal::derive(move || {
                            vm.selected_file_name.get().is_none() || vm.is_uploading.get()
                        })
                    >
                        "Upload PDF"
                    </Button>
                    <Show when=move || vm.is_uploading.get()>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span>"Uploading..."</span>
                        </Space>
                    </Show>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.retrieve(ArtifactKind::Excel)
                        disabled=Signal::derive(move || {
                            vm.artifacts.get().filename(ArtifactKind::Excel).is_none()
                                || vm.is_uploading.get()
                        })
                    >
                        "Download Excel"
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.retrieve(ArtifactKind::Json)
                        disabled=Signal::derive(move || {
                            vm.artifacts.get().filename(ArtifactKind::Json).is_none()
                                || vm.is_uploading.get()
                        })
                    >
                        "Download JSON"
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.retrieve(ArtifactKind::Graph)
                        disabled=Signal::derive(move || {
                            vm.artifacts.get().filename(ArtifactKind::Graph).is_none()
                                || vm.is_uploading.get()
                        })
                    >
                        "Visualize Graph"
                    </Button>
                </div>
            </div>
        </div>
    }
}
